//! Визначення колонок ID та назви за заголовками
//!
//! Кожна евристика є окремим `ColumnResolver`; ланцюжок пробує їх по черзі
//! і повертає першу знайдену колонку.

/// Слова, що вказують на колонку з даними фіду
const FEED_CONTEXT: &[&str] = &["фід", "feed", "категор", "category"];

const ID_LABELS: &[&str] = &["id", "id категорії", "category id", "id з фід"];

const NAME_LABELS: &[&str] = &[
    "назва",
    "name",
    "назва категорії",
    "category name",
    "категорії фіду",
    "категорії фід",
];

/// Одна евристика пошуку колонки
pub trait ColumnResolver {
    /// `labels` уже в нижньому регістрі
    fn try_resolve(&self, labels: &[String]) -> Option<usize>;
}

/// Заголовок містить одне з `any_of`, одне з `context` і жодного з `excluded`
pub struct KeywordLabel {
    pub any_of: &'static [&'static str],
    pub context: &'static [&'static str],
    pub excluded: &'static [&'static str],
}

impl ColumnResolver for KeywordLabel {
    fn try_resolve(&self, labels: &[String]) -> Option<usize> {
        labels.iter().position(|label| {
            self.any_of.iter().any(|k| label.contains(k))
                && self.context.iter().any(|k| label.contains(k))
                && !self.excluded.iter().any(|k| label.contains(k))
        })
    }
}

/// Заголовок точно дорівнює одному з відомих
pub struct ExactLabel(pub &'static [&'static str]);

impl ColumnResolver for ExactLabel {
    fn try_resolve(&self, labels: &[String]) -> Option<usize> {
        labels.iter().position(|label| self.0.contains(&label.as_str()))
    }
}

/// Колонка за позицією, якщо вона існує
pub struct Positional(pub usize);

impl ColumnResolver for Positional {
    fn try_resolve(&self, labels: &[String]) -> Option<usize> {
        (self.0 < labels.len()).then_some(self.0)
    }
}

/// Впорядкований ланцюжок евристик
pub struct ColumnInference {
    resolvers: Vec<Box<dyn ColumnResolver>>,
}

impl ColumnInference {
    pub fn new(resolvers: Vec<Box<dyn ColumnResolver>>) -> Self {
        Self { resolvers }
    }

    /// Колонка "ID категорії з фіду"
    pub fn category_id() -> Self {
        Self::new(vec![
            Box::new(KeywordLabel {
                any_of: &["id"],
                context: FEED_CONTEXT,
                excluded: &[],
            }),
            Box::new(ExactLabel(ID_LABELS)),
            Box::new(Positional(0)),
        ])
    }

    /// Колонка "Назва категорії з фіду" / "Категорії фіду"
    pub fn category_name() -> Self {
        Self::new(vec![
            Box::new(KeywordLabel {
                any_of: &["назва", "name"],
                context: FEED_CONTEXT,
                excluded: &[],
            }),
            Box::new(KeywordLabel {
                any_of: &["категор"],
                context: &["фід"],
                excluded: &["id"],
            }),
            Box::new(ExactLabel(NAME_LABELS)),
            Box::new(Positional(1)),
        ])
    }

    /// Знайти колонку за заголовками як є (регістр не важливий)
    pub fn resolve(&self, labels: &[String]) -> Option<usize> {
        let lowered: Vec<String> = labels.iter().map(|l| l.to_lowercase()).collect();
        self.resolvers.iter().find_map(|r| r.try_resolve(&lowered))
    }
}
