//! Типи даних звірки категорій
//!
//! - CategoryPair: (ID, назва) категорії з Excel або XML-фіду
//! - NameMismatch: спільний ID з різними назвами
//! - ComparisonReport: результат порівняння двох джерел

use serde::{Deserialize, Serialize};

/// Скільки ID показувати у стислому підсумку
const DETAILS_PREVIEW: usize = 5;
/// Скільки відсутніх ID показувати в повідомленні перевірки
const MISSING_PREVIEW: usize = 10;
/// Скільки розбіжностей назв показувати в повідомленні перевірки
const MISMATCH_PREVIEW: usize = 5;

/// Пара (ID категорії, назва категорії)
///
/// У Excel назва може бути шляхом `"Батько > Дочірня"`, у XML-фіді це завжди
/// лише кінцева назва.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryPair {
    pub id: String,
    pub name: String,
}

impl CategoryPair {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl From<(&str, &str)> for CategoryPair {
    fn from((id, name): (&str, &str)) -> Self {
        Self::new(id, name)
    }
}

/// Розбіжність назв для ID, присутнього в обох джерелах
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameMismatch {
    pub id: String,
    pub workbook_name: String,
    pub feed_name: String,
}

/// Політика перевірки звіту
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoveragePolicy {
    /// Кожна категорія з Excel має бути у фіді з тією ж назвою.
    /// Фід може містити категорії, відфільтровані з Excel.
    #[default]
    WorkbookInFeed,
    /// Повний збіг обох джерел
    Exact,
}

/// Звіт порівняння категорій Excel та XML-фіду
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    /// Є у фіді, відсутні в Excel
    pub missing_in_workbook: Vec<CategoryPair>,
    /// Є в Excel, відсутні у фіді
    pub missing_in_feed: Vec<CategoryPair>,
    /// Спільні ID з різними назвами
    pub mismatched_names: Vec<NameMismatch>,
    /// Кількість пар з Excel (до згортання дублікатів)
    pub workbook_count: usize,
    /// Кількість пар з фіду (до згортання дублікатів)
    pub feed_count: usize,
    /// Кількість спільних ID
    pub common_count: usize,
    pub all_match: bool,
}

impl ComparisonReport {
    /// Стислий підсумок: перші ID кожного непорожнього списку
    pub fn details(&self) -> String {
        let mut parts = Vec::new();

        if !self.missing_in_workbook.is_empty() {
            parts.push(format!(
                "Відсутні в Excel ({}): {}",
                self.missing_in_workbook.len(),
                preview_ids(self.missing_in_workbook.iter().map(|p| p.id.as_str()), DETAILS_PREVIEW)
            ));
        }
        if !self.missing_in_feed.is_empty() {
            parts.push(format!(
                "Відсутні в XML ({}): {}",
                self.missing_in_feed.len(),
                preview_ids(self.missing_in_feed.iter().map(|p| p.id.as_str()), DETAILS_PREVIEW)
            ));
        }
        if !self.mismatched_names.is_empty() {
            parts.push(format!(
                "Невідповідність назв ({}): {}",
                self.mismatched_names.len(),
                preview_ids(self.mismatched_names.iter().map(|m| m.id.as_str()), DETAILS_PREVIEW)
            ));
        }

        if parts.is_empty() {
            "Всі категорії відповідають".to_string()
        } else {
            parts.join("; ")
        }
    }

    /// Перевірити звіт за політикою
    ///
    /// Повертає повідомлення про всі порушення, розділені переносом рядка.
    pub fn verify(&self, policy: CoveragePolicy) -> Result<(), String> {
        let mut failures = Vec::new();

        if policy == CoveragePolicy::Exact && !self.missing_in_workbook.is_empty() {
            failures.push(format!(
                "Категорії з XML-фіду відсутні в Excel ({}): {}",
                self.missing_in_workbook.len(),
                preview_ids(self.missing_in_workbook.iter().map(|p| p.id.as_str()), MISSING_PREVIEW)
            ));
        }

        if !self.missing_in_feed.is_empty() {
            failures.push(format!(
                "Категорії з Excel відсутні в XML-фіді ({}): {}",
                self.missing_in_feed.len(),
                preview_ids(self.missing_in_feed.iter().map(|p| p.id.as_str()), MISSING_PREVIEW)
            ));
        }

        if !self.mismatched_names.is_empty() {
            let shown: Vec<String> = self
                .mismatched_names
                .iter()
                .take(MISMATCH_PREVIEW)
                .map(|m| format!("{} (Excel: '{}', XML: '{}')", m.id, m.workbook_name, m.feed_name))
                .collect();
            failures.push(format!(
                "Невідповідність назв категорій ({}): {}",
                self.mismatched_names.len(),
                shown.join(", ")
            ));
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(failures.join("\n"))
        }
    }
}

fn preview_ids<'a>(ids: impl Iterator<Item = &'a str>, limit: usize) -> String {
    ids.take(limit).collect::<Vec<_>>().join(", ")
}
