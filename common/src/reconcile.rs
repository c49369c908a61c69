//! Звірка категорій Excel та XML-фіду
//!
//! Обидва списки згортаються в мапу ID → назва (при дублікатах виграє
//! останнє входження), після чого рахуються різниці множин ID і
//! перевіряються назви спільних ID.

use crate::types::{CategoryPair, ComparisonReport, NameMismatch};
use std::collections::HashMap;

/// Роздільник ієрархії в назвах з Excel
const PATH_SEPARATOR: &str = " > ";

/// Чи відповідає назва з Excel назві з фіду
///
/// Excel може містити шлях `"Дім і сад > Домашній текстиль"`, фід лише
/// `"Домашній текстиль"`. Перевірка одностороння: хвостом має бути саме
/// назва з фіду.
///
/// Останнє правило не вимагає роздільника, тому `"XYZ Текстиль"` теж
/// збігається з `"Текстиль"`.
pub fn leaf_name_matches(workbook_name: &str, feed_name: &str) -> bool {
    if workbook_name == feed_name {
        return true;
    }
    if workbook_name.ends_with(&format!("{}{}", PATH_SEPARATOR, feed_name)) {
        return true;
    }
    workbook_name.trim().ends_with(feed_name)
}

/// Мапа ID → назва з порядком першої появи ID
struct CategoryIndex<'a> {
    order: Vec<&'a str>,
    names: HashMap<&'a str, &'a str>,
}

impl<'a> CategoryIndex<'a> {
    fn build(pairs: &'a [CategoryPair]) -> Self {
        let mut order = Vec::new();
        let mut names = HashMap::new();

        for pair in pairs {
            if names.insert(pair.id.as_str(), pair.name.as_str()).is_none() {
                order.push(pair.id.as_str());
            }
        }

        Self { order, names }
    }

    fn name(&self, id: &str) -> Option<&'a str> {
        self.names.get(id).copied()
    }

    fn contains(&self, id: &str) -> bool {
        self.names.contains_key(id)
    }

    fn entries(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.order.iter().map(|id| (*id, self.names[id]))
    }
}

/// Порівняти категорії з Excel з категоріями з фіду
pub fn compare(workbook_pairs: &[CategoryPair], feed_pairs: &[CategoryPair]) -> ComparisonReport {
    let workbook = CategoryIndex::build(workbook_pairs);
    let feed = CategoryIndex::build(feed_pairs);

    let missing_in_workbook: Vec<CategoryPair> = feed
        .entries()
        .filter(|(id, _)| !workbook.contains(id))
        .map(|(id, name)| CategoryPair::new(id, name))
        .collect();

    let mut missing_in_feed = Vec::new();
    let mut mismatched_names = Vec::new();
    let mut common_count = 0;

    for (id, workbook_name) in workbook.entries() {
        match feed.name(id) {
            None => missing_in_feed.push(CategoryPair::new(id, workbook_name)),
            Some(feed_name) => {
                common_count += 1;
                if !leaf_name_matches(workbook_name, feed_name) {
                    mismatched_names.push(NameMismatch {
                        id: id.to_string(),
                        workbook_name: workbook_name.to_string(),
                        feed_name: feed_name.to_string(),
                    });
                }
            }
        }
    }

    let all_match =
        missing_in_workbook.is_empty() && missing_in_feed.is_empty() && mismatched_names.is_empty();

    ComparisonReport {
        missing_in_workbook,
        missing_in_feed,
        mismatched_names,
        workbook_count: workbook_pairs.len(),
        feed_count: feed_pairs.len(),
        common_count,
        all_match,
    }
}
