//! Збереження списків пар категорій у JSON
//!
//! Дає змогу зняти пари з Excel і фіду окремо, а звірити пізніше.

use crate::error::Result;
use crate::types::CategoryPair;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Розібрати список пар з JSON-рядка
pub fn pairs_from_json(content: &str) -> Result<Vec<CategoryPair>> {
    Ok(serde_json::from_str(content)?)
}

/// Серіалізувати список пар у JSON-рядок
pub fn pairs_to_json(pairs: &[CategoryPair]) -> Result<String> {
    Ok(serde_json::to_string_pretty(pairs)?)
}

/// Прочитати список пар з файлу
pub fn load_pairs(path: &Path) -> Result<Vec<CategoryPair>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Записати список пар у файл
pub fn save_pairs(pairs: &[CategoryPair], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, pairs)?;
    Ok(())
}
