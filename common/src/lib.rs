//! Hub Mapping Common Library
//!
//! Модель даних і звірка категорій, спільні для CLI та тестового harness:
//! - types: пари категорій та звіт порівняння
//! - reconcile: порівняння списків і ієрархічна перевірка назв
//! - pairs: збереження списків пар у JSON

pub mod types;
pub mod error;
pub mod reconcile;
pub mod pairs;

pub use types::{CategoryPair, ComparisonReport, CoveragePolicy, NameMismatch};
pub use error::{Error, Result};
pub use reconcile::{compare, leaf_name_matches};
pub use pairs::{load_pairs, pairs_from_json, pairs_to_json, save_pairs};
