//! Звірка категорій Excel-мапінгу Hub з XML-фідом постачальника
//!
//! - workbook: читання пар (ID, назва) з вкладки Excel
//! - feed: завантаження та розбір XML-фіду
//! - reconcile: порівняння (реекспорт зі спільної бібліотеки)

pub mod cli;
pub mod config;
pub mod error;
pub mod feed;
pub mod workbook;

pub use hub_mapping_common::reconcile;
pub use hub_mapping_common::{CategoryPair, ComparisonReport, CoveragePolicy, NameMismatch};
