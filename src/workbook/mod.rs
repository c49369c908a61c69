//! Читання категорій фіду з Excel файлу мапінгу
//!
//! Файл мапінгу генерує Hub. Заголовок вкладки може бути в першому або
//! другому рядку (над ним буває об'єднаний рядок-назва), а назви колонок
//! відрізняються між версіями файлу.

pub mod columns;
pub mod grid;

use crate::error::{MappingError, Result};
use calamine::{open_workbook_auto, Reader, Sheets};
use columns::ColumnInference;
use grid::{is_blank_row, SheetGrid};
use hub_mapping_common::CategoryPair;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Рядки, які пробуються як заголовок (від 1)
const HEADER_ROW_CANDIDATES: [usize; 2] = [1, 2];

/// Значення першої колонки, що означають рядок-заголовок
const HEADER_ID_VALUES: &[&str] = &[
    "id",
    "назва",
    "name",
    "id категорії",
    "назва категорії",
    "id категорії фіду",
];

/// Значення другої колонки, що означають рядок-заголовок
const HEADER_NAME_VALUES: &[&str] = &["id", "назва", "name", "категорії фіду"];

/// Довші значення вважаються даними, а не заголовком
const HEADER_NAME_MAX_CHARS: usize = 25;

/// Вкладка з підписаними колонками
#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    /// Заголовки колонок; порожні замінені на `Column_N`
    pub labels: Vec<String>,
    /// Рядки даних після заголовка, без порожніх рядків
    pub rows: Vec<Vec<String>>,
    /// Кількість непорожніх клітинок у рядку заголовка
    pub labelled_columns: usize,
}

impl SheetTable {
    /// Побудувати таблицю із сітки; `header_row` рахується від 1, для 0 таблиця порожня
    pub fn from_grid(grid: &SheetGrid, header_row: usize) -> Self {
        let Some(header_index) = header_row.checked_sub(1) else {
            return Self::default();
        };
        let header = grid.row(header_index).unwrap_or(&[]);

        let labels = header
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let label = cell.trim();
                if label.is_empty() {
                    format!("Column_{}", i + 1)
                } else {
                    label.to_string()
                }
            })
            .collect();
        let labelled_columns = header.iter().filter(|c| !c.trim().is_empty()).count();

        let rows = grid
            .rows()
            .iter()
            .skip(header_row)
            .filter(|row| !is_blank_row(row))
            .cloned()
            .collect();

        Self {
            labels,
            rows,
            labelled_columns,
        }
    }

    /// Індекс колонки за заголовком
    pub fn column(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Значення клітинки за номером рядка даних і заголовком
    pub fn get(&self, row: usize, label: &str) -> Option<&str> {
        let col = self.column(label)?;
        self.rows.get(row)?.get(col).map(|s| s.as_str())
    }

    fn category_pairs(&self) -> Vec<CategoryPair> {
        let id_col = ColumnInference::category_id().resolve(&self.labels);
        let name_col = ColumnInference::category_name().resolve(&self.labels);
        debug!(?id_col, ?name_col, labels = ?self.labels, "колонки категорій");

        let (Some(id_col), Some(name_col)) = (id_col, name_col) else {
            return Vec::new();
        };

        self.rows
            .iter()
            .filter_map(|row| {
                let id = row.get(id_col)?.trim();
                let name = row.get(name_col)?.trim();
                if id.is_empty() || name.is_empty() {
                    return None;
                }
                Some(CategoryPair::new(id, name))
            })
            .collect()
    }
}

/// Читач категорій з Excel файлу мапінгу
///
/// Файл відкривається в `open` і закривається разом зі значенням.
pub struct WorkbookCategoryReader {
    path: PathBuf,
    workbook: Sheets<BufReader<File>>,
}

impl WorkbookCategoryReader {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MappingError::FileNotFound(path.display().to_string()));
        }

        let workbook = open_workbook_auto(path)
            .map_err(|e| MappingError::WorkbookOpen(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "Excel файл відкрито");

        Ok(Self {
            path: path.to_path_buf(),
            workbook,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Назви всіх вкладок у порядку файлу
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    pub fn sheet_exists(&self, sheet_name: &str) -> bool {
        self.sheet_names().iter().any(|s| s == sheet_name)
    }

    /// Перевірити наявність очікуваних вкладок
    ///
    /// Повертає (всі знайдені, відсутні вкладки у порядку `expected`).
    pub fn verify_sheets_exist<S: AsRef<str>>(&self, expected: &[S]) -> (bool, Vec<String>) {
        let existing = self.sheet_names();
        let missing: Vec<String> = expected
            .iter()
            .map(|s| s.as_ref())
            .filter(|s| !existing.iter().any(|e| e == s))
            .map(|s| s.to_string())
            .collect();

        (missing.is_empty(), missing)
    }

    /// Прочитати вкладку з заголовком у рядку `header_row` (від 1)
    pub fn read_sheet(&mut self, sheet_name: &str, header_row: usize) -> Result<SheetTable> {
        if header_row == 0 {
            return Err(MappingError::InvalidHeaderRow(header_row));
        }
        let grid = self.load_grid(sheet_name)?;
        Ok(SheetTable::from_grid(&grid, header_row))
    }

    /// Отримати пари (ID категорії з фіду, назва категорії з фіду)
    pub fn extract_category_pairs(&mut self, sheet_name: &str) -> Result<Vec<CategoryPair>> {
        let grid = self.load_grid(sheet_name)?;

        for header_row in HEADER_ROW_CANDIDATES {
            let table = SheetTable::from_grid(&grid, header_row);
            if table.labelled_columns < 2 {
                debug!(header_row, "рядок не схожий на заголовок");
                continue;
            }

            let pairs = table.category_pairs();
            if !pairs.is_empty() {
                info!(sheet = sheet_name, header_row, count = pairs.len(), "категорії прочитано");
                return Ok(pairs);
            }
            debug!(header_row, "заголовок не дав жодної пари");
        }

        let pairs = scan_headerless(&grid);
        warn!(
            sheet = sheet_name,
            count = pairs.len(),
            "заголовок не знайдено, використано перші дві колонки"
        );
        Ok(pairs)
    }

    fn load_grid(&mut self, sheet_name: &str) -> Result<SheetGrid> {
        if !self.sheet_exists(sheet_name) {
            return Err(MappingError::SheetNotFound(sheet_name.to_string()));
        }

        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(|e| MappingError::WorkbookOpen(format!("вкладка '{}': {}", sheet_name, e)))?;

        Ok(SheetGrid::from_range(&range))
    }
}

/// Сирі рядки без заголовка: перша колонка ID, друга назва
fn scan_headerless(grid: &SheetGrid) -> Vec<CategoryPair> {
    grid.rows()
        .iter()
        .filter(|row| row.len() >= 2)
        .filter_map(|row| {
            let id = row[0].trim();
            let name = row[1].trim();
            if id.is_empty() || name.is_empty() || is_header_like(id, name) {
                return None;
            }
            Some(CategoryPair::new(id, name))
        })
        .collect()
}

fn is_header_like(id: &str, name: &str) -> bool {
    let id_lower = id.to_lowercase();
    let name_lower = name.to_lowercase();

    if HEADER_ID_VALUES.contains(&id_lower.as_str())
        || HEADER_NAME_VALUES.contains(&name_lower.as_str())
    {
        return true;
    }
    if id_lower.contains("id") && id_lower.contains("категорії") && id_lower.contains("фід") {
        return true;
    }
    name_lower.contains("категорії")
        && name_lower.contains("фід")
        && name.chars().count() < HEADER_NAME_MAX_CHARS
}
