//! Щільна сітка клітинок вкладки
//!
//! calamine повертає діапазон від першої непорожньої клітинки, а номери
//! рядків заголовка рахуються від A1. Сітка вирівнює все до A1.

use calamine::{Data, Range};

/// Текстові значення клітинок вкладки, починаючи з A1
#[derive(Debug, Clone, Default)]
pub struct SheetGrid {
    rows: Vec<Vec<String>>,
}

impl SheetGrid {
    pub fn from_range(range: &Range<Data>) -> Self {
        let Some((end_row, end_col)) = range.end() else {
            return Self::default();
        };

        let rows = (0..=end_row)
            .map(|row| {
                (0..=end_col)
                    .map(|col| range.get_value((row, col)).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();

        Self { rows }
    }

    /// Рядок за індексом від нуля
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Текст клітинки; помилки формул читаються як порожні клітинки
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        // 1000.0 -> "1000"
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Рядок без жодного непорожнього значення
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}
