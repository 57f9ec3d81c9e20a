use contracts::usecases::u501_import_barcodes::CellRef;
use thiserror::Error;

/// Типизированное значение ячейки после декодирования
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Дата/время/длительность в текстовом представлении кодека
    DateTime(String),
    Error(String),
}

impl CellValue {
    /// Текст ячейки, только для строковых значений
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

/// Прямоугольная область листа (used range)
///
/// `start_row`/`start_column` — абсолютная позиция левого верхнего угла,
/// чтобы адреса ячеек совпадали с тем, что видит пользователь в Excel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    start_row: u32,
    start_column: u32,
    rows: Vec<Vec<CellValue>>,
}

impl Grid {
    pub fn new(start_row: u32, start_column: u32, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            start_row,
            start_column,
            rows,
        }
    }

    /// Grid, начинающийся с A1
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        Self::new(0, 0, rows)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.is_empty())
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Все ячейки в порядке строк, затем колонок
    pub fn cells(&self) -> impl Iterator<Item = (CellRef, &CellValue)> + '_ {
        self.rows.iter().enumerate().flat_map(move |(r, row)| {
            row.iter().enumerate().map(move |(c, value)| {
                (
                    CellRef::new(self.start_row + r as u32, self.start_column + c as u32),
                    value,
                )
            })
        })
    }

    /// Заголовок листа: первая непустая строковая ячейка первой строки
    pub fn heading(&self) -> Option<&str> {
        self.rows
            .first()?
            .iter()
            .filter_map(CellValue::as_text)
            .map(str::trim)
            .find(|s| !s.is_empty())
    }
}

/// Ошибки кодека электронных таблиц
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("cannot open workbook: {0}")]
    Open(String),

    #[error("workbook has no sheets")]
    NoSheets,

    #[error("cannot read first sheet: {0}")]
    Sheet(String),

    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> CellValue {
        CellValue::String(v.to_string())
    }

    #[test]
    fn test_cells_are_row_major_with_offset() {
        let grid = Grid::new(
            2,
            1,
            vec![vec![s("a"), s("b")], vec![s("c")]],
        );
        let labels: Vec<String> = grid.cells().map(|(cell, _)| cell.label()).collect();
        assert_eq!(labels, vec!["B3", "C3", "B4"]);
        assert_eq!(grid.cell_count(), 3);
    }

    #[test]
    fn test_heading_skips_blank_and_non_string_cells() {
        let grid = Grid::from_rows(vec![
            vec![CellValue::Empty, CellValue::Int(7), s("  "), s(" 100W - 50 NOS Acme ")],
            vec![s("ICON0000000000000")],
        ]);
        assert_eq!(grid.heading(), Some("100W - 50 NOS Acme"));
        assert_eq!(Grid::default().heading(), None);
    }

    #[test]
    fn test_empty_grid() {
        assert!(Grid::default().is_empty());
        assert!(Grid::from_rows(vec![vec![], vec![]]).is_empty());
        assert!(!Grid::from_rows(vec![vec![CellValue::Empty]]).is_empty());
    }
}
