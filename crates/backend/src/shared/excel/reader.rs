use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use super::types::{CellValue, CodecError, Grid};

/// Декодер: байты файла -> used range первого листа
pub trait SheetDecoder {
    fn decode_first_sheet(&self, bytes: &[u8]) -> Result<Grid, CodecError>;
}

/// Декодер .xlsx / .xls на calamine (формат определяется по содержимому)
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxDecoder;

impl SheetDecoder for XlsxDecoder {
    fn decode_first_sheet(&self, bytes: &[u8]) -> Result<Grid, CodecError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|e| CodecError::Open(e.to_string()))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or(CodecError::NoSheets)?
            .map_err(|e| CodecError::Sheet(e.to_string()))?;

        // Пустой лист: calamine не даёт начала диапазона
        let Some((start_row, start_column)) = range.start() else {
            return Ok(Grid::default());
        };

        let rows: Vec<Vec<CellValue>> = range
            .rows()
            .map(|row| row.iter().map(cell_value).collect())
            .collect();

        tracing::debug!(
            "Decoded first sheet: {} rows starting at ({}, {})",
            rows.len(),
            start_row,
            start_column
        );

        Ok(Grid::new(start_row, start_column, rows))
    }
}

fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::String(s.clone()),
        Data::Int(v) => CellValue::Int(*v),
        Data::Float(v) => CellValue::Float(*v),
        Data::Bool(v) => CellValue::Bool(*v),
        Data::Error(e) => CellValue::Error(format!("{:?}", e)),
        other => CellValue::DateTime(other.to_string()),
    }
}
