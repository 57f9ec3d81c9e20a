use contracts::usecases::u501_import_barcodes::{ScanIssue, ScanResult};
use std::collections::HashSet;

use crate::domain::a001_barcode_record::validation;
use crate::shared::excel::{CellValue, Grid};
use crate::shared::format::format_count;

/// Сканирует used range листа и классифицирует кандидатов.
///
/// Обход строго по строкам, затем по колонкам: от этого зависит порядок
/// ошибок и то, какое вхождение дубликата считается первым. Кандидаты —
/// только строковые ячейки, начинающиеся с префикса после trim.
pub fn scan(grid: &Grid) -> ScanResult {
    let mut result = ScanResult::default();
    let mut seen: HashSet<&str> = HashSet::new();

    for (cell, value) in grid.cells() {
        let CellValue::String(raw) = value else {
            continue;
        };
        let candidate = raw.trim();
        if !validation::is_candidate(candidate) {
            continue;
        }

        if !validation::is_valid(candidate) {
            result.invalid.push(ScanIssue::new(candidate, cell));
        } else if !seen.insert(candidate) {
            result.duplicate.push(ScanIssue::new(candidate, cell));
        } else {
            result.valid.push(candidate.to_string());
        }
    }

    tracing::info!(
        "Scanned {} cells: {} valid, {} invalid, {} duplicate",
        format_count(grid.cell_count()),
        result.valid.len(),
        result.invalid.len(),
        result.duplicate.len()
    );

    result
}
