use anyhow::{Context, Result};
use contracts::projections::p900_barcode_export::BarcodeExportRow;
use contracts::shared::export::ExcelExportable;
use std::path::{Path, PathBuf};

use super::projection_builder;
use crate::domain::a001_barcode_record::BarcodeRegistry;
use crate::shared::config::ExportConfig;
use crate::shared::excel::{CodecError, SheetEncoder, XlsxEncoder};

/// Готовый файл экспорта
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub row_count: usize,
}

/// Экспорт всего реестра (без учёта поиска и сортировки таблицы)
pub fn build_export(
    registry: &BarcodeRegistry,
    config: &ExportConfig,
) -> Result<ExportFile, CodecError> {
    build_export_with(registry, config, &XlsxEncoder)
}

pub fn build_export_with<E: SheetEncoder>(
    registry: &BarcodeRegistry,
    config: &ExportConfig,
    encoder: &E,
) -> Result<ExportFile, CodecError> {
    let rows = projection_builder::project(registry, &config.datetime_format);
    let values: Vec<Vec<String>> = rows.iter().map(ExcelExportable::to_row).collect();
    let headers = BarcodeExportRow::headers();

    let bytes = encoder.encode(&config.sheet_name, &headers, &values)?;

    if rows.is_empty() {
        tracing::warn!("Exporting empty registry: file contains only the header row");
    }
    tracing::info!(
        "Built export {}.xlsx: {} rows, {} bytes",
        config.file_name,
        rows.len(),
        bytes.len()
    );

    Ok(ExportFile {
        file_name: format!("{}.xlsx", config.file_name),
        bytes,
        row_count: rows.len(),
    })
}

/// Собрать экспорт и записать его в каталог. Возвращает путь к файлу.
pub async fn save_export(
    registry: &BarcodeRegistry,
    config: &ExportConfig,
    dir: &Path,
) -> Result<PathBuf> {
    let file = build_export(registry, config)?;
    let path = dir.join(&file.file_name);

    tokio::fs::write(&path, &file.bytes)
        .await
        .with_context(|| format!("Failed to write export to {}", path.display()))?;

    tracing::info!("Export saved to {}", path.display());
    Ok(path)
}
