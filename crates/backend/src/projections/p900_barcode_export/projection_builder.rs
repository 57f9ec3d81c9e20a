use contracts::domain::a001_barcode_record::BarcodeRecord;
use contracts::projections::p900_barcode_export::BarcodeExportRow;

use crate::domain::a001_barcode_record::BarcodeRegistry;
use crate::shared::format::format_upload_time;

/// Конвертировать запись реестра в строку экспорта
pub fn from_record(record: &BarcodeRecord, datetime_format: &str) -> BarcodeExportRow {
    BarcodeExportRow {
        barcode: record.barcode.clone(),
        customer_name: record.customer_name.clone(),
        allocation_date: record.allocation_date.clone(),
        pdi_date: record.pdi_date.clone(),
        indent_number: record.indent_number.clone(),
        upload_time: format_upload_time(&record.timestamp, datetime_format),
    }
}

/// Все записи реестра в порядке добавления
pub fn project(registry: &BarcodeRegistry, datetime_format: &str) -> Vec<BarcodeExportRow> {
    registry
        .records()
        .iter()
        .map(|r| from_record(r, datetime_format))
        .collect()
}
