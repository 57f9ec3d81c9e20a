use serde::{Deserialize, Serialize};

use crate::shared::export::ExcelExportable;

/// Заголовки файла экспорта (порядок фиксирован)
pub const EXPORT_HEADERS: [&str; 6] = [
    "Barcode",
    "Customer Name",
    "Allocation Date",
    "PDI Date",
    "Indent Number",
    "Upload Time",
];

/// Плоская строка экспорта реестра
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeExportRow {
    #[serde(rename = "Barcode")]
    pub barcode: String,
    #[serde(rename = "Customer Name")]
    pub customer_name: String,
    #[serde(rename = "Allocation Date")]
    pub allocation_date: String,
    #[serde(rename = "PDI Date")]
    pub pdi_date: String,
    #[serde(rename = "Indent Number")]
    pub indent_number: String,
    /// Время загрузки в локальном представлении
    #[serde(rename = "Upload Time")]
    pub upload_time: String,
}

impl ExcelExportable for BarcodeExportRow {
    fn headers() -> Vec<&'static str> {
        EXPORT_HEADERS.to_vec()
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.barcode.clone(),
            self.customer_name.clone(),
            self.allocation_date.clone(),
            self.pdi_date.clone(),
            self.indent_number.clone(),
            self.upload_time.clone(),
        ]
    }
}
