pub mod dto;

pub use dto::{BarcodeExportRow, EXPORT_HEADERS};
