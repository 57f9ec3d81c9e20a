//! Адаптер кодека электронных таблиц: чтение первого листа и запись экспорта

pub mod reader;
pub mod types;
pub mod writer;

pub use reader::{SheetDecoder, XlsxDecoder};
pub use types::{CellValue, CodecError, Grid};
pub use writer::{SheetEncoder, XlsxEncoder};
