pub mod aggregate;

pub use aggregate::{
    BarcodeField, BarcodeRecord, BarcodeRecordPatch, SortDirection, SortField, SortSpec,
};
