//! p900: выгрузка реестра штрихкодов в .xlsx

pub mod projection_builder;
pub mod service;

pub use service::{build_export, build_export_with, save_export, ExportFile};
