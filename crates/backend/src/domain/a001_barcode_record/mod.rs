pub mod repository;
pub mod selection;
pub mod service;
pub mod validation;

pub use selection::SelectionSet;
pub use service::BarcodeRegistry;
