//! u501: загрузка штрихкодов из файла Excel в реестр

pub mod customer_name;
pub mod error;
pub mod executor;
pub mod scanner;
pub mod session;

pub use customer_name::extract_name;
pub use error::IngestionError;
pub use executor::{read_upload, ImportExecutor};
pub use scanner::scan;
pub use session::{IngestionSession, ReadCompletion, StagedUpload};
