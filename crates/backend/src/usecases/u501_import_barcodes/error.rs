use contracts::usecases::common::UseCaseError;
use thiserror::Error;

use crate::shared::excel::CodecError;

/// Ошибки сессии загрузки. Все восстановимые: реестр при них не меняется.
#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("no file loaded")]
    NoFileLoaded,

    #[error("read result belongs to a replaced upload and was discarded")]
    StaleRead,

    #[error("cannot decode spreadsheet '{file_name}': {source}")]
    Decoding {
        file_name: String,
        #[source]
        source: CodecError,
    },

    #[error("cannot read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("{invalid} invalid and {duplicate} duplicate barcode(s) must be fixed before upload")]
    ScanIssues {
        invalid: usize,
        duplicate: usize,
        /// Уже усечённые строки для показа ("B3: ICONXYZ", "+2 more")
        details: Vec<String>,
    },

    #[error("please fill in required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),
}

impl From<IngestionError> for UseCaseError {
    fn from(err: IngestionError) -> Self {
        let message = err.to_string();
        match err {
            IngestionError::NoFileLoaded => UseCaseError::new(UseCaseError::NO_FILE, message),
            IngestionError::StaleRead => UseCaseError::new(UseCaseError::STALE_READ, message),
            IngestionError::Decoding { source, .. } => {
                UseCaseError::decoding(message).with_details(source.to_string())
            }
            IngestionError::Io(_) => UseCaseError::new(UseCaseError::IO_ERROR, message),
            IngestionError::ScanIssues {
                invalid, details, ..
            } => {
                let code = if invalid > 0 {
                    UseCaseError::FORMAT_ERROR
                } else {
                    UseCaseError::DUPLICATE_ERROR
                };
                UseCaseError::new(code, message).with_details(details.join("\n"))
            }
            IngestionError::MissingRequiredFields(_) => UseCaseError::required_field(message),
        }
    }
}
