use serde::{Deserialize, Serialize};

/// Ошибка выполнения UseCase в виде, пригодном для показа пользователю
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCaseError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl UseCaseError {
    pub const FORMAT_ERROR: &'static str = "FORMAT_ERROR";
    pub const DUPLICATE_ERROR: &'static str = "DUPLICATE_ERROR";
    pub const REQUIRED_FIELD: &'static str = "REQUIRED_FIELD";
    pub const DECODING_ERROR: &'static str = "DECODING_ERROR";
    pub const STALE_READ: &'static str = "STALE_READ";
    pub const NO_FILE: &'static str = "NO_FILE";
    pub const IO_ERROR: &'static str = "IO_ERROR";
    pub const INTERNAL_ERROR: &'static str = "INTERNAL_ERROR";

    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn required_field(message: impl Into<String>) -> Self {
        Self::new(Self::REQUIRED_FIELD, message)
    }

    pub fn decoding(message: impl Into<String>) -> Self {
        Self::new(Self::DECODING_ERROR, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(Self::INTERNAL_ERROR, message)
    }
}

impl std::fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for UseCaseError {}

impl From<anyhow::Error> for UseCaseError {
    fn from(err: anyhow::Error) -> Self {
        UseCaseError::internal(err.to_string())
    }
}
