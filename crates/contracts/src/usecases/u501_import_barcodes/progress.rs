use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Состояние сессии загрузки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Файл не выбран
    Idle,
    /// Файл выбран, чтение ещё не завершено
    Reading,
    /// Данные подготовлены, фиксация разрешена
    Ready,
    /// Данные подготовлены, но фиксация запрещена (см. BlockReason)
    Blocked,
}

/// Причина, по которой фиксация запрещена
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum BlockReason {
    InvalidBarcodes { count: usize },
    DuplicateBarcodes { count: usize },
    MissingField { field: String },
}

impl std::fmt::Display for BlockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockReason::InvalidBarcodes { count } => {
                write!(f, "{} barcode(s) with invalid format", count)
            }
            BlockReason::DuplicateBarcodes { count } => {
                write!(f, "{} duplicate barcode(s)", count)
            }
            BlockReason::MissingField { field } => write!(f, "{} is required", field),
        }
    }
}

/// Билет на чтение файла. Завершение чтения принимается только
/// с билетом текущей сессии.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadTicket {
    pub session_id: Uuid,
    pub file_name: String,
}
