use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Итог успешной фиксации загрузки в реестр
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitReceipt {
    pub session_id: Uuid,
    pub file_name: String,
    pub committed: usize,
    pub timestamp: DateTime<Utc>,
}
