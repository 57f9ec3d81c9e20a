use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Метаданные загрузки, общие для всех записей одной загрузки
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionForm {
    /// Обязательное, непустое после trim
    #[serde(rename = "customerName", default)]
    pub customer_name: String,

    /// Обязательное
    #[serde(rename = "allocationDate", default)]
    pub allocation_date: Option<NaiveDate>,

    #[serde(rename = "pdiDate", default)]
    pub pdi_date: Option<NaiveDate>,

    #[serde(rename = "indentNumber", default)]
    pub indent_number: String,
}

impl IngestionForm {
    /// Незаполненные обязательные поля (имена как в форме)
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.customer_name.trim().is_empty() {
            missing.push("customerName");
        }
        if self.allocation_date.is_none() {
            missing.push("allocationDate");
        }
        missing
    }
}
