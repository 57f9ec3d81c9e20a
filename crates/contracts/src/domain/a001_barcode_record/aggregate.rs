use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::shared::list::{Searchable, Sortable};

// ============================================================================
// Record
// ============================================================================

/// Запись реестра штрихкодов
///
/// `barcode` — натуральный ключ. Даты хранятся строками: после фиксации
/// пользователь может записать в них произвольный текст.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeRecord {
    #[serde(rename = "barcode")]
    pub barcode: String,

    #[serde(rename = "customerName", default)]
    pub customer_name: String,

    #[serde(rename = "allocationDate", default)]
    pub allocation_date: String,

    #[serde(rename = "pdiDate", default)]
    pub pdi_date: String,

    #[serde(rename = "indentNumber", default)]
    pub indent_number: String,

    /// Момент загрузки (общий для всех записей одной загрузки)
    #[serde(rename = "timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl BarcodeRecord {
    /// Записать значение в поле (без валидации)
    pub fn set_field(&mut self, field: BarcodeField, value: String) {
        match field {
            BarcodeField::CustomerName => self.customer_name = value,
            BarcodeField::AllocationDate => self.allocation_date = value,
            BarcodeField::PdiDate => self.pdi_date = value,
            BarcodeField::IndentNumber => self.indent_number = value,
        }
    }

    /// Применить патч: пустые значения означают "не менять".
    /// Возвращает список фактически затронутых полей.
    pub fn apply_patch(&mut self, patch: &BarcodeRecordPatch) -> Vec<BarcodeField> {
        let mut touched = Vec::new();
        for (field, value) in patch.entries() {
            self.set_field(field, value.to_string());
            touched.push(field);
        }
        touched
    }
}

impl Searchable for BarcodeRecord {
    fn matches_filter(&self, filter: &str) -> bool {
        self.barcode.to_lowercase().contains(&filter.to_lowercase())
    }
}

impl Sortable for BarcodeRecord {
    type Key = SortField;

    fn compare_by_field(&self, other: &Self, field: SortField) -> Ordering {
        match field {
            SortField::Barcode => self.barcode.cmp(&other.barcode),
            SortField::CustomerName => self.customer_name.cmp(&other.customer_name),
            SortField::AllocationDate => self.allocation_date.cmp(&other.allocation_date),
            SortField::PdiDate => self.pdi_date.cmp(&other.pdi_date),
            SortField::IndentNumber => self.indent_number.cmp(&other.indent_number),
            SortField::Timestamp => self.timestamp.cmp(&other.timestamp),
        }
    }
}

// ============================================================================
// Editable fields
// ============================================================================

/// Редактируемые поля записи. Ключ (`barcode`) и `timestamp` не редактируются.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BarcodeField {
    CustomerName,
    AllocationDate,
    PdiDate,
    IndentNumber,
}

impl BarcodeField {
    pub const ALL: [BarcodeField; 4] = [
        BarcodeField::CustomerName,
        BarcodeField::AllocationDate,
        BarcodeField::PdiDate,
        BarcodeField::IndentNumber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BarcodeField::CustomerName => "customerName",
            BarcodeField::AllocationDate => "allocationDate",
            BarcodeField::PdiDate => "pdiDate",
            BarcodeField::IndentNumber => "indentNumber",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl std::fmt::Display for BarcodeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Частичное обновление для массового редактирования.
///
/// `None` и пустая строка одинаково означают "оставить как есть":
/// явная очистка поля не поддерживается.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeRecordPatch {
    #[serde(rename = "customerName", default)]
    pub customer_name: Option<String>,

    #[serde(rename = "allocationDate", default)]
    pub allocation_date: Option<String>,

    #[serde(rename = "pdiDate", default)]
    pub pdi_date: Option<String>,

    #[serde(rename = "indentNumber", default)]
    pub indent_number: Option<String>,
}

impl BarcodeRecordPatch {
    pub fn with(mut self, field: BarcodeField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            BarcodeField::CustomerName => self.customer_name = value,
            BarcodeField::AllocationDate => self.allocation_date = value,
            BarcodeField::PdiDate => self.pdi_date = value,
            BarcodeField::IndentNumber => self.indent_number = value,
        }
        self
    }

    /// Непустые поля патча
    pub fn entries(&self) -> Vec<(BarcodeField, &str)> {
        [
            (BarcodeField::CustomerName, &self.customer_name),
            (BarcodeField::AllocationDate, &self.allocation_date),
            (BarcodeField::PdiDate, &self.pdi_date),
            (BarcodeField::IndentNumber, &self.indent_number),
        ]
        .into_iter()
        .filter_map(|(field, value)| match value.as_deref() {
            Some(v) if !v.is_empty() => Some((field, v)),
            _ => None,
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

// ============================================================================
// Sorting
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Barcode,
    CustomerName,
    AllocationDate,
    PdiDate,
    IndentNumber,
    Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, SortDirection::Ascending)
    }
}

/// Состояние сортировки таблицы. Без ключа сортируем по `timestamp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: Option<SortField>,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn by(key: SortField, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Поле, по которому реально идёт сортировка
    pub fn effective_key(&self) -> SortField {
        self.key.unwrap_or(SortField::Timestamp)
    }

    /// Клик по заголовку: тот же ключ — меняем направление, новый — по возрастанию
    pub fn toggle(&mut self, field: SortField) {
        if self.key == Some(field) {
            self.direction = self.direction.reversed();
        } else {
            self.key = Some(field);
            self.direction = SortDirection::Ascending;
        }
    }
}
