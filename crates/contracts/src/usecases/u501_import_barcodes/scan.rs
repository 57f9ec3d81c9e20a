use serde::{Deserialize, Serialize};

/// Адрес ячейки на листе (0-based, абсолютный)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef {
    pub row: u32,
    pub column: u32,
}

impl CellRef {
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Адрес в стиле A1: (0, 0) -> "A1", (9, 26) -> "AA10"
    pub fn label(&self) -> String {
        let mut letters = Vec::new();
        let mut n = self.column + 1;
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push((b'A' + rem as u8) as char);
            n = (n - 1) / 26;
        }
        let column: String = letters.into_iter().rev().collect();
        format!("{}{}", column, self.row + 1)
    }
}

impl std::fmt::Display for CellRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Проблемный кандидат и место, где он найден
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanIssue {
    pub value: String,
    pub cell: CellRef,
}

impl ScanIssue {
    pub fn new(value: impl Into<String>, cell: CellRef) -> Self {
        Self {
            value: value.into(),
            cell,
        }
    }
}

/// Результат сканирования листа
///
/// Каждый кандидат попадает ровно в один из списков. `valid` хранит
/// уникальные значения в порядке первого появления.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub valid: Vec<String>,
    pub invalid: Vec<ScanIssue>,
    pub duplicate: Vec<ScanIssue>,
}

impl ScanResult {
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty() && self.invalid.is_empty() && self.duplicate.is_empty()
    }

    /// Есть ли ошибки формата или дубликаты (блокируют фиксацию)
    pub fn has_issues(&self) -> bool {
        !self.invalid.is_empty() || !self.duplicate.is_empty()
    }

    pub fn total_candidates(&self) -> usize {
        self.valid.len() + self.invalid.len() + self.duplicate.len()
    }

    /// Строки для показа ошибок формата, не больше `limit` + строка "+N more"
    pub fn invalid_lines(&self, limit: usize) -> Vec<String> {
        issue_lines(&self.invalid, limit)
    }

    /// Строки для показа дубликатов, не больше `limit` + строка "+N more"
    pub fn duplicate_lines(&self, limit: usize) -> Vec<String> {
        issue_lines(&self.duplicate, limit)
    }
}

fn issue_lines(issues: &[ScanIssue], limit: usize) -> Vec<String> {
    let mut lines: Vec<String> = issues
        .iter()
        .take(limit)
        .map(|issue| format!("{}: {}", issue.cell.label(), issue.value))
        .collect();

    if issues.len() > limit {
        lines.push(format!("+{} more", issues.len() - limit));
    }
    lines
}
