use chrono::{DateTime, Local, Utc};
use std::fmt::Write;

/// Форматирует число с разделителями тысяч (точками)
///
/// # Примеры
/// ```
/// use backend::shared::format::format_count;
/// assert_eq!(format_count(1234567), "1.234.567");
/// assert_eq!(format_count(42), "42");
/// ```
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    // Длина первой группы: 1..=3 цифры
    let head = (digits.len() - 1) % 3 + 1;

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    out.push_str(&digits[..head]);
    for group in digits.as_bytes()[head..].chunks(3) {
        out.push('.');
        out.extend(group.iter().map(|&b| b as char));
    }
    out
}

/// Время загрузки в локальном часовом поясе по формату chrono.
/// При некорректном формате возвращает RFC 3339.
pub fn format_upload_time(timestamp: &DateTime<Utc>, format: &str) -> String {
    let local = timestamp.with_timezone(&Local);
    let mut out = String::new();
    if write!(out, "{}", local.format(format)).is_err() {
        return local.to_rfc3339();
    }
    out
}
