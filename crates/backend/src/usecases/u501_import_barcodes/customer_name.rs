use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

// "<digits>W - <digits> NOS <name>", имя до конца строки
static QUANTITY_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]+W\s*-\s*[0-9]+\s+NOS\s+(.*)")
        .expect("heading pattern is a valid literal")
});

static SPREADSHEET_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.xlsx?$").expect("extension pattern is a valid literal"));

/// Имя клиента из заголовка листа или имени файла.
///
/// Заголовок надёжнее имени файла, поэтому проверяется первым. Пустая
/// строка означает, что имя нужно ввести вручную.
pub fn extract_name(file_name: &str, heading: &str) -> String {
    if let Some(name) = match_name(heading) {
        return name;
    }

    let base = Path::new(file_name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    let stem = SPREADSHEET_EXTENSION.replace(&base, "");

    match_name(&stem).unwrap_or_default()
}

fn match_name(text: &str) -> Option<String> {
    let captures = QUANTITY_HEADING.captures(text.trim())?;
    let name = captures.get(1)?.as_str().trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
