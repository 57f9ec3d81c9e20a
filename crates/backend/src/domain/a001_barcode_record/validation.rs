use once_cell::sync::Lazy;
use regex::Regex;

/// Префикс, по которому значение ячейки считается кандидатом в штрихкоды
pub const BARCODE_PREFIX: &str = "ICON";

/// Именованный формат штрихкода
pub struct BarcodeFormat {
    pub name: &'static str,
    pattern: Regex,
}

impl BarcodeFormat {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("barcode pattern is a valid literal"),
        }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.pattern.is_match(candidate)
    }
}

// [0-9] вместо \d: в regex \d совпадает с любыми юникодными цифрами
static BARCODE_FORMATS: Lazy<[BarcodeFormat; 3]> = Lazy::new(|| {
    [
        BarcodeFormat::new("ICON+13", r"^ICON[0-9]{13}$"),
        BarcodeFormat::new("ICON+3+L+10", r"^ICON[0-9]{3}[A-Z][0-9]{10}$"),
        BarcodeFormat::new("ICON+5+L+10", r"^ICON[0-9]{5}[A-Z][0-9]{10}$"),
    ]
});

/// Принятые форматы в порядке проверки
pub fn formats() -> &'static [BarcodeFormat] {
    BARCODE_FORMATS.as_slice()
}

/// Быстрый предфильтр: строка начинается с префикса (регистр важен)
pub fn is_candidate(value: &str) -> bool {
    value.starts_with(BARCODE_PREFIX)
}

/// Первый формат, которому строка соответствует целиком
pub fn matching_format(candidate: &str) -> Option<&'static str> {
    formats()
        .iter()
        .find(|format| format.matches(candidate))
        .map(|format| format.name)
}

/// Штрихкод валиден, если целиком совпадает хотя бы с одним форматом
pub fn is_valid(candidate: &str) -> bool {
    matching_format(candidate).is_some()
}
