use std::collections::BTreeSet;

/// Отмеченные в таблице штрихкоды
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    barcodes: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, barcode: impl Into<String>) {
        self.barcodes.insert(barcode.into());
    }

    pub fn deselect(&mut self, barcode: &str) {
        self.barcodes.remove(barcode);
    }

    /// Переключить отметку; возвращает новое состояние
    pub fn toggle(&mut self, barcode: &str) -> bool {
        if self.barcodes.remove(barcode) {
            false
        } else {
            self.barcodes.insert(barcode.to_string());
            true
        }
    }

    /// Отметить все (например, все найденные поиском)
    pub fn select_all<I, S>(&mut self, barcodes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.barcodes.extend(barcodes.into_iter().map(Into::into));
    }

    pub fn clear(&mut self) {
        self.barcodes.clear();
    }

    pub fn contains(&self, barcode: &str) -> bool {
        self.barcodes.contains(barcode)
    }

    pub fn len(&self) -> usize {
        self.barcodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.barcodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.barcodes.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut selection = SelectionSet::new();
        assert!(selection.toggle("ICON0000000000001"));
        assert!(selection.contains("ICON0000000000001"));
        assert!(!selection.toggle("ICON0000000000001"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_and_clear() {
        let mut selection = SelectionSet::new();
        selection.select_all(["B", "A", "B"]);
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["A", "B"]);

        selection.deselect("A");
        assert_eq!(selection.len(), 1);

        selection.clear();
        assert!(selection.is_empty());
    }
}
