use contracts::domain::a001_barcode_record::BarcodeRecord;
use std::sync::Arc;

/// In-memory хранилище записей (только на время сессии приложения).
///
/// Copy-on-write на уровне коллекции: снимки, выданные через `snapshot()`,
/// не меняются при последующих мутациях.
#[derive(Debug, Clone, Default)]
pub struct RegistryStore {
    records: Arc<Vec<BarcodeRecord>>,
}

impl RegistryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> &[BarcodeRecord] {
        self.records.as_slice()
    }

    pub fn snapshot(&self) -> Arc<Vec<BarcodeRecord>> {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_barcode(&self, barcode: &str) -> Option<&BarcodeRecord> {
        self.records.iter().find(|r| r.barcode == barcode)
    }

    pub fn contains(&self, barcode: &str) -> bool {
        self.find_by_barcode(barcode).is_some()
    }

    /// Добавить записи в конец, сохраняя их порядок
    pub fn append(&mut self, records: Vec<BarcodeRecord>) {
        if records.is_empty() {
            return;
        }
        Arc::make_mut(&mut self.records).extend(records);
    }

    /// Изменить записи, подходящие под `predicate`. Возвращает число записей.
    pub fn modify_where<P, F>(&mut self, predicate: P, mut apply: F) -> usize
    where
        P: Fn(&BarcodeRecord) -> bool,
        F: FnMut(&mut BarcodeRecord),
    {
        // Не копируем коллекцию, если менять нечего
        if !self.records.iter().any(&predicate) {
            return 0;
        }

        let mut count = 0;
        for record in Arc::make_mut(&mut self.records).iter_mut() {
            if predicate(record) {
                apply(record);
                count += 1;
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(barcode: &str) -> BarcodeRecord {
        BarcodeRecord {
            barcode: barcode.to_string(),
            customer_name: "Acme".to_string(),
            allocation_date: "2024-03-15".to_string(),
            pdi_date: String::new(),
            indent_number: String::new(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_snapshot_is_not_affected_by_mutation() {
        let mut store = RegistryStore::new();
        store.append(vec![record("ICON0000000000001")]);

        let before = store.snapshot();
        let changed = store.modify_where(
            |r| r.barcode == "ICON0000000000001",
            |r| r.customer_name = "Other".to_string(),
        );

        assert_eq!(changed, 1);
        assert_eq!(before[0].customer_name, "Acme");
        assert_eq!(store.all()[0].customer_name, "Other");
    }

    #[test]
    fn test_modify_without_match_keeps_collection() {
        let mut store = RegistryStore::new();
        store.append(vec![record("ICON0000000000001")]);
        let before = store.snapshot();

        let changed = store.modify_where(|r| r.barcode == "missing", |_| unreachable!());

        assert_eq!(changed, 0);
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_append_keeps_order() {
        let mut store = RegistryStore::new();
        store.append(vec![record("B"), record("A")]);
        store.append(vec![record("C")]);
        let keys: Vec<_> = store.all().iter().map(|r| r.barcode.as_str()).collect();
        assert_eq!(keys, vec!["B", "A", "C"]);
        assert!(store.contains("A"));
        assert!(!store.contains("D"));
    }
}
