use contracts::domain::a001_barcode_record::{
    BarcodeField, BarcodeRecord, BarcodeRecordPatch, SortSpec,
};
use contracts::shared::list::{filter_list, sort_list};
use std::sync::Arc;

use super::repository::RegistryStore;
use super::selection::SelectionSet;

/// Реестр зафиксированных штрихкодов.
///
/// Единственная точка изменения записей: фиксация загрузки, правка поля,
/// массовая правка. Удаления и отмены нет.
#[derive(Debug, Clone, Default)]
pub struct BarcodeRegistry {
    store: RegistryStore,
}

impl BarcodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Записи в порядке добавления
    pub fn records(&self) -> &[BarcodeRecord] {
        self.store.all()
    }

    /// Неизменяемый снимок для внешних наблюдателей
    pub fn snapshot(&self) -> Arc<Vec<BarcodeRecord>> {
        self.store.snapshot()
    }

    pub fn get(&self, barcode: &str) -> Option<&BarcodeRecord> {
        self.store.find_by_barcode(barcode)
    }

    pub fn barcodes(&self) -> Vec<String> {
        self.store.all().iter().map(|r| r.barcode.clone()).collect()
    }

    /// Фиксация записей одной загрузки
    pub(crate) fn append(&mut self, records: Vec<BarcodeRecord>) {
        for record in &records {
            // Повторная загрузка уже зафиксированного штрихкода не блокируется
            if self.store.contains(&record.barcode) {
                tracing::warn!(
                    "Barcode {} is already in the registry, adding another record",
                    record.barcode
                );
            }
        }
        self.store.append(records);
    }

    /// Изменить одно поле записи. Без повторной валидации значения.
    ///
    /// Возвращает число изменённых записей (0, если штрихкода нет).
    pub fn update(
        &mut self,
        barcode: &str,
        field: BarcodeField,
        value: impl Into<String>,
    ) -> usize {
        let value = value.into();
        let changed = self.store.modify_where(
            |r| r.barcode == barcode,
            |r| r.set_field(field, value.clone()),
        );

        if changed == 0 {
            tracing::debug!("update: barcode {} not found, nothing changed", barcode);
        } else {
            tracing::info!("Updated {} of {}", field, barcode);
        }
        changed
    }

    /// Массовая правка отмеченных записей.
    ///
    /// Применяются только непустые поля патча. Отметка снимается
    /// после применения. Возвращает число изменённых записей.
    pub fn bulk_update(
        &mut self,
        selection: &mut SelectionSet,
        patch: &BarcodeRecordPatch,
    ) -> usize {
        let fields: Vec<BarcodeField> = patch.entries().into_iter().map(|(f, _)| f).collect();

        let changed = if fields.is_empty() {
            0
        } else {
            self.store.modify_where(
                |r| selection.contains(&r.barcode),
                |r| {
                    r.apply_patch(patch);
                },
            )
        };

        tracing::info!(
            "Bulk update: {} selected, {} records changed, fields {:?}",
            selection.len(),
            changed,
            fields
        );

        selection.clear();
        changed
    }

    /// Поиск по подстроке штрихкода без учёта регистра
    pub fn search(&self, term: &str) -> Vec<BarcodeRecord> {
        filter_list(self.store.all(), term)
    }

    /// Стабильная сортировка копии записей
    pub fn sort(&self, spec: &SortSpec) -> Vec<BarcodeRecord> {
        let mut items = self.store.all().to_vec();
        sort_list(&mut items, spec.effective_key(), spec.direction.is_ascending());
        items
    }

    /// Поиск + сортировка (то, что показывает таблица)
    pub fn query(&self, term: &str, spec: &SortSpec) -> Vec<BarcodeRecord> {
        let mut items = self.search(term);
        sort_list(&mut items, spec.effective_key(), spec.direction.is_ascending());
        items
    }
}
