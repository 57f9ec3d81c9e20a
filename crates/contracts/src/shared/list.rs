/// Универсальные утилиты для работы со списками (поиск, сортировка)
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Тип ключа сортировки (перечисление полей)
    type Key: Copy;

    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: Self::Key) -> Ordering;
}

/// Сортирует список по указанному полю.
///
/// `sort_by` стабилен: при равных ключах исходный порядок сохраняется
/// в обоих направлениях.
pub fn sort_list<T: Sortable>(items: &mut [T], field: T::Key, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Фильтрует список по поисковому запросу (пустой запрос — без фильтра).
///
/// Запрос передаётся как есть: пробелы считаются частью подстроки.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        rank: u8,
    }

    impl Searchable for Item {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    impl Sortable for Item {
        type Key = ();

        fn compare_by_field(&self, other: &Self, _field: ()) -> Ordering {
            self.rank.cmp(&other.rank)
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "b", rank: 2 },
            Item { name: "a1", rank: 1 },
            Item { name: "c", rank: 2 },
            Item { name: "A2", rank: 1 },
        ]
    }

    #[test]
    fn test_sort_is_stable_both_directions() {
        let mut list = items();
        sort_list(&mut list, (), true);
        let names: Vec<_> = list.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["a1", "A2", "b", "c"]);

        let mut list = items();
        sort_list(&mut list, (), false);
        let names: Vec<_> = list.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["b", "c", "a1", "A2"]);
    }

    #[test]
    fn test_filter() {
        assert_eq!(filter_list(&items(), "").len(), 4);
        let found = filter_list(&items(), "a");
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_filter_keeps_whitespace() {
        assert!(filter_list(&items(), " a").is_empty());
        assert!(filter_list(&items(), "  ").is_empty());
    }
}
