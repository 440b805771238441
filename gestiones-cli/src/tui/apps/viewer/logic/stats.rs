//! Category counts over the full fetched set.

use crate::api::{Item, LIST1_MARKER, LIST2_MARKER};

/// Counts shown in the stat tiles. Computed from the unfiltered fetched set;
/// the local search and date bounds never change them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub list1: usize,
    pub list2: usize,
}

/// The two marker tests are independent; a record may match neither or both.
pub fn compute(items: &[Item]) -> Stats {
    Stats {
        total: items.len(),
        list1: items.iter().filter(|i| i.list_str().contains(LIST1_MARKER)).count(),
        list2: items.iter().filter(|i| i.list_str().contains(LIST2_MARKER)).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_in(list: Option<&str>) -> Item {
        Item {
            id: None,
            title: None,
            list: list.map(str::to_string),
            created: None,
            status: None,
            fields: serde_json::Value::Null,
        }
    }

    #[test]
    fn test_counts_by_marker() {
        let items = vec![
            item_in(Some("A (Lista 1)")),
            item_in(Some("B (Lista 2)")),
            item_in(Some("C (Lista 1)")),
        ];
        let stats = compute(&items);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.list1, 2);
        assert_eq!(stats.list2, 1);
    }

    #[test]
    fn test_unmarked_items_count_toward_total_only() {
        let items = vec![item_in(None), item_in(Some("Otra lista"))];
        let stats = compute(&items);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.list1, 0);
        assert_eq!(stats.list2, 0);
    }

    #[test]
    fn test_markers_are_not_exclusive() {
        let items = vec![item_in(Some("X (Lista 1) (Lista 2)"))];
        let stats = compute(&items);
        assert_eq!(stats.list1, 1);
        assert_eq!(stats.list2, 1);
    }

    #[test]
    fn test_empty_set() {
        assert_eq!(compute(&[]), Stats::default());
    }
}
