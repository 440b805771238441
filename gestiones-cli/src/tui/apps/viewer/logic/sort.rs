//! Comparator for the sortable columns.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::api::Item;

/// Sortable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    List,
    Created,
    Status,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Identificador",
            Self::List => "Origen",
            Self::Created => "Fecha",
            Self::Status => "Estatus",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Active sort column and direction. Exactly one column sorts at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::Created,
            direction: SortDirection::Desc,
        }
    }
}

impl SortConfig {
    /// Column-header toggle: a new column starts ascending; toggling the
    /// active ascending column flips it to descending.
    pub fn toggle(self, key: SortKey) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self { key, direction }
    }
}

/// Compare two items under `config`. Ties are `Equal`, so a stable sort
/// preserves relative order; `Desc` reverses the comparison outcome rather
/// than the final sequence, keeping ties stable in both directions.
pub fn compare(a: &Item, b: &Item, config: SortConfig) -> Ordering {
    let ordering = match config.key {
        SortKey::Created => date_key(a).cmp(&date_key(b)),
        SortKey::Title => a.title_str().cmp(b.title_str()),
        SortKey::List => a.list_str().cmp(b.list_str()),
        SortKey::Status => a.status_str().cmp(b.status_str()),
    };
    match config.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Stable sort of the filtered view.
pub fn sort_items(items: &mut [&Item], config: SortConfig) {
    items.sort_by(|a, b| compare(a, b, config));
}

/// Missing or unparseable dates sort as the epoch (1970-01-01).
fn date_key(item: &Item) -> NaiveDate {
    item.created_date().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, title: &str, created: &str, status: &str) -> Item {
        Item {
            id: Some(id.to_string()),
            title: Some(title.to_string()),
            list: None,
            created: if created.is_empty() {
                None
            } else {
                Some(created.to_string())
            },
            status: Some(status.to_string()),
            fields: serde_json::Value::Null,
        }
    }

    #[test]
    fn test_created_desc_puts_dated_before_empty() {
        let dated = item("1", "a", "2024-03-01", "");
        let empty = item("2", "b", "", "");
        let config = SortConfig {
            key: SortKey::Created,
            direction: SortDirection::Desc,
        };
        assert_eq!(compare(&dated, &empty, config), Ordering::Less);
    }

    #[test]
    fn test_unparseable_created_sorts_as_epoch() {
        let bad = item("1", "a", "not-a-date", "");
        let empty = item("2", "b", "", "");
        let config = SortConfig {
            key: SortKey::Created,
            direction: SortDirection::Asc,
        };
        assert_eq!(compare(&bad, &empty, config), Ordering::Equal);
    }

    #[test]
    fn test_string_keys_sort_lexically_with_empty_first() {
        let blank = Item {
            id: None,
            title: None,
            list: None,
            created: None,
            status: None,
            fields: serde_json::Value::Null,
        };
        let titled = item("1", "Alta", "", "");
        let config = SortConfig {
            key: SortKey::Title,
            direction: SortDirection::Asc,
        };
        assert_eq!(compare(&blank, &titled, config), Ordering::Less);
    }

    #[test]
    fn test_ties_stay_in_place_under_both_directions() {
        let first = item("1", "Mismo", "", "");
        let second = item("2", "Mismo", "", "");
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let config = SortConfig {
                key: SortKey::Title,
                direction,
            };
            let mut view = vec![&first, &second];
            sort_items(&mut view, config);
            assert_eq!(view[0].id_str(), "1", "{direction:?}");
            assert_eq!(view[1].id_str(), "2", "{direction:?}");
        }
    }

    #[test]
    fn test_desc_reverses_comparison() {
        let early = item("1", "a", "2024-01-01", "");
        let late = item("2", "b", "2024-06-01", "");
        let mut view = vec![&early, &late];
        sort_items(
            &mut view,
            SortConfig {
                key: SortKey::Created,
                direction: SortDirection::Desc,
            },
        );
        assert_eq!(view[0].id_str(), "2");
    }

    #[test]
    fn test_toggle_cycles_asc_then_desc() {
        let config = SortConfig::default();
        let by_title = config.toggle(SortKey::Title);
        assert_eq!(by_title.key, SortKey::Title);
        assert_eq!(by_title.direction, SortDirection::Asc);
        let flipped = by_title.toggle(SortKey::Title);
        assert_eq!(flipped.direction, SortDirection::Desc);
        let again = flipped.toggle(SortKey::Title);
        assert_eq!(again.direction, SortDirection::Asc);
    }

    #[test]
    fn test_default_is_created_desc() {
        let config = SortConfig::default();
        assert_eq!(config.key, SortKey::Created);
        assert_eq!(config.direction, SortDirection::Desc);
    }
}
