//! Local visibility predicate: text search and date-range match.

use crate::api::Item;

/// Whether `item` is visible under the current search term and date bounds.
///
/// Text match is a case-insensitive substring test against title OR id, with
/// absent fields treated as empty; an empty term matches everything. The
/// date range applies only when `created` yields a date: an absent or
/// unparseable timestamp fails open, leaving the text match alone to decide.
/// Bounds compare lexically on the `YYYY-MM-DD` portion, the same shape the
/// date inputs hold.
pub fn matches(item: &Item, search_term: &str, from_date: &str, to_date: &str) -> bool {
    let search = search_term.to_lowercase();
    let matches_search = item.title_str().to_lowercase().contains(&search)
        || item.id_str().to_lowercase().contains(&search);

    let Some(date) = item.created_date() else {
        return matches_search;
    };

    let date = date.format("%Y-%m-%d").to_string();
    let matches_from = from_date.is_empty() || date.as_str() >= from_date;
    let matches_to = to_date.is_empty() || date.as_str() <= to_date;
    matches_search && matches_from && matches_to
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, title: &str, created: Option<&str>) -> Item {
        Item {
            id: Some(id.to_string()),
            title: Some(title.to_string()),
            list: None,
            created: created.map(str::to_string),
            status: None,
            fields: serde_json::Value::Null,
        }
    }

    #[test]
    fn test_empty_search_matches_everything() {
        assert!(matches(&item("1", "Alta", None), "", "", ""));
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_id() {
        let it = item("ABC-42", "Revisión anual", None);
        assert!(matches(&it, "revisión", "", ""));
        assert!(matches(&it, "abc", "", ""));
        assert!(!matches(&it, "baja", "", ""));
    }

    #[test]
    fn test_search_tolerates_absent_fields() {
        let it = Item {
            id: None,
            title: None,
            list: None,
            created: None,
            status: None,
            fields: serde_json::Value::Null,
        };
        assert!(matches(&it, "", "", ""));
        assert!(!matches(&it, "algo", "", ""));
    }

    #[test]
    fn test_missing_created_ignores_date_bounds() {
        let it = item("1", "Alta", None);
        assert!(matches(&it, "", "2024-01-01", "2024-12-31"));
        // Only text search can exclude it.
        assert!(!matches(&it, "baja", "2024-01-01", "2024-12-31"));
    }

    #[test]
    fn test_unparseable_created_fails_open() {
        let it = item("1", "Alta", Some("not-a-date"));
        assert!(matches(&it, "", "2024-01-01", "2024-01-31"));
        assert!(!matches(&it, "baja", "2024-01-01", "2024-01-31"));
    }

    #[test]
    fn test_date_range_bounds_are_inclusive() {
        let it = item("1", "Alta", Some("2024-03-15T08:00:00"));
        assert!(matches(&it, "", "2024-03-15", "2024-03-15"));
        assert!(matches(&it, "", "2024-03-01", ""));
        assert!(matches(&it, "", "", "2024-03-31"));
        assert!(!matches(&it, "", "2024-03-16", ""));
        assert!(!matches(&it, "", "", "2024-03-14"));
    }

    #[test]
    fn test_time_of_day_is_not_compared() {
        // 23:59 on the upper-bound day still matches.
        let it = item("1", "Alta", Some("2024-03-15T23:59:59"));
        assert!(matches(&it, "", "", "2024-03-15"));
    }

    #[test]
    fn test_conjunction_of_search_and_dates() {
        let it = item("1", "Alta", Some("2024-03-15"));
        assert!(matches(&it, "alta", "2024-03-01", "2024-03-31"));
        assert!(!matches(&it, "alta", "2024-04-01", ""));
    }
}
