//! Data models for records returned by the reporting service.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Marker substring identifying the "Gestión" origin list.
pub const LIST1_MARKER: &str = "Lista 1";
/// Marker substring identifying the "Migración" origin list.
pub const LIST2_MARKER: &str = "Lista 2";

/// One workflow record ("gestión") as returned by the reporting service.
///
/// No field is guaranteed present. Consumers fall back per field instead of
/// failing: a missing title renders as "Sin Título", a missing id as "N/A",
/// and a record without a recognizable `list` marker simply stays out of the
/// category counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque identifier; may be a comma-separated SharePoint composite.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Origin tag, e.g. "Gestiones (Lista 1)".
    #[serde(default)]
    pub list: Option<String>,
    /// Creation timestamp as sent by the service (ISO 8601 when present).
    #[serde(default)]
    pub created: Option<String>,
    /// Free-form status label; categorization compares case-insensitively.
    #[serde(default)]
    pub status: Option<String>,
    /// Raw SharePoint field payload forwarded by the service; not interpreted.
    #[serde(default)]
    pub fields: Value,
}

impl Item {
    pub fn id_str(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    pub fn title_str(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn list_str(&self) -> &str {
        self.list.as_deref().unwrap_or("")
    }

    pub fn status_str(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    /// Date portion of `created`, when it parses.
    ///
    /// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.fff]` (what the service
    /// emits for timestamps without an offset), and bare dates.
    pub fn created_date(&self) -> Option<NaiveDate> {
        let raw = self.created.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.date_naive());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt.date());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    /// Third segment of a comma-separated composite id, falling back to the
    /// full id when the composite shape is absent.
    pub fn short_id(&self) -> &str {
        let id = self.id_str();
        match id.split(',').nth(2) {
            Some(part) if !part.is_empty() => part,
            _ => id,
        }
    }

    /// Sub-label inside the parentheses of `list`, e.g. "Lista 1".
    pub fn list_sublabel(&self) -> Option<&str> {
        let list = self.list.as_deref()?;
        let (_, rest) = list.split_once('(')?;
        let inner = match rest.find(')') {
            Some(end) => &rest[..end],
            None => rest,
        };
        if inner.is_empty() { None } else { Some(inner) }
    }

    pub fn is_lista1(&self) -> bool {
        self.list_str().contains(LIST1_MARKER)
    }

    pub fn is_lista2(&self) -> bool {
        self.list_str().contains(LIST2_MARKER)
    }

    /// Whether the record sits in the "pendiente" status bucket.
    pub fn is_pendiente(&self) -> bool {
        self.status_str().eq_ignore_ascii_case("pendiente")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_with(field: &str, value: &str) -> Item {
        let json = format!("{{\"{field}\": \"{value}\"}}");
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_deserialize_tolerates_missing_fields() {
        let item: Item = serde_json::from_str("{}").unwrap();
        assert_eq!(item.id_str(), "");
        assert_eq!(item.title_str(), "");
        assert_eq!(item.created_date(), None);
    }

    #[test]
    fn test_created_date_formats() {
        let cases = [
            ("2024-03-01T10:30:00+00:00", Some((2024, 3, 1))),
            ("2024-03-01T10:30:00Z", Some((2024, 3, 1))),
            ("2024-03-01T10:30:00", Some((2024, 3, 1))),
            ("2024-03-01T10:30:00.123", Some((2024, 3, 1))),
            ("2024-03-01", Some((2024, 3, 1))),
            ("not-a-date", None),
            ("", None),
        ];
        for (raw, expected) in cases {
            let item = item_with("created", raw);
            let expected = expected.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap());
            assert_eq!(item.created_date(), expected, "created = {raw:?}");
        }
    }

    #[test]
    fn test_short_id_composite() {
        let item = item_with("id", "site-guid,web-guid,42");
        assert_eq!(item.short_id(), "42");
    }

    #[test]
    fn test_short_id_plain() {
        let item = item_with("id", "42");
        assert_eq!(item.short_id(), "42");
        let none: Item = serde_json::from_str("{}").unwrap();
        assert_eq!(none.short_id(), "");
    }

    #[test]
    fn test_list_sublabel() {
        let item = item_with("list", "Gestiones (Lista 1)");
        assert_eq!(item.list_sublabel(), Some("Lista 1"));
        let plain = item_with("list", "Gestiones");
        assert_eq!(plain.list_sublabel(), None);
    }

    #[test]
    fn test_list_markers_are_independent() {
        let both = item_with("list", "X (Lista 1) (Lista 2)");
        assert!(both.is_lista1());
        assert!(both.is_lista2());
        let neither = item_with("list", "Otra");
        assert!(!neither.is_lista1());
        assert!(!neither.is_lista2());
    }

    #[test]
    fn test_status_categorization_is_case_insensitive() {
        assert!(item_with("status", "Pendiente").is_pendiente());
        assert!(item_with("status", "PENDIENTE").is_pendiente());
        assert!(!item_with("status", "Procesado").is_pendiente());
    }
}
