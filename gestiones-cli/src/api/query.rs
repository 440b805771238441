//! Request descriptors for the /items endpoint.
//!
//! Follows the reusable-descriptor pattern: an [`ItemQuery`] is built once
//! from filter state via fluent setters and handed to the client, which
//! serializes it with [`ItemQuery::to_params`]. No validation happens here —
//! malformed dates are forwarded to the service as-is.

use std::str::FromStr;

/// Server-side status bucket; drives the remote query, not local filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Pendiente,
    Procesados,
}

impl StatusFilter {
    /// Wire value expected by the service.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pendiente => "pendiente",
            Self::Procesados => "procesados",
        }
    }

    /// Operator-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pendiente => "Pendientes",
            Self::Procesados => "Procesados",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Pendiente => Self::Procesados,
            Self::Procesados => Self::Pendiente,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pendiente" | "pendientes" => Ok(Self::Pendiente),
            "procesado" | "procesados" => Ok(Self::Procesados),
            other => Err(format!("unknown status filter '{other}'")),
        }
    }
}

/// Reusable query descriptor for the items endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemQuery {
    pub status: StatusFilter,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub force_refresh: bool,
}

impl ItemQuery {
    pub fn new(status: StatusFilter) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Lower date bound; an empty string means unbounded.
    pub fn from_date(mut self, date: impl Into<String>) -> Self {
        let date = date.into();
        self.from_date = if date.is_empty() { None } else { Some(date) };
        self
    }

    /// Upper date bound; an empty string means unbounded.
    pub fn to_date(mut self, date: impl Into<String>) -> Self {
        let date = date.into();
        self.to_date = if date.is_empty() { None } else { Some(date) };
        self
    }

    /// Ask the service to bypass its cache.
    pub fn force_refresh(mut self, force: bool) -> Self {
        self.force_refresh = force;
        self
    }

    /// Wire pairs for reqwest's query serializer. Date bounds appear only
    /// when set; `force_refresh` only when requested.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("status", self.status.as_str().to_string())];
        if let Some(from) = &self.from_date {
            params.push(("from_date", from.clone()));
        }
        if let Some(to) = &self.to_date {
            params.push(("to_date", to.clone()));
        }
        if self.force_refresh {
            params.push(("force_refresh", "true".to_string()));
        }
        params
    }
}
