//! HTTP client for the reporting service.

use std::time::Duration;

use anyhow::{Context, Result};

use super::models::Item;
use super::query::ItemQuery;
use crate::config::ServiceConfig;

/// Client for the read-only items endpoint of the reporting service.
#[derive(Debug, Clone)]
pub struct ItemsClient {
    http: reqwest::Client,
    base_url: String,
}

impl ItemsClient {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Client with default settings, for contexts where no configuration was
    /// loaded (tests, early startup).
    pub fn with_defaults() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: ServiceConfig::default().base_url,
        }
    }

    fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    /// Fetch the records matching `query`.
    ///
    /// A non-success status is an error like any transport failure; callers
    /// decide how much of the cause to surface to the operator.
    pub async fn fetch_items(&self, query: &ItemQuery) -> Result<Vec<Item>> {
        let url = self.items_url();
        log::debug!("GET {url} params={:?}", query.to_params());

        let response = self
            .http
            .get(&url)
            .query(&query.to_params())
            .send()
            .await
            .with_context(|| format!("Request to {url} failed"))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Service returned {status} for {url}");
        }

        let items: Vec<Item> = response
            .json()
            .await
            .context("Failed to decode items response")?;
        log::info!("Fetched {} items (status={})", items.len(), query.status.as_str());
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let config = ServiceConfig {
            base_url: "http://example.test/api/".to_string(),
            ..ServiceConfig::default()
        };
        let client = ItemsClient::new(&config).unwrap();
        assert_eq!(client.items_url(), "http://example.test/api/items");
    }
}
