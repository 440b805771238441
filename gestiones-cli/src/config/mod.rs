//! Configuration loading: TOML file with environment overrides.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
}

/// Connection settings for the reporting service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the reporting API.
    pub base_url: String,
    /// Per-request timeout in seconds. Worklist queries can scan tens of
    /// thousands of rows server-side, so the default is generous.
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 120,
        }
    }
}

impl Config {
    /// Load from the user config file, then apply environment overrides
    /// (`GESTIONES_BASE_URL`, `GESTIONES_TIMEOUT_SECS`).
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                toml::from_str(&raw)
                    .with_context(|| format!("Invalid config file {}", path.display()))?
            }
            _ => Self::default(),
        };

        if let Ok(url) = std::env::var("GESTIONES_BASE_URL") {
            if !url.is_empty() {
                config.service.base_url = url;
            }
        }
        if let Ok(secs) = std::env::var("GESTIONES_TIMEOUT_SECS") {
            config.service.timeout_secs = secs
                .parse()
                .context("GESTIONES_TIMEOUT_SECS must be an integer")?;
        }

        Ok(config)
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gestiones-cli").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.service.base_url, "http://localhost:8000");
        assert_eq!(config.service.timeout_secs, 120);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("[service]\nbase_url = \"https://reports.test\"\n").unwrap();
        assert_eq!(config.service.base_url, "https://reports.test");
        assert_eq!(config.service.timeout_secs, 120);
    }

    #[test]
    fn test_empty_file_is_valid() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.service.base_url, "http://localhost:8000");
    }
}
