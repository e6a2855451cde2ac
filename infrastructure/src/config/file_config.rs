//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain/application
//! types at the edges.

use millet_application::RedirectParams;
use millet_domain::{FALLBACK_PRODUCT_URL, ProductCatalog};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::http::DEFAULT_USER_AGENT;

/// Default backend origin (the FastAPI dev server)
pub const DEFAULT_ORIGIN: &str = "http://localhost:8000";

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("api.origin cannot be empty")]
    EmptyOrigin,

    #[error("api.origin must start with http:// or https:// (got {0})")]
    InvalidOrigin(String),

    #[error("products.fallback_url cannot be empty")]
    EmptyFallbackUrl,
}

/// Raw backend configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Scheme + host (+ port) of the recommendation backend
    pub origin: String,
    /// User-Agent header
    pub user_agent: String,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Raw redirect configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRedirectConfig {
    /// Delay before the product page is opened
    pub open_delay_ms: u64,
    /// Delay after opening before the control is restored
    pub restore_delay_ms: u64,
    /// Open pages in the system browser (otherwise only print the URL)
    pub open_browser: bool,
}

impl Default for FileRedirectConfig {
    fn default() -> Self {
        let params = RedirectParams::default();
        Self {
            open_delay_ms: params.open_delay.as_millis() as u64,
            restore_delay_ms: params.restore_delay.as_millis() as u64,
            open_browser: true,
        }
    }
}

impl FileRedirectConfig {
    pub fn to_params(&self) -> RedirectParams {
        RedirectParams::default()
            .with_open_delay(Duration::from_millis(self.open_delay_ms))
            .with_restore_delay(Duration::from_millis(self.restore_delay_ms))
    }
}

/// Raw product table configuration from TOML
///
/// `urls` entries are merged over the built-in table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProductsConfig {
    pub fallback_url: String,
    pub urls: BTreeMap<String, String>,
}

impl Default for FileProductsConfig {
    fn default() -> Self {
        Self {
            fallback_url: FALLBACK_PRODUCT_URL.to_string(),
            urls: BTreeMap::new(),
        }
    }
}

impl FileProductsConfig {
    pub fn to_catalog(&self) -> ProductCatalog {
        ProductCatalog::default()
            .with_overrides(self.urls.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .with_fallback_url(self.fallback_url.clone())
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL interaction log path (disabled when unset)
    pub interaction_log: Option<PathBuf>,
}

/// Complete configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub api: FileApiConfig,
    pub redirect: FileRedirectConfig,
    pub products: FileProductsConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate values that cannot be expressed in the types
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let origin = self.api.origin.trim();
        if origin.is_empty() {
            return Err(ConfigValidationError::EmptyOrigin);
        }
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(ConfigValidationError::InvalidOrigin(origin.to_string()));
        }
        if self.products.fallback_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyFallbackUrl);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.origin, DEFAULT_ORIGIN);
        assert!(config.redirect.open_browser);
        assert!(config.logging.interaction_log.is_none());
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
[api]
origin = "https://advisor.example.com"

[redirect]
open_delay_ms = 0

[products.urls]
teff = "https://example.com/teff"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.origin, "https://advisor.example.com");
        assert_eq!(config.api.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.redirect.open_delay_ms, 0);
        assert_eq!(config.redirect.restore_delay_ms, 1000);

        let catalog = config.products.to_catalog();
        assert_eq!(catalog.resolve("Teff").url, "https://example.com/teff");
        assert_eq!(catalog.fallback_url(), FALLBACK_PRODUCT_URL);
    }

    #[test]
    fn test_redirect_params_conversion() {
        let config = FileRedirectConfig {
            open_delay_ms: 20,
            restore_delay_ms: 30,
            open_browser: false,
        };
        let params = config.to_params();
        assert_eq!(params.open_delay, Duration::from_millis(20));
        assert_eq!(params.restore_delay, Duration::from_millis(30));
    }

    #[test]
    fn test_validate_rejects_bad_origin() {
        let mut config = FileConfig::default();
        config.api.origin = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyOrigin));

        config.api.origin = "localhost:8000".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidOrigin(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_fallback() {
        let mut config = FileConfig::default();
        config.products.fallback_url = String::new();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyFallbackUrl));
    }
}
