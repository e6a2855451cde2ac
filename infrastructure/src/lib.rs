//! Infrastructure layer for millet-advisor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod browser;
pub mod config;
pub mod http;
pub mod logging;
pub mod theme;

// Re-export commonly used types
pub use browser::{ConsoleNavigator, SystemBrowserNavigator};
pub use config::{
    ConfigLoader, ConfigValidationError, FileApiConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileProductsConfig, FileRedirectConfig,
};
pub use http::{DEFAULT_USER_AGENT, HttpRecommendationGateway};
pub use logging::JsonlInteractionLogger;
pub use theme::JsonThemeStore;
