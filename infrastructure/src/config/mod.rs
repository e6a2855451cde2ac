//! Configuration file loading for millet-advisor
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MILLET_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./millet.toml` or `./.millet.toml`
//! 4. Global: `<config dir>/millet-advisor/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_ORIGIN, FileApiConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileProductsConfig, FileRedirectConfig,
};
pub use loader::ConfigLoader;
