//! Configuration file loading for model-catalog
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MODEL_CATALOG_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./model-catalog.toml` or `./.model-catalog.toml`
//! 4. Global: `<config dir>/model-catalog/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileBedrockConfig, FileConfig, FileProvidersConfig, Severity,
};
pub use loader::{APP_DIR, ConfigError, ConfigLoader, ENV_PREFIX};
