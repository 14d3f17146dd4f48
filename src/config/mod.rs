//! Configuration layer for exposure-audit.
//!
//! `types` holds the settings and their validation, `loading` the file
//! formats and lookup order.

mod error;
mod loading;
mod types;

pub use error::ConfigError;
pub use loading::{ConfigFormat, GLOBAL_CONFIG_FILE, PROJECT_CONFIG_FILES};
pub use types::{Config, DiscoveryConfig, ExtractorConfig};
