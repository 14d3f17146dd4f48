//! Config file parsing and lookup.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::error::ConfigError;
use super::types::Config;

/// Project-level config file names, in lookup order.
pub const PROJECT_CONFIG_FILES: &[&str] = &[
    ".exposure-audit.yaml",
    ".exposure-audit.yml",
    ".exposure-audit.json",
    ".exposure-audit.toml",
];

/// Per-user config, under the platform config directory.
pub const GLOBAL_CONFIG_FILE: &str = "exposure-audit/config.yaml";

/// Serialization a config file is written in, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    fn parse(self, content: &str) -> Result<Config, String> {
        match self {
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
            Self::Toml => "TOML",
        })
    }
}

impl Config {
    /// Parse and validate one config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnknownFormat(path.display().to_string()))?;
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config = format
            .parse(&content)
            .map_err(|message| ConfigError::Syntax {
                path: path.display().to_string(),
                format,
                message,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// First usable config for a working directory.
    ///
    /// Candidates are the project files in `work_dir`, then the global file.
    /// A candidate that fails to load is logged and skipped; with none left
    /// the defaults apply.
    pub fn load(work_dir: Option<&Path>) -> Self {
        let project = work_dir.into_iter().flat_map(|root| {
            PROJECT_CONFIG_FILES
                .iter()
                .map(move |name| root.join(name))
        });
        let global: Option<PathBuf> = dirs::config_dir().map(|dir| dir.join(GLOBAL_CONFIG_FILE));

        for path in project.chain(global) {
            if !path.is_file() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded config");
                    return config;
                }
                Err(e) => warn!(path = %path.display(), error = %e, "Ignoring config"),
            }
        }

        debug!("Using default config");
        Self::default()
    }
}
