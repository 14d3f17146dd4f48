//! Configuration type definitions.

use super::error::ConfigError;
use crate::discovery::DEFAULT_SKIP_PATTERNS;
use crate::extract::command::APK_PLACEHOLDER;
use serde::{Deserialize, Serialize};

/// Main configuration structure for exposure-audit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Manifest decoder settings.
    pub extractor: ExtractorConfig,
    /// Package discovery settings.
    pub discovery: DiscoveryConfig,
}

/// How package facts are extracted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Decoder program. It must print a decoded manifest as JSON on stdout.
    pub program: String,
    /// Arguments; `{apk}` is replaced by the package path.
    pub args: Vec<String>,
    /// Worker threads for extraction. None uses one per CPU.
    pub threads: Option<usize>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            program: "apk-manifest-json".to_string(),
            args: vec![APK_PLACEHOLDER.to_string()],
            threads: None,
        }
    }
}

/// Where packages are found and which ones to leave out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Packages directory, relative to the working directory.
    pub packages_dir: String,
    /// Regexes matched against file and directory names.
    pub skip_patterns: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            packages_dir: "packages".to_string(),
            skip_patterns: DEFAULT_SKIP_PATTERNS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Reject settings that would make every extraction or discovery fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.extractor.validate()?;
        self.discovery.validate()
    }
}

impl ExtractorConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.program.trim().is_empty() {
            return Err(ConfigError::EmptyProgram);
        }
        if !self.args.iter().any(|arg| arg == APK_PLACEHOLDER) {
            return Err(ConfigError::MissingPlaceholder {
                placeholder: APK_PLACEHOLDER,
            });
        }
        if self.threads == Some(0) {
            return Err(ConfigError::ZeroThreads);
        }
        Ok(())
    }
}

impl DiscoveryConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.packages_dir.trim().is_empty() {
            return Err(ConfigError::EmptyPackagesDir);
        }
        for pattern in &self.skip_patterns {
            regex::Regex::new(pattern).map_err(|source| ConfigError::SkipPattern {
                pattern: pattern.clone(),
                source,
            })?;
        }
        Ok(())
    }
}
