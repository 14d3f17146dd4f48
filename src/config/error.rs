//! Errors raised while reading or checking a config file.

use super::loading::ConfigFormat;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Config {path} is not valid {format}: {message}")]
    Syntax {
        path: String,
        format: ConfigFormat,
        message: String,
    },

    #[error("Config {0} needs a .yaml, .yml, .json or .toml extension")]
    UnknownFormat(String),

    #[error("extractor.program is empty")]
    EmptyProgram,

    #[error("extractor.args never passes the package path ({placeholder})")]
    MissingPlaceholder { placeholder: &'static str },

    #[error("extractor.threads must be at least 1")]
    ZeroThreads,

    #[error("discovery.packages_dir is empty")]
    EmptyPackagesDir,

    #[error("discovery.skip_patterns entry {pattern:?} is not a valid regex")]
    SkipPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
