//! Extraction error types.

use std::path::PathBuf;
use thiserror::Error;

/// A package that produced no usable facts.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Failed to run manifest decoder {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest decoder failed on {path} ({status}): {stderr}")]
    DecoderFailed {
        path: PathBuf,
        status: String,
        stderr: String,
    },

    #[error("Invalid decoded manifest for {path}")]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot get application tag in {package}")]
    MissingApplication { package: String },
}

impl ExtractionError {
    pub fn invalid_manifest(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::InvalidManifest {
            path: path.into(),
            source,
        }
    }
}
