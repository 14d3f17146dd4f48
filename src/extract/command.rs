//! Fact extraction through an external manifest decoder.

use super::FactExtractor;
use super::error::ExtractionError;
use super::manifest::DecodedManifest;
use crate::config::ExtractorConfig;
use crate::facts::PackageFacts;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Argument placeholder replaced by the package path.
pub const APK_PLACEHOLDER: &str = "{apk}";

/// Runs a decoder program that prints a [`DecodedManifest`] on stdout.
#[derive(Debug, Clone)]
pub struct CommandExtractor {
    program: String,
    args: Vec<String>,
}

impl CommandExtractor {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone())
    }

    /// Arguments with every `{apk}` replaced by `path`.
    pub fn args_for(&self, path: &Path) -> Vec<String> {
        let apk = path.display().to_string();
        self.args
            .iter()
            .map(|arg| {
                if arg == APK_PLACEHOLDER {
                    apk.clone()
                } else {
                    arg.clone()
                }
            })
            .collect()
    }
}

impl FactExtractor for CommandExtractor {
    fn extract(&self, path: &Path) -> Result<PackageFacts, ExtractionError> {
        let args = self.args_for(path);
        debug!(program = %self.program, ?args, "Running manifest decoder");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| ExtractionError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ExtractionError::DecoderFailed {
                path: path.to_path_buf(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        DecodedManifest::from_json(&stdout, path)?.into_facts(path.display().to_string())
    }
}
