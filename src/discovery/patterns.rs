//! Name patterns for package discovery.

use crate::error::Result;
use regex::Regex;
use std::path::Path;

/// Generated runtime-resource-overlay packages never carry components worth
/// auditing.
pub const DEFAULT_SKIP_PATTERNS: &[&str] = &["auto_generated_rro_product"];

/// Extension of installable package archives.
pub const PACKAGE_EXTENSION: &str = "apk";

/// Entries whose file name matches any of these patterns are skipped.
#[derive(Debug, Clone)]
pub struct SkipPatterns {
    patterns: Vec<Regex>,
}

impl SkipPatterns {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn none() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Check a path's final component against the patterns.
    pub fn is_skipped(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.patterns.iter().any(|re| re.is_match(name)))
    }
}

impl Default for SkipPatterns {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_SKIP_PATTERNS
                .iter()
                .filter_map(|p| Regex::new(p).ok())
                .collect(),
        }
    }
}

/// Check if a path looks like a package archive.
pub fn is_package_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == PACKAGE_EXTENSION)
}
