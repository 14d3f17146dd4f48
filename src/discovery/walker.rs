//! Package directory walking.

use super::patterns::{SkipPatterns, is_package_file};
use crate::error::{AuditError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Packages sit either directly in the packages directory or one level
/// below it (`<packages>/<Name>/<Name>.apk`).
const MAX_PACKAGE_DEPTH: usize = 2;

/// Finds package archives under a packages directory.
#[derive(Debug, Clone, Default)]
pub struct PackageWalker {
    skip: SkipPatterns,
}

impl PackageWalker {
    pub fn new(skip: SkipPatterns) -> Self {
        Self { skip }
    }

    /// Collect package paths in file-name order. Symlinked packages and
    /// package directories are followed.
    pub fn discover(&self, packages_dir: &Path) -> Result<Vec<PathBuf>> {
        if !packages_dir.exists() {
            return Err(AuditError::FileNotFound(packages_dir.display().to_string()));
        }
        if !packages_dir.is_dir() {
            return Err(AuditError::NotADirectory(
                packages_dir.display().to_string(),
            ));
        }

        let packages: Vec<PathBuf> = WalkDir::new(packages_dir)
            .min_depth(1)
            .max_depth(MAX_PACKAGE_DEPTH)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                let skipped = self.skip.is_skipped(e.path());
                if skipped {
                    debug!(path = %e.path().display(), "Skipping generated overlay");
                }
                !skipped
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| is_package_file(e.path()))
            .map(|e| e.into_path())
            .collect();

        info!(
            dir = %packages_dir.display(),
            packages = packages.len(),
            "Discovered packages"
        );
        Ok(packages)
    }
}
