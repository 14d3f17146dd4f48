//! Working-directory persistence.
//!
//! A working directory holds the packages to scan, the intermediate fact
//! snapshot and the final report, each at a fixed name.

use crate::error::{AuditError, Result};
use crate::facts::PackageFacts;
use crate::findings::Findings;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Every extracted package's facts.
pub const ALL_COMPONENTS_FILE: &str = "all_comp.json";
/// The classification report.
pub const ACCESSIBLE_COMPONENTS_FILE: &str = "accessible_comp.json";

#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Open an existing working directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.exists() {
            return Err(AuditError::FileNotFound(root.display().to_string()));
        }
        if !root.is_dir() {
            return Err(AuditError::NotADirectory(root.display().to_string()));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.root.join(ALL_COMPONENTS_FILE)
    }

    pub fn report_path(&self) -> PathBuf {
        self.root.join(ACCESSIBLE_COMPONENTS_FILE)
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot_path().is_file()
    }

    pub fn load_snapshot(&self) -> Result<Vec<PackageFacts>> {
        load_snapshot(&self.snapshot_path())
    }

    pub fn save_snapshot(&self, packages: &[PackageFacts]) -> Result<()> {
        write_json(&self.snapshot_path(), packages)
    }

    pub fn save_report(&self, findings: &Findings) -> Result<()> {
        save_report(&self.report_path(), findings)
    }
}

/// Load a fact snapshot from any path.
pub fn load_snapshot(path: &Path) -> Result<Vec<PackageFacts>> {
    read_json(path)
}

/// Write a classification report to any path.
pub fn save_report(path: &Path, findings: &Findings) -> Result<()> {
    write_json(path, findings)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(AuditError::FileNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path).map_err(|e| AuditError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| AuditError::ParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    fs::write(path, json).map_err(|e| AuditError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;
    debug!(path = %path.display(), "Wrote JSON document");
    Ok(())
}
