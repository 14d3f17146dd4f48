//! Fact extraction: package archive in, [`PackageFacts`] out.

pub mod command;
pub mod error;
pub mod manifest;

use crate::facts::PackageFacts;
use crate::reporter::progress::ExtractProgress;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub use command::CommandExtractor;
pub use error::ExtractionError;
pub use manifest::{DecodedManifest, IntentFilter, ManifestApplication, ManifestComponent};

/// Turns one package into facts.
pub trait FactExtractor {
    fn extract(&self, path: &Path) -> Result<PackageFacts, ExtractionError>;
}

/// Extract every package in parallel.
///
/// Packages that fail are logged and left out; the rest keep the order of
/// `paths`.
pub fn extract_all<E>(extractor: &E, paths: &[PathBuf], progress: &ExtractProgress) -> Vec<PackageFacts>
where
    E: FactExtractor + Sync,
{
    info!(packages = paths.len(), "Extracting package facts");

    let results: Vec<Option<PackageFacts>> = paths
        .par_iter()
        .map(|path| {
            let result = extractor.extract(path);
            progress.record(path, result.is_ok());
            match result {
                Ok(facts) => Some(facts),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping package");
                    None
                }
            }
        })
        .collect();
    progress.finish();

    let facts: Vec<PackageFacts> = results.into_iter().flatten().collect();
    info!(
        extracted = facts.len(),
        skipped = progress.failed(),
        "Extraction complete"
    );
    facts
}
