//! Audit orchestration.
//!
//! This module ties the stages together:
//! - Config lookup and package discovery
//! - Fact extraction or snapshot reuse
//! - Merging and classification
//! - Output formatting

mod collect;
mod formatter;

pub use collect::{
    CollectOptions, collect_facts, collect_facts_with, discover_packages, load_config,
};
pub use formatter::format_findings;

use crate::classifier::classify;
use crate::error::Result;
use crate::facts::{MergedFactSet, PackageFacts};
use crate::findings::Findings;
use tracing::info;

/// Merge every package and classify the exported components.
pub fn audit(packages: &[PackageFacts]) -> Result<Findings> {
    let facts = MergedFactSet::from_packages(packages);
    info!(
        packages = packages.len(),
        components = facts.components.len(),
        permissions = facts.defined_permissions.len(),
        "Classifying merged facts"
    );
    classify(&facts)
}
