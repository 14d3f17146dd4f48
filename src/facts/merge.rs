//! Merging per-package facts into the global fact set.

use super::types::{Component, PackageFacts, PermissionDefinition};
use std::collections::BTreeSet;

/// Every package's facts concatenated in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedFactSet {
    pub components: Vec<Component>,
    pub defined_permissions: Vec<PermissionDefinition>,
    /// Informational only; classification never consults it.
    pub uses_permissions: BTreeSet<String>,
    pub protected_broadcasts: BTreeSet<String>,
}

impl MergedFactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the facts of several packages, keeping their order.
    pub fn from_packages<'a>(packages: impl IntoIterator<Item = &'a PackageFacts>) -> Self {
        let mut merged = Self::new();
        for facts in packages {
            merged.push(facts);
        }
        merged
    }

    /// Append one package's facts.
    pub fn push(&mut self, facts: &PackageFacts) {
        self.components.extend(facts.components.iter().cloned());
        self.defined_permissions
            .extend(facts.defined_permissions.iter().cloned());
        self.uses_permissions
            .extend(facts.uses_permissions.iter().cloned());
        self.protected_broadcasts
            .extend(facts.protected_broadcasts.iter().cloned());
    }
}
