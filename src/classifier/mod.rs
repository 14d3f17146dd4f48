//! Cross-package permission exposure classifier.
//!
//! Every exported component in the merged fact set is checked against the
//! permission definitions of all scanned packages, so a guard declared by
//! one package and consulted by another resolves correctly. The result is
//! a [`Findings`] report; classification either finishes for the whole set
//! or fails without producing anything.

pub mod component;
pub mod provider;

use crate::error::Result;
use crate::facts::{Component, MergedFactSet};
use crate::findings::{Finding, FindingKind, Findings};
use crate::permission::PermissionIndex;
use tracing::{debug, trace};

pub use component::{classify_guarded, classify_receiver, only_protected_actions};
pub use provider::{ProviderSlots, classify_provider};

pub struct ExposureClassifier<'a> {
    facts: &'a MergedFactSet,
    index: PermissionIndex<'a>,
}

impl<'a> ExposureClassifier<'a> {
    pub fn new(facts: &'a MergedFactSet) -> Self {
        Self {
            facts,
            index: PermissionIndex::new(&facts.defined_permissions),
        }
    }

    /// Classify a single component against the merged universe.
    pub fn classify_component(
        &self,
        component: &Component,
    ) -> Result<Option<(FindingKind, Finding)>> {
        match component {
            Component::Activity(c) | Component::Service(c) => {
                classify_guarded(&c.name, &c.permission, &self.index)
            }
            Component::Provider(p) => classify_provider(p, &self.index),
            Component::Receiver(r) => {
                classify_receiver(r, &self.index, &self.facts.protected_broadcasts)
            }
        }
    }

    /// Classify every component, in fact-set order.
    pub fn classify(&self) -> Result<Findings> {
        debug!(
            components = self.facts.components.len(),
            permissions = self.index.len(),
            protected_broadcasts = self.facts.protected_broadcasts.len(),
            "Classifying exported components"
        );

        let mut findings = Findings::new();
        for component in &self.facts.components {
            if let Some((kind, finding)) = self.classify_component(component)? {
                trace!(component = %finding.name, kind = %kind, "Exposed component");
                findings.push(kind, component.kind(), finding);
            }
        }

        debug!(
            undefined = findings.undefined_permissions.len(),
            unprivileged = findings.unprivileged_permissions.len(),
            "Classification complete"
        );
        Ok(findings)
    }
}

/// Classify a merged fact set.
pub fn classify(facts: &MergedFactSet) -> Result<Findings> {
    ExposureClassifier::new(facts).classify()
}
