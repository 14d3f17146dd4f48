//! Exported component counts per package.

use crate::facts::{ComponentKind, PackageFacts};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportCensus {
    pub package: String,
    pub activities: usize,
    pub services: usize,
    pub providers: usize,
    pub receivers: usize,
}

impl ExportCensus {
    pub fn from_facts(facts: &PackageFacts) -> Self {
        let mut census = Self {
            package: facts.package.clone(),
            ..Default::default()
        };
        for component in &facts.components {
            match component.kind() {
                ComponentKind::Activity => census.activities += 1,
                ComponentKind::Service => census.services += 1,
                ComponentKind::Provider => census.providers += 1,
                ComponentKind::Receiver => census.receivers += 1,
            }
        }
        census
    }

    pub fn total(&self) -> usize {
        self.activities + self.services + self.providers + self.receivers
    }
}

impl std::fmt::Display for ExportCensus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] Activity = {}, Service = {}, ContentProvider = {}, BroadcastReceiver = {}",
            self.package, self.activities, self.services, self.providers, self.receivers
        )
    }
}
