//! The exposure report: findings bucketed by finding kind and component kind.

use crate::facts::{ComponentKind, PathPermission, ProviderComponent};
use serde::{Deserialize, Serialize};

/// Why a component is reachable by an unprivileged caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    /// The guard names a permission no scanned package defines.
    Undefined,
    /// The guard is absent or grantable without privileges.
    Unprivileged,
}

impl FindingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingKind::Undefined => "undefined",
            FindingKind::Unprivileged => "unprivileged",
        }
    }
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Provider slots and overrides, reported verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDetail {
    #[serde(rename = "writePermission")]
    pub write_permission: String,
    #[serde(rename = "readPermission")]
    pub read_permission: String,
    #[serde(rename = "path_permission")]
    pub path_permissions: Vec<PathPermission>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub name: String,
    pub permission: String,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderDetail>,
}

impl Finding {
    pub fn new(name: impl Into<String>, permission: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            permission: permission.into(),
            provider: None,
        }
    }

    pub fn for_provider(provider: &ProviderComponent) -> Self {
        Self {
            name: provider.name.clone(),
            permission: provider.permission.clone(),
            provider: Some(ProviderDetail {
                write_permission: provider.write_permission.clone(),
                read_permission: provider.read_permission.clone(),
                path_permissions: provider.path_permissions.clone(),
            }),
        }
    }
}

/// Findings of one kind, split by component kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindBuckets {
    pub activity: Vec<Finding>,
    pub service: Vec<Finding>,
    pub provider: Vec<Finding>,
    pub receiver: Vec<Finding>,
}

impl KindBuckets {
    pub fn get(&self, kind: ComponentKind) -> &[Finding] {
        match kind {
            ComponentKind::Activity => &self.activity,
            ComponentKind::Service => &self.service,
            ComponentKind::Provider => &self.provider,
            ComponentKind::Receiver => &self.receiver,
        }
    }

    fn get_mut(&mut self, kind: ComponentKind) -> &mut Vec<Finding> {
        match kind {
            ComponentKind::Activity => &mut self.activity,
            ComponentKind::Service => &mut self.service,
            ComponentKind::Provider => &mut self.provider,
            ComponentKind::Receiver => &mut self.receiver,
        }
    }

    pub fn len(&self) -> usize {
        ComponentKind::ALL.iter().map(|k| self.get(*k).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All findings with their component kind, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentKind, &Finding)> {
        ComponentKind::ALL
            .into_iter()
            .flat_map(move |kind| self.get(kind).iter().map(move |f| (kind, f)))
    }
}

/// The complete exposure report, serialized as `accessible_comp.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Findings {
    pub undefined_permissions: KindBuckets,
    pub unprivileged_permissions: KindBuckets,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: FindingKind, component: ComponentKind, finding: Finding) {
        self.bucket_mut(kind).get_mut(component).push(finding);
    }

    pub fn bucket(&self, kind: FindingKind) -> &KindBuckets {
        match kind {
            FindingKind::Undefined => &self.undefined_permissions,
            FindingKind::Unprivileged => &self.unprivileged_permissions,
        }
    }

    fn bucket_mut(&mut self, kind: FindingKind) -> &mut KindBuckets {
        match kind {
            FindingKind::Undefined => &mut self.undefined_permissions,
            FindingKind::Unprivileged => &mut self.unprivileged_permissions,
        }
    }

    pub fn total(&self) -> usize {
        self.undefined_permissions.len() + self.unprivileged_permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn summary(&self) -> Summary {
        Summary::from_findings(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub undefined: usize,
    pub unprivileged: usize,
    pub activity: usize,
    pub service: usize,
    pub provider: usize,
    pub receiver: usize,
    pub passed: bool,
}

impl Summary {
    pub fn from_findings(findings: &Findings) -> Self {
        let per_kind = |kind: ComponentKind| {
            findings.undefined_permissions.get(kind).len()
                + findings.unprivileged_permissions.get(kind).len()
        };

        Self {
            undefined: findings.undefined_permissions.len(),
            unprivileged: findings.unprivileged_permissions.len(),
            activity: per_kind(ComponentKind::Activity),
            service: per_kind(ComponentKind::Service),
            provider: per_kind(ComponentKind::Provider),
            receiver: per_kind(ComponentKind::Receiver),
            passed: findings.is_empty(),
        }
    }
}
