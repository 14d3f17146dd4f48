use serde::{Deserialize, Serialize};

/// The four kinds of exported application component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Activity,
    Service,
    Provider,
    Receiver,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Activity,
        ComponentKind::Service,
        ComponentKind::Provider,
        ComponentKind::Receiver,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Activity => "activity",
            ComponentKind::Service => "service",
            ComponentKind::Provider => "provider",
            ComponentKind::Receiver => "receiver",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A `<permission>` declaration as found in some package's manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionDefinition {
    pub name: String,
    /// Raw `android:protectionLevel` value, possibly empty.
    #[serde(rename = "protectionLevel", default)]
    pub protection_level: String,
}

impl PermissionDefinition {
    pub fn new(name: impl Into<String>, protection_level: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            protection_level: protection_level.into(),
        }
    }
}

/// Activity or service: a component guarded by a single permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardedComponent {
    pub name: String,
    #[serde(default)]
    pub permission: String,
}

/// Exported broadcast receiver with the actions of all its intent filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverComponent {
    pub name: String,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub permission: String,
}

/// Exported content provider. Read and write access are guarded separately,
/// and `<path-permission>` children override the guards for matching paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderComponent {
    pub name: String,
    #[serde(default)]
    pub permission: String,
    #[serde(rename = "readPermission", default)]
    pub read_permission: String,
    #[serde(rename = "writePermission", default)]
    pub write_permission: String,
    #[serde(rename = "path_permission", default)]
    pub path_permissions: Vec<PathPermission>,
}

/// A provider `<path-permission>` override. The path matcher is carried
/// through to reports untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PathPermission {
    pub path: String,
    pub path_prefix: String,
    pub path_pattern: String,
    pub permission: String,
    pub read_permission: String,
    pub write_permission: String,
}

/// An exported component, tagged by kind on the wire as `"type"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Component {
    Activity(GuardedComponent),
    Service(GuardedComponent),
    Provider(ProviderComponent),
    Receiver(ReceiverComponent),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Activity(_) => ComponentKind::Activity,
            Component::Service(_) => ComponentKind::Service,
            Component::Provider(_) => ComponentKind::Provider,
            Component::Receiver(_) => ComponentKind::Receiver,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Component::Activity(c) | Component::Service(c) => &c.name,
            Component::Provider(p) => &p.name,
            Component::Receiver(r) => &r.name,
        }
    }

    pub fn permission(&self) -> &str {
        match self {
            Component::Activity(c) | Component::Service(c) => &c.permission,
            Component::Provider(p) => &p.permission,
            Component::Receiver(r) => &r.permission,
        }
    }
}

/// Facts extracted from a single package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageFacts {
    pub package: String,
    pub filename: String,
    #[serde(alias = "componments", default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub defined_permissions: Vec<PermissionDefinition>,
    #[serde(default)]
    pub uses_permissions: Vec<String>,
    #[serde(default)]
    pub protected_broadcasts: Vec<String>,
}
