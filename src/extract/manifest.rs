//! Decoded manifest model and its conversion into [`PackageFacts`].
//!
//! The decoder emits one JSON document per package. Only exported
//! components survive the conversion; everything else about the manifest is
//! dropped.

use super::error::ExtractionError;
use crate::facts::{
    Component, GuardedComponent, PackageFacts, PathPermission, PermissionDefinition,
    ProviderComponent, ReceiverComponent,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentFilter {
    pub actions: Vec<String>,
}

/// One `<activity>`, `<service>`, `<provider>` or `<receiver>` element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestComponent {
    pub name: String,
    /// Raw `android:exported`; anything but "true"/"false" counts as unset.
    pub exported: Option<String>,
    pub permission: String,
    #[serde(rename = "readPermission")]
    pub read_permission: String,
    #[serde(rename = "writePermission")]
    pub write_permission: String,
    #[serde(rename = "path_permission")]
    pub path_permissions: Vec<PathPermission>,
    pub intent_filters: Vec<IntentFilter>,
}

impl ManifestComponent {
    /// Explicit `exported` wins; otherwise any intent filter exports.
    pub fn is_exported(&self) -> bool {
        match self.exported.as_deref() {
            Some("true") => true,
            Some("false") => false,
            _ => !self.intent_filters.is_empty(),
        }
    }

    fn full_name(&self, package: &str) -> String {
        format!("{}/{}", package, self.name)
    }

    fn actions(&self) -> Vec<String> {
        self.intent_filters
            .iter()
            .flat_map(|f| f.actions.iter().cloned())
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestApplication {
    pub activities: Vec<ManifestComponent>,
    pub services: Vec<ManifestComponent>,
    pub providers: Vec<ManifestComponent>,
    pub receivers: Vec<ManifestComponent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodedManifest {
    pub package: String,
    pub application: Option<ManifestApplication>,
    pub permissions: Vec<PermissionDefinition>,
    pub uses_permissions: Vec<String>,
    pub protected_broadcasts: Vec<String>,
}

impl DecodedManifest {
    pub fn from_json(json: &str, path: &std::path::Path) -> Result<Self, ExtractionError> {
        serde_json::from_str(json).map_err(|e| ExtractionError::invalid_manifest(path, e))
    }

    /// Keep exported components only, in activity, service, provider,
    /// receiver order.
    pub fn into_facts(self, filename: impl Into<String>) -> Result<PackageFacts, ExtractionError> {
        let Some(application) = self.application else {
            return Err(ExtractionError::MissingApplication {
                package: self.package,
            });
        };
        let package = self.package;

        let exported = |list: Vec<ManifestComponent>| {
            list.into_iter()
                .filter(ManifestComponent::is_exported)
                .collect::<Vec<_>>()
        };

        let mut components = Vec::new();
        for c in exported(application.activities) {
            components.push(Component::Activity(GuardedComponent {
                name: c.full_name(&package),
                permission: c.permission,
            }));
        }
        for c in exported(application.services) {
            components.push(Component::Service(GuardedComponent {
                name: c.full_name(&package),
                permission: c.permission,
            }));
        }
        for c in exported(application.providers) {
            components.push(Component::Provider(ProviderComponent {
                name: c.full_name(&package),
                permission: c.permission,
                read_permission: c.read_permission,
                write_permission: c.write_permission,
                path_permissions: c.path_permissions,
            }));
        }
        for c in exported(application.receivers) {
            components.push(Component::Receiver(ReceiverComponent {
                name: c.full_name(&package),
                actions: c.actions(),
                permission: c.permission,
            }));
        }

        Ok(PackageFacts {
            package,
            filename: filename.into(),
            components,
            defined_permissions: self.permissions,
            uses_permissions: self.uses_permissions,
            protected_broadcasts: self.protected_broadcasts,
        })
    }
}
