//! Name lookup over the merged permission universe.

use crate::facts::PermissionDefinition;
use rustc_hash::FxHashMap;

/// "First definition with this name, or none."
pub trait PermissionLookup {
    fn lookup(&self, name: &str) -> Option<&PermissionDefinition>;
}

impl PermissionLookup for [PermissionDefinition] {
    fn lookup(&self, name: &str) -> Option<&PermissionDefinition> {
        self.iter().find(|def| def.name == name)
    }
}

impl PermissionLookup for Vec<PermissionDefinition> {
    fn lookup(&self, name: &str) -> Option<&PermissionDefinition> {
        self.as_slice().lookup(name)
    }
}

/// Hash index over borrowed definitions. The first registration of a name wins.
#[derive(Debug, Default)]
pub struct PermissionIndex<'a> {
    by_name: FxHashMap<&'a str, &'a PermissionDefinition>,
}

impl<'a> PermissionIndex<'a> {
    pub fn new(definitions: &'a [PermissionDefinition]) -> Self {
        let mut by_name = FxHashMap::default();
        by_name.reserve(definitions.len());
        for def in definitions {
            by_name.entry(def.name.as_str()).or_insert(def);
        }
        Self { by_name }
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl PermissionLookup for PermissionIndex<'_> {
    fn lookup(&self, name: &str) -> Option<&PermissionDefinition> {
        self.by_name.get(name).copied()
    }
}
