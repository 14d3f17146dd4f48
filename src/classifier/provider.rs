//! Content provider exposure rules.
//!
//! A provider is guarded by a base `permission` plus independent read and
//! write permissions, and each `<path-permission>` child re-resolves all
//! three. Override results replace the previous value for the same slot, so
//! the last override in manifest order decides.

use crate::error::Result;
use crate::facts::{PathPermission, ProviderComponent};
use crate::findings::{Finding, FindingKind};
use crate::permission::{PermissionLookup, SlotResolution};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderSlots {
    pub permission: SlotResolution,
    pub read: SlotResolution,
    pub write: SlotResolution,
}

impl ProviderSlots {
    /// Resolve the base slots, then apply every path override in order.
    pub fn resolve<L>(provider: &ProviderComponent, lookup: &L) -> Result<Self>
    where
        L: PermissionLookup + ?Sized,
    {
        let write = SlotResolution::resolve_fresh(&provider.write_permission, lookup)?;
        let read = SlotResolution::resolve_fresh(&provider.read_permission, lookup)?;
        let permission = SlotResolution::resolve_fresh(&provider.permission, lookup)?;

        let mut slots = Self {
            permission,
            read,
            write,
        };
        for path in &provider.path_permissions {
            slots.apply_override(path, lookup)?;
        }

        trace!(provider = %provider.name, slots = ?slots, "Resolved provider slots");
        Ok(slots)
    }

    fn apply_override<L>(&mut self, path: &PathPermission, lookup: &L) -> Result<()>
    where
        L: PermissionLookup + ?Sized,
    {
        self.write = SlotResolution::resolve(&path.write_permission, lookup, self.write)?;
        self.read = SlotResolution::resolve(&path.read_permission, lookup, self.read)?;
        self.permission = SlotResolution::resolve(&path.permission, lookup, self.permission)?;
        Ok(())
    }

    /// Apply the provider rules in priority order. First match wins.
    pub fn finding_kind(&self) -> Option<FindingKind> {
        let (perm, read, write) = (self.permission, self.read, self.write);

        // An undefined read/write permission can be claimed by anyone who
        // defines it, as long as the base permission does not stop them.
        if (perm.unprivileged || perm.undefined) && (write.undefined || read.undefined) {
            return Some(FindingKind::Undefined);
        }
        if perm.undefined && (read.unprivileged || write.unprivileged) {
            return Some(FindingKind::Undefined);
        }
        if perm.unprivileged && (read.unprivileged || write.unprivileged) {
            return Some(FindingKind::Unprivileged);
        }
        None
    }
}

/// Classify one exported provider.
pub fn classify_provider<L>(
    provider: &ProviderComponent,
    lookup: &L,
) -> Result<Option<(FindingKind, Finding)>>
where
    L: PermissionLookup + ?Sized,
{
    let slots = ProviderSlots::resolve(provider, lookup)?;
    Ok(slots
        .finding_kind()
        .map(|kind| (kind, Finding::for_provider(provider))))
}
