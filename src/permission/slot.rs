//! Guard slot resolution.
//!
//! A slot is one `permission`, `readPermission` or `writePermission` value.
//! Resolving it against the permission universe yields two flags:
//! whether it names a permission nobody defines, and whether a caller
//! without privileges can satisfy it.

use super::lookup::PermissionLookup;
use super::protection::{Privilege, classify};
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotResolution {
    pub undefined: bool,
    pub unprivileged: bool,
}

impl Default for SlotResolution {
    /// State of a slot before anything has been resolved into it.
    fn default() -> Self {
        Self {
            undefined: true,
            unprivileged: true,
        }
    }
}

impl SlotResolution {
    /// An empty slot: open to everyone, but nothing is missing.
    pub const OPEN: SlotResolution = SlotResolution {
        undefined: false,
        unprivileged: true,
    };

    /// Resolve `value` on top of `prior`.
    ///
    /// When the name is not defined anywhere, `unprivileged` keeps its prior
    /// value.
    pub fn resolve<L>(value: &str, lookup: &L, prior: SlotResolution) -> Result<SlotResolution>
    where
        L: PermissionLookup + ?Sized,
    {
        if value.is_empty() {
            return Ok(Self::OPEN);
        }

        match lookup.lookup(value) {
            None => Ok(SlotResolution {
                undefined: true,
                unprivileged: prior.unprivileged,
            }),
            Some(def) => Ok(SlotResolution {
                undefined: false,
                unprivileged: classify(def)? == Privilege::Unprivileged,
            }),
        }
    }

    /// Resolve a slot with no earlier state.
    pub fn resolve_fresh<L>(value: &str, lookup: &L) -> Result<SlotResolution>
    where
        L: PermissionLookup + ?Sized,
    {
        Self::resolve(value, lookup, Self::default())
    }
}
