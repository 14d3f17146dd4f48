//! Exposure rules for activities, services and broadcast receivers.

use crate::error::Result;
use crate::facts::ReceiverComponent;
use crate::findings::{Finding, FindingKind};
use crate::permission::{PermissionLookup, SlotResolution};
use std::collections::BTreeSet;

/// Classify a component guarded by a single `permission` slot.
pub fn classify_guarded<L>(
    name: &str,
    permission: &str,
    lookup: &L,
) -> Result<Option<(FindingKind, Finding)>>
where
    L: PermissionLookup + ?Sized,
{
    let slot = SlotResolution::resolve_fresh(permission, lookup)?;
    Ok(finding_kind(slot).map(|kind| (kind, Finding::new(name, permission))))
}

/// Classify a receiver, skipping it when only protected broadcasts reach it.
pub fn classify_receiver<L>(
    receiver: &ReceiverComponent,
    lookup: &L,
    protected_broadcasts: &BTreeSet<String>,
) -> Result<Option<(FindingKind, Finding)>>
where
    L: PermissionLookup + ?Sized,
{
    let slot = SlotResolution::resolve_fresh(&receiver.permission, lookup)?;
    if only_protected_actions(receiver, protected_broadcasts) {
        return Ok(None);
    }
    Ok(finding_kind(slot).map(|kind| (kind, Finding::new(&receiver.name, &receiver.permission))))
}

/// True when the receiver declares actions and every one is protected.
///
/// A receiver without actions is still reachable by explicit intents.
pub fn only_protected_actions(
    receiver: &ReceiverComponent,
    protected_broadcasts: &BTreeSet<String>,
) -> bool {
    !receiver.actions.is_empty()
        && receiver
            .actions
            .iter()
            .all(|action| protected_broadcasts.contains(action))
}

fn finding_kind(slot: SlotResolution) -> Option<FindingKind> {
    if slot.undefined {
        Some(FindingKind::Undefined)
    } else if slot.unprivileged {
        Some(FindingKind::Unprivileged)
    } else {
        None
    }
}
