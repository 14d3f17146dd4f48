//! Permission semantics: privilege classification, lookup and slot resolution.

pub mod lookup;
pub mod protection;
pub mod slot;

pub use lookup::{PermissionIndex, PermissionLookup};
pub use protection::{Privilege, classify};
pub use slot::SlotResolution;
