//! Protection-level privilege classification.

use crate::error::{AuditError, Result};
use crate::facts::PermissionDefinition;
use serde::{Deserialize, Serialize};

/// Flag words that mark a permission as grantable to any caller.
///
/// A level is unprivileged when OR-ing it with one of these yields exactly 1.
/// No non-negative level ever matches `1000`.
const UNPRIVILEGED_FLAG_WORDS: [i128; 2] = [1000, 1];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Privilege {
    Privileged,
    Unprivileged,
}

/// Classify a permission definition by its protection level.
///
/// Only an empty level is unprivileged without parsing. Anything else must be
/// a hex number, optionally signed, `0x`-prefixed and padded with whitespace;
/// otherwise the error names the permission.
pub fn classify(def: &PermissionDefinition) -> Result<Privilege> {
    if def.protection_level.is_empty() {
        return Ok(Privilege::Unprivileged);
    }

    let level = parse_protection_level(&def.protection_level).map_err(|reason| {
        AuditError::InvalidProtectionLevel {
            permission: def.name.clone(),
            value: def.protection_level.clone(),
            reason,
        }
    })?;

    if UNPRIVILEGED_FLAG_WORDS
        .iter()
        .any(|&flags| or_equals_one(level, flags))
    {
        Ok(Privilege::Unprivileged)
    } else {
        Ok(Privilege::Privileged)
    }
}

fn or_equals_one(level: i128, flags: i128) -> bool {
    level | flags == 1
}

/// Parse a hex flag word. One optional sign, then an optional `0x`, then at
/// least one hex digit and nothing else.
fn parse_protection_level(raw: &str) -> std::result::Result<i128, &'static str> {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .unwrap_or(unsigned);

    if digits.is_empty() {
        return Err("no hex digits");
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err("not a hex number");
    }

    // Digits only, so the magnitude is non-negative and negating cannot
    // overflow. Past i128 the bit test cannot come out unprivileged: saturate.
    let magnitude = i128::from_str_radix(digits, 16).unwrap_or(i128::MAX);
    Ok(if negative { -magnitude } else { magnitude })
}
