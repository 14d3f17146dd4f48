//! Package discovery.
//!
//! This module handles:
//! - Walking the packages directory
//! - Skipping generated overlay packages by name

pub mod patterns;
pub mod walker;

pub use patterns::{DEFAULT_SKIP_PATTERNS, PACKAGE_EXTENSION, SkipPatterns, is_package_file};
pub use walker::PackageWalker;
