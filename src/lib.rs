pub mod census;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod facts;
pub mod findings;
pub mod handlers;
pub mod permission;
pub mod reporter;
pub mod run;
pub mod snapshot;

#[cfg(test)]
pub mod test_utils;

pub use census::ExportCensus;
pub use classifier::{ExposureClassifier, classify};
pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use error::{AuditError, Result};
pub use facts::{Component, ComponentKind, MergedFactSet, PackageFacts, PermissionDefinition};
pub use findings::{Finding, FindingKind, Findings, Summary};
pub use reporter::{Reporter, json::JsonReporter, terminal::TerminalReporter};
pub use snapshot::Workspace;
