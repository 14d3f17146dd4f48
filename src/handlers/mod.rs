//! CLI command handlers.
//!
//! Each handler prints its output and maps the outcome to an exit status:
//! 0 when nothing was found, 1 when findings were reported, 2 on error.

mod census;
mod classify;
mod scan;

use crate::findings::Findings;
use std::process::ExitCode;

pub use census::handle_census;
pub use classify::handle_classify;
pub use scan::handle_scan;

/// Result type for handler functions that can be tested.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerResult {
    Success,
    Error(u8),
}

/// Exit status when the audit reported findings.
pub const FINDINGS_EXIT_CODE: u8 = 1;
/// Exit status when the audit could not run.
pub const ERROR_EXIT_CODE: u8 = 2;

impl HandlerResult {
    pub fn from_findings(findings: &Findings) -> Self {
        if findings.is_empty() {
            HandlerResult::Success
        } else {
            HandlerResult::Error(FINDINGS_EXIT_CODE)
        }
    }

    pub fn failure(error: impl std::fmt::Display) -> Self {
        eprintln!("Error: {}", error);
        HandlerResult::Error(ERROR_EXIT_CODE)
    }
}

impl From<HandlerResult> for ExitCode {
    fn from(result: HandlerResult) -> Self {
        match result {
            HandlerResult::Success => ExitCode::SUCCESS,
            HandlerResult::Error(code) => ExitCode::from(code),
        }
    }
}
