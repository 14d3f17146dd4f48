//! Report rendering.

use crate::cli::OutputFormat;
use crate::findings::Findings;
use crate::reporter::{Reporter, json::JsonReporter, terminal::TerminalReporter};

pub fn format_findings(format: OutputFormat, verbose: bool, findings: &Findings) -> String {
    match format {
        OutputFormat::Terminal => TerminalReporter::new(verbose).report(findings),
        OutputFormat::Json => JsonReporter::new().report(findings),
    }
}
