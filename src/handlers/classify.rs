//! Classify handler: classify a saved fact snapshot without touching packages.

use super::HandlerResult;
use crate::cli::{ClassifyArgs, Cli};
use crate::error::Result;
use crate::findings::Findings;
use crate::run::{audit, format_findings};
use crate::snapshot::{load_snapshot, save_report};
use std::process::ExitCode;
use tracing::info;

/// Handle the `classify` subcommand.
pub fn handle_classify(cli: &Cli, args: &ClassifyArgs) -> ExitCode {
    run_classify(cli, args).into()
}

pub(crate) fn run_classify(cli: &Cli, args: &ClassifyArgs) -> HandlerResult {
    match classify_snapshot(args) {
        Ok(findings) => {
            println!("{}", format_findings(args.format, cli.verbose, &findings));
            HandlerResult::from_findings(&findings)
        }
        Err(e) => HandlerResult::failure(e),
    }
}

fn classify_snapshot(args: &ClassifyArgs) -> Result<Findings> {
    info!(snapshot = %args.snapshot.display(), "Classifying snapshot");
    let packages = load_snapshot(&args.snapshot)?;
    let findings = audit(&packages)?;
    if let Some(ref output) = args.output {
        save_report(output, &findings)?;
        info!(path = %output.display(), "Wrote report");
    }
    Ok(findings)
}
