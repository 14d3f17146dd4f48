//! Scan handler: collect facts for a working directory, classify, write the report.

use super::HandlerResult;
use crate::cli::{Cli, ScanArgs};
use crate::error::Result;
use crate::findings::Findings;
use crate::run::{CollectOptions, audit, collect_facts, format_findings, load_config};
use crate::snapshot::Workspace;
use std::process::ExitCode;
use tracing::{debug, info};

/// Handle the `scan` subcommand.
pub fn handle_scan(cli: &Cli, args: &ScanArgs) -> ExitCode {
    run_scan(cli, args).into()
}

pub(crate) fn run_scan(cli: &Cli, args: &ScanArgs) -> HandlerResult {
    info!(work_dir = %args.work_dir.display(), rescan = args.rescan, "Starting scan");
    match scan(cli, args) {
        Ok(findings) => {
            println!("{}", format_findings(args.format, cli.verbose, &findings));
            debug!(total = findings.total(), "Scan finished");
            HandlerResult::from_findings(&findings)
        }
        Err(e) => HandlerResult::failure(e),
    }
}

fn scan(cli: &Cli, args: &ScanArgs) -> Result<Findings> {
    let ws = Workspace::open(&args.work_dir)?;
    let config = load_config(ws.root(), args.config.as_deref())?;
    let options = CollectOptions {
        rescan: args.rescan,
        ci: cli.ci,
    };

    let packages = collect_facts(&ws, &config, options)?;
    let findings = audit(&packages)?;
    ws.save_report(&findings)?;
    info!(path = %ws.report_path().display(), "Wrote report");
    Ok(findings)
}
