//! Census handler: exported component counts per package.

use super::HandlerResult;
use crate::census::ExportCensus;
use crate::cli::{CensusArgs, Cli};
use crate::error::Result;
use crate::run::{CollectOptions, collect_facts, load_config};
use crate::snapshot::Workspace;
use std::process::ExitCode;

/// Handle the `census` subcommand.
pub fn handle_census(cli: &Cli, args: &CensusArgs) -> ExitCode {
    run_census(cli, args).into()
}

pub(crate) fn run_census(cli: &Cli, args: &CensusArgs) -> HandlerResult {
    match census(cli, args) {
        Ok(rows) => {
            for row in &rows {
                println!("{}", row);
            }
            println!("{}", census_footer(&rows));
            HandlerResult::Success
        }
        Err(e) => HandlerResult::failure(e),
    }
}

fn census_footer(rows: &[ExportCensus]) -> String {
    let exported: usize = rows.iter().map(ExportCensus::total).sum();
    format!("{} packages, {} exported components", rows.len(), exported)
}

fn census(cli: &Cli, args: &CensusArgs) -> Result<Vec<ExportCensus>> {
    let ws = Workspace::open(&args.work_dir)?;
    let config = load_config(ws.root(), args.config.as_deref())?;
    let options = CollectOptions {
        rescan: args.rescan,
        ci: cli.ci,
    };
    let packages = collect_facts(&ws, &config, options)?;
    Ok(packages.iter().map(ExportCensus::from_facts).collect())
}
