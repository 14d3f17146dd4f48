use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "exposure-audit",
    version,
    about = "Audits exported Android components for weak permission guards",
    long_about = "exposure-audit finds exported activities, services, content providers and broadcast receivers whose guard permission is missing, undefined in any scanned package, or grantable to unprivileged apps."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// CI mode: non-interactive output
    #[arg(long, global = true)]
    pub ci: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract facts from a working directory (or reuse its snapshot) and classify them
    Scan(ScanArgs),

    /// Classify a saved fact snapshot
    Classify(ClassifyArgs),

    /// Count exported components per package
    Census(CensusArgs),
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Working directory containing `packages/`
    pub work_dir: PathBuf,

    /// Ignore an existing all_comp.json and extract again
    #[arg(long)]
    pub rescan: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Config file (defaults to .exposure-audit.* in the working directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Fact snapshot (all_comp.json)
    pub snapshot: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Also write the JSON report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CensusArgs {
    /// Working directory containing `packages/`
    pub work_dir: PathBuf,

    /// Ignore an existing all_comp.json and extract again
    #[arg(long)]
    pub rescan: bool,

    /// Config file (defaults to .exposure-audit.* in the working directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
