use clap::Parser;
use exposure_audit::{
    Cli, Command,
    handlers::{handle_census, handle_classify, handle_scan},
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // --verbose > RUST_LOG > "warn"
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Command::Scan(args) => handle_scan(&cli, args),
        Command::Classify(args) => handle_classify(&cli, args),
        Command::Census(args) => handle_census(&cli, args),
    }
}
