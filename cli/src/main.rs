//! Pulse - query clinic performance records from the command line.
//!
//! This is the entry point for the `pulse` binary.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use pulse_cli::{execute, load_records, Cli};
use pulse_query::{DashboardConfig, QueryEngine, QueryError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            // Input the user can correct gets a distinct status.
            match e.downcast_ref::<QueryError>() {
                Some(q) if q.is_user_input() => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    debug!(?config, "configuration resolved");
    let engine = QueryEngine::with_config(config)?;

    let path = cli
        .data
        .as_deref()
        .context("no record file given (use --data or PULSE_DATA)")?;
    let loaded = load_records(path)?;

    execute(cli, &loaded.records, &engine)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
