//! flightroster - charter flight roster reconciliation from the command line.
//!
//! Loads flight bundles, runs the pairing and statistics engine from
//! `flightroster-core`, and prints results or data-quality reports.

mod cli;
mod config;
mod logging;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use cli::{Cli, Command};
use config::Config;
use logging::Verbosity;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let _log_guard = logging::init_tracing(Verbosity::from_flags(cli.quiet, cli.verbose), &config);
    info!("flightroster starting");

    match &cli.command {
        Command::Detail(cmd) => cmd.run(&config),
        Command::Check(cmd) => cmd.run(),
        Command::Batch(cmd) => cmd.run(&config).await,
        Command::Config(cmd) => cmd.run(&config, cli.config.as_deref()),
    }
}
