//! Command handlers.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use flightroster_core::{FlightBundle, FlightDetail};
use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;

/// Exit status when `check` finds data-quality issues
const EXIT_ISSUES_FOUND: u8 = 2;

#[derive(Debug, Args)]
pub struct DetailCommand {
    /// Flight bundle file, or `-` for stdin
    pub bundle: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Flight bundle file, or `-` for stdin
    pub bundle: PathBuf,
}

#[derive(Debug, Args)]
pub struct BatchCommand {
    /// Flight bundle files
    #[arg(required = true)]
    pub bundles: Vec<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write the effective configuration to the configuration file
    Init,
}

fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read bundle from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read bundle: {}", path.display()))
    }
}

fn load_detail(path: &Path) -> Result<FlightDetail> {
    let contents = read_source(path)?;
    let bundle = FlightBundle::from_json(&contents)
        .with_context(|| format!("Failed to parse bundle: {}", path.display()))?;
    debug!(path = %path.display(), rows = bundle.rows.len(), "Loaded bundle");
    Ok(FlightDetail::from_bundle(&bundle))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", rendered);
    Ok(())
}

impl DetailCommand {
    pub fn run(&self, config: &Config) -> Result<ExitCode> {
        let detail = load_detail(&self.bundle)?;
        print_json(&detail, self.pretty || config.pretty)?;
        Ok(ExitCode::SUCCESS)
    }
}

impl CheckCommand {
    pub fn run(&self) -> Result<ExitCode> {
        Ok(ExitCode::from(self.check()?))
    }

    /// Print the flight summary and issues; returns the process exit status
    fn check(&self) -> Result<u8> {
        let detail = load_detail(&self.bundle)?;
        let flight = &detail.flight;
        let stats = &detail.stats;

        println!("{} ({}) - {}", flight.name, flight.id, flight.formatted_date());
        println!(
            "Pairs: {} | People: {} | Capacity: {} | Open seats: {}",
            detail.pairs.len(),
            detail.people_count(),
            flight.capacity,
            detail.open_seats()
        );
        println!(
            "Assigned  Alpha: {} | Bravo: {} | None: {}",
            stats.tours.alpha, stats.tours.bravo, stats.tours.none
        );
        println!(
            "Flying    Alpha: {} | Bravo: {} | None: {}",
            stats.flight.alpha, stats.flight.bravo, stats.flight.none
        );

        let issues = detail.issues();
        if issues.is_empty() {
            println!("No data-quality issues");
            return Ok(0);
        }

        println!("{} data-quality issue(s):", issues.len());
        for issue in &issues {
            println!("  - {}", issue);
        }
        warn!(flight = %flight.id, issues = issues.len(), "Data-quality issues found");
        Ok(EXIT_ISSUES_FOUND)
    }
}

impl BatchCommand {
    pub async fn run(&self, config: &Config) -> Result<ExitCode> {
        let details = self.compute().await?;
        info!(flights = details.len(), "Batch complete");
        print_json(&details, self.pretty || config.pretty)?;
        Ok(ExitCode::SUCCESS)
    }

    /// Each flight is independent, so every bundle is computed on its own
    /// blocking task. Results come back in argument order.
    async fn compute(&self) -> Result<Vec<FlightDetail>> {
        let tasks = self.bundles.iter().cloned().map(|path| {
            tokio::task::spawn_blocking(move || {
                load_detail(&path).with_context(|| format!("Flight failed: {}", path.display()))
            })
        });

        let mut details = Vec::with_capacity(self.bundles.len());
        for joined in join_all(tasks).await {
            details.push(joined.context("Flight task panicked")??);
        }
        Ok(details)
    }
}

impl ConfigCommand {
    pub fn run(&self, config: &Config, override_path: Option<&Path>) -> Result<ExitCode> {
        match self {
            ConfigCommand::Show => print_json(config, true)?,
            ConfigCommand::Path => {
                let path = match override_path {
                    Some(p) => p.to_path_buf(),
                    None => Config::config_path()?,
                };
                println!("{}", path.display());
            }
            ConfigCommand::Init => {
                config.save(override_path)?;
                info!("Configuration written");
            }
        }
        Ok(ExitCode::SUCCESS)
    }
}
