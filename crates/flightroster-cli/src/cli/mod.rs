//! Command-line interface for the `flightroster` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{BatchCommand, CheckCommand, ConfigCommand, DetailCommand};

/// flightroster - Reconcile a charter flight roster into pairs and occupancy stats
///
/// Reads a flight bundle (`{"flight": {...}, "rows": [...]}`) and reports the
/// veteran/guardian pairs, bus and tour counts, and data-quality problems.
#[derive(Debug, Parser)]
#[command(name = "flightroster")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all logging except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the flight detail result as JSON
    Detail(DetailCommand),

    /// Summarize a flight and list data-quality issues
    Check(CheckCommand),

    /// Compute several flights at once
    Batch(BatchCommand),

    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}
