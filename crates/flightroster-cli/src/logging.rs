//! Tracing setup for the `flightroster` binary.

use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;

/// Log file name prefix inside the configured log directory
const LOG_FILE_PREFIX: &str = "flightroster.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Trace,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Verbosity::Quiet;
        }
        match verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Trace,
        }
    }

    /// Filter used when neither `RUST_LOG` nor the config sets one
    fn default_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "flightroster_core=debug,flightroster=debug",
            Verbosity::Trace => "flightroster_core=trace,flightroster=trace",
        }
    }
}

/// Pick the filter directive: `RUST_LOG`, then explicit -v/-q, then config, then warn
fn filter_directive(verbosity: Verbosity, config: &Config) -> String {
    match (verbosity, &config.log_level) {
        (Verbosity::Normal, Some(level)) => level.clone(),
        _ => verbosity.default_filter().to_string(),
    }
}

/// Initialize the tracing subscriber.
///
/// Logs go to stderr so stdout stays clean JSON. The returned guard must be
/// held until exit when file logging is enabled.
pub fn init_tracing(verbosity: Verbosity, config: &Config) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity, config)));

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .with(filter)
        .try_init();

    guard
}
