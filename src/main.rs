use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use fitstats::config::AppConfig;
use fitstats::logging::{self, LogLevel};
use fitstats::{run_packages, sample_packages, ReportFormat, RunOptions, SensorPackage};

/// fitstats - Workout statistics from tracker readings
///
/// Computes distance, mean speed and calories burned for running, walking and
/// swimming sessions reported by a fitness tracker.
#[derive(Parser)]
#[command(name = "fitstats")]
#[command(version)]
#[command(about = "Workout statistics from tracker readings", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity of log output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Report format (text, json, table)
    #[arg(short = 'f', long, global = true)]
    format: Option<ReportFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the built-in sample sensor packages
    Report,

    /// Compute statistics for a single sensor package
    Calculate {
        /// Workout code (RUN, WLK, SWM)
        code: String,

        /// Readings in sensor order: action, duration, weight, then
        /// height (WLK) or pool length and pool laps (SWM)
        #[arg(allow_negative_numbers = true)]
        fields: Vec<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if cli.verbose > 0 {
        config.logging.level = config.logging.level.max(LogLevel::from_verbosity(cli.verbose));
    }
    logging::init_logging(&config.logging).context("Failed to initialize logging")?;

    let packages = match cli.command.unwrap_or(Commands::Report) {
        Commands::Report => sample_packages(),
        Commands::Calculate { code, fields } => vec![SensorPackage::new(code, fields)],
    };

    let options = RunOptions {
        format: cli.format.unwrap_or(config.output.format),
        color: io::stdout().is_terminal(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stats = match run_packages(&packages, options, &mut out) {
        Ok(stats) => stats,
        Err(err) => {
            match err.severity().to_tracing_level() {
                tracing::Level::ERROR => tracing::error!(error = %err, "Report failed"),
                _ => tracing::warn!(error = %err, "Report failed"),
            }
            anyhow::bail!(err.user_message());
        }
    };
    out.flush().context("Failed to flush report")?;

    if cli.verbose > 0 {
        eprintln!(
            "{}",
            format!("{} processed, {} rejected", stats.processed, stats.rejected).dimmed()
        );
    }

    Ok(())
}
