//! Process a batch of sensor packages and write one line per package
//!
//! Rejected packages produce a diagnostic line in their place; the batch
//! always runs to the end unless the output itself fails.

use crate::dispatch::{summarize_package, SensorPackage};
use crate::error::Result;
use crate::models::WorkoutSummary;
use crate::report::{self, ReportFormat};
use colored::Colorize;
use std::io::Write;

/// Sample packages from the tracker, processed when no other input is given
pub const SAMPLE_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

/// Sample packages as owned values
pub fn sample_packages() -> Vec<SensorPackage> {
    SAMPLE_PACKAGES
        .iter()
        .map(|(code, fields)| SensorPackage::new(*code, *fields))
        .collect()
}

/// Options controlling how a batch is rendered
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub format: ReportFormat,
    /// Highlight diagnostic lines with ANSI colors
    pub color: bool,
}

/// Outcome counts for a processed batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub processed: usize,
    pub rejected: usize,
}

/// Summarize every package in order, writing results and diagnostics to `out`
pub fn run_packages<W: Write>(
    packages: &[SensorPackage],
    options: RunOptions,
    out: &mut W,
) -> Result<RunStats> {
    let span = tracing::info_span!("run_packages", count = packages.len());
    let _guard = span.enter();

    let mut stats = RunStats::default();
    let mut table_rows: Vec<WorkoutSummary> = Vec::new();
    let mut table_diagnostics: Vec<String> = Vec::new();

    for package in packages {
        match summarize_package(&package.code, &package.fields) {
            Ok(summary) => {
                stats.processed += 1;
                match options.format {
                    ReportFormat::Text => writeln!(out, "{}", summary)?,
                    ReportFormat::Json => writeln!(out, "{}", report::json_line(&summary)?)?,
                    ReportFormat::Table => table_rows.push(summary),
                }
            }
            Err(err) => {
                stats.rejected += 1;
                match options.format {
                    ReportFormat::Text => {
                        let line = report::diagnostic_line(&err);
                        if options.color {
                            writeln!(out, "{}", line.red())?;
                        } else {
                            writeln!(out, "{}", line)?;
                        }
                    }
                    ReportFormat::Json => writeln!(out, "{}", report::json_diagnostic(&err)?)?,
                    ReportFormat::Table => table_diagnostics.push(report::diagnostic_line(&err)),
                }
            }
        }
    }

    if options.format == ReportFormat::Table {
        if !table_rows.is_empty() {
            writeln!(out, "{}", report::summary_table(&table_rows))?;
        }
        for line in table_diagnostics {
            writeln!(out, "{}", line)?;
        }
    }

    tracing::info!(
        processed = stats.processed,
        rejected = stats.rejected,
        "Finished processing sensor packages"
    );

    Ok(stats)
}
