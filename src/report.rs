//! Render workout summaries for the terminal
//!
//! The text line is the canonical output. JSON lines and a table are offered
//! for scripting and for reading several workouts side by side.

use crate::error::{PackageError, Result};
use crate::models::WorkoutSummary;
use serde::{Deserialize, Serialize};
use std::fmt;
use tabled::{settings::Style, Table, Tabled};

/// Output format for workout reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One summary sentence per workout
    #[default]
    Text,
    /// One JSON object per line
    Json,
    /// Aligned table of all workouts
    Table,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "table" => Ok(ReportFormat::Table),
            _ => Err(format!("Invalid report format: {}", s)),
        }
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h.; Distance: {:.3} km; Mean speed: {:.3} km/h; Calories: {:.3}.",
            self.kind, self.duration_hours, self.distance_km, self.mean_speed_kmh, self.calories_kcal
        )
    }
}

/// Diagnostic printed in place of a rejected package
pub fn diagnostic_line(err: &PackageError) -> String {
    match err {
        PackageError::UnknownWorkoutType { code } => format!("Unknown workout type: {}", code),
        PackageError::MalformedInput { kind, reason } => {
            format!("Input data error ({}): {}", kind.code(), reason)
        }
    }
}

/// JSON line for a computed summary
pub fn json_line(summary: &WorkoutSummary) -> Result<String> {
    Ok(serde_json::to_string(summary)?)
}

/// JSON line for a rejected package
pub fn json_diagnostic(err: &PackageError) -> Result<String> {
    let value = serde_json::json!({
        "error": diagnostic_line(err),
        "code": err.code(),
    });
    Ok(serde_json::to_string(&value)?)
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Workout")]
    kind: String,
    #[tabled(rename = "Duration (h)")]
    duration: String,
    #[tabled(rename = "Distance (km)")]
    distance: String,
    #[tabled(rename = "Mean speed (km/h)")]
    mean_speed: String,
    #[tabled(rename = "Calories")]
    calories: String,
}

impl From<&WorkoutSummary> for SummaryRow {
    fn from(summary: &WorkoutSummary) -> Self {
        Self {
            kind: summary.kind.to_string(),
            duration: format!("{:.3}", summary.duration_hours),
            distance: format!("{:.3}", summary.distance_km),
            mean_speed: format!("{:.3}", summary.mean_speed_kmh),
            calories: format!("{:.3}", summary.calories_kcal),
        }
    }
}

/// Table of summaries, one row per workout
pub fn summary_table(summaries: &[WorkoutSummary]) -> String {
    let rows: Vec<SummaryRow> = summaries.iter().map(SummaryRow::from).collect();
    Table::new(rows).with(Style::modern()).to_string()
}
