// Library interface for fitstats modules
// This allows integration tests and benches to access the core functionality

pub mod config;
pub mod dispatch;
pub mod driver;
pub mod error;
pub mod formulas;
pub mod logging;
pub mod models;
pub mod report;

// Re-export commonly used types for convenience
pub use models::*;
pub use dispatch::{read_package, summarize_package, SensorPackage};
pub use driver::{run_packages, sample_packages, RunOptions, RunStats, SAMPLE_PACKAGES};
pub use error::{FitStatsError, PackageError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use report::ReportFormat;
