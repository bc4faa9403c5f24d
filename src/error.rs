//! Error hierarchy for fitstats
//!
//! Sensor package problems are recoverable and reported per record; the
//! remaining variants abort the run.

use crate::models::WorkoutKind;
use thiserror::Error;

/// Top-level error type for all fitstats operations
#[derive(Debug, Error)]
pub enum FitStatsError {
    /// Sensor package could not be turned into a workout
    #[error("Package error: {0}")]
    Package(#[from] PackageError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Problems with a single sensor package
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PackageError {
    /// Code is not one of the known workout codes
    #[error("Unknown workout type: {code}")]
    UnknownWorkoutType { code: String },

    /// Field count or field value does not fit the workout kind
    #[error("Input data error for {kind}: {reason}")]
    MalformedInput { kind: WorkoutKind, reason: String },
}

/// Result type alias for fitstats operations
pub type Result<T> = std::result::Result<T, FitStatsError>;

impl PackageError {
    pub fn malformed(kind: WorkoutKind, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            kind,
            reason: reason.into(),
        }
    }

    /// Sensor code the package carried, when known
    pub fn code(&self) -> &str {
        match self {
            PackageError::UnknownWorkoutType { code } => code,
            PackageError::MalformedInput { kind, .. } => kind.code(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Warning
    }
}

impl FitStatsError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FitStatsError::Package(err) => err.severity(),
            FitStatsError::Configuration(_) => ErrorSeverity::Error,
            FitStatsError::Io(_) | FitStatsError::Serialization(_) => ErrorSeverity::Critical,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FitStatsError::Package(err) => err.to_string(),
            FitStatsError::Configuration(reason) => {
                format!("Could not load configuration: {}", reason)
            }
            FitStatsError::Io(err) if err.kind() == std::io::ErrorKind::BrokenPipe => {
                "Output closed before the report was complete.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error that stops the run
    Critical,
    /// Error that prevents an operation
    Error,
    /// Problem with a single record; processing continues
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical | ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_severity() {
        let err = FitStatsError::from(PackageError::UnknownWorkoutType {
            code: "XYZ".to_string(),
        });
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert_eq!(err.severity().to_tracing_level(), tracing::Level::WARN);

        let err = FitStatsError::Configuration("bad toml".to_string());
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_package_messages() {
        let err = PackageError::UnknownWorkoutType {
            code: "XYZ".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown workout type: XYZ");
        assert_eq!(err.code(), "XYZ");

        let err = PackageError::malformed(WorkoutKind::Running, "expected 3 fields, got 4");
        assert_eq!(
            err.to_string(),
            "Input data error for Running: expected 3 fields, got 4"
        );
        assert_eq!(err.code(), "RUN");
    }

    #[test]
    fn test_user_messages() {
        let err = FitStatsError::Configuration("missing file".to_string());
        assert!(err.user_message().contains("Could not load configuration"));

        let err = FitStatsError::Io(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert!(err.user_message().contains("Output closed"));
    }
}
