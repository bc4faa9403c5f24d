use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FitStatsError, Result};
use crate::logging::LogConfig;
use crate::report::ReportFormat;

/// Default configuration directory name
const CONFIG_DIR_NAME: &str = "fitstats";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings
    pub logging: LogConfig,

    /// Report output settings
    pub output: OutputSettings,
}

/// Report output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Output format (text, json, table)
    pub format: ReportFormat,
}

/// Default configuration file path
/// Returns ~/.config/fitstats/config.toml on Unix
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            FitStatsError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;

        toml::from_str(&contents).map_err(|e| {
            FitStatsError::Configuration(format!("invalid TOML in {}: {}", path.display(), e))
        })
    }

    /// Load an explicitly requested file, or the default file when it exists
    ///
    /// A missing default file means defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load_from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }
}
