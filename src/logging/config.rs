//! Logging configuration
//!
//! Output level, optional source locations, and the optional file sink.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Include file and line in console output
    pub include_file_location: bool,

    /// Directory for JSON log files (None = no file logging)
    pub log_directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            include_file_location: false,
            log_directory: None,
        }
    }
}

impl LoggingConfig {
    /// Map a `-v` count to a configuration, as the command line does.
    pub fn from_verbosity(verbose: u8) -> Self {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        Self {
            level: level.to_string(),
            include_file_location: verbose >= 2,
            log_directory: None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];

        if !valid_levels.contains(&self.level.as_str()) {
            return Err(format!(
                "Invalid log level: {}. Must be one of: {:?}",
                self.level, valid_levels
            ));
        }

        if let Some(ref log_dir) = self.log_directory {
            if log_dir.exists() && !log_dir.is_dir() {
                return Err(format!("Log directory is not a directory: {:?}", log_dir));
            }
        }

        Ok(())
    }
}
