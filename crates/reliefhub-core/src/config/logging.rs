//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Logging and tracing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `"trace"`, `"debug"`, `"info"`, `"warn"`, `"error"`.
    #[serde(default = "default_level")]
    pub level: String,
    /// Console format: `"json"` or `"pretty"`.
    #[serde(default = "default_format")]
    pub format: String,
    /// Directory holding the error log.
    #[serde(default = "default_directory")]
    pub directory: String,
    /// File name prefix of the error log.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    /// Rotation policy for the error log.
    #[serde(default)]
    pub rotation: LogRotation,
    /// Maximum number of rotated log files to retain.
    #[serde(default = "default_max_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            directory: default_directory(),
            file_prefix: default_file_prefix(),
            rotation: LogRotation::default(),
            max_files: default_max_files(),
        }
    }
}

/// How often the error log file rolls over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

fn default_directory() -> String {
    "data/logs".to_string()
}

fn default_file_prefix() -> String {
    "error.log".to_string()
}

fn default_max_files() -> usize {
    10
}
