//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the workspace crates.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "spheroid=debug",
            LogLevel::Info => "spheroid=info",
            LogLevel::Warning => "spheroid=warn",
            LogLevel::Error => "spheroid=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Write logs here instead of stderr.
    pub file: Option<String>,
}
