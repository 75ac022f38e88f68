use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Structured JSON lines, for ingestion.
    Json,
    /// Human-readable output, for development.
    #[default]
    Pretty,
}

/// File rotation policy when a log directory is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RotationPolicy {
    #[default]
    Daily,
    Hourly,
    Never,
}

/// Logging configuration for the host process embedding the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default level directive (trace, debug, info, warn, error).
    pub level: String,
    /// Stdout format.
    pub format: LogFormat,
    /// Directory for rotated JSON log files. None disables file output.
    pub log_dir: Option<PathBuf>,
    /// Whether to also log to stdout when file output is enabled.
    pub enable_stdout: bool,
    /// Rotation policy for file output.
    pub rotation: RotationPolicy,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            log_dir: None,
            enable_stdout: true,
            rotation: RotationPolicy::Daily,
        }
    }
}
