//! Configuration types and loading

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Directory that file sink destinations are written into
    pub dir: PathBuf,
    /// Which sink receives lookup log entries
    pub sink: SinkKind,
    /// Tracing filter directive (RUST_LOG syntax)
    pub filter: String,
    /// Output format of the tracing subscriber
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("logs"),
            sink: SinkKind::File,
            filter: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    #[default]
    File,
    Tracing,
    None,
}

impl FromStr for SinkKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(SinkKind::File),
            "tracing" => Ok(SinkKind::Tracing),
            "none" | "off" => Ok(SinkKind::None),
            other => Err(ConfigError::InvalidValue {
                key: "DS_LOG_SINK".to_string(),
                message: format!("unknown sink '{}', expected file, tracing or none", other),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::InvalidValue {
                key: "DS_LOG_FORMAT".to_string(),
                message: format!("unknown format '{}', expected text or json", other),
            }),
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("DS_LOG_DIR").filter(|d| !d.trim().is_empty()) {
            config.logging.dir = PathBuf::from(dir);
        }
        if let Some(sink) = lookup("DS_LOG_SINK") {
            config.logging.sink = sink.parse()?;
        }
        // DS_LOG_FILTER wins over RUST_LOG so the example can be tuned alone
        if let Some(filter) = lookup("DS_LOG_FILTER").or_else(|| lookup("RUST_LOG")) {
            config.logging.filter = filter;
        }
        if let Some(format) = lookup("DS_LOG_FORMAT") {
            config.logging.format = format.parse()?;
        }

        Ok(config)
    }
}
