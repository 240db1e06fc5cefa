//! Core error types for the document server example
//!
//! Lookups in the user directory are total; these errors only surface from
//! the collaborators around it (log sinks, configuration, serialization).

use thiserror::Error;

use crate::config::ConfigError;

/// Core error type for all fallible operations
#[derive(Error, Debug)]
pub enum DsError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DsError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        DsError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        DsError::InvalidValue {
            field,
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            DsError::Io { .. } => "io_error",
            DsError::InvalidValue { .. } => "invalid_value",
            DsError::Config(_) => "configuration_error",
            DsError::Serialization(_) => "serialization_error",
        }
    }
}
