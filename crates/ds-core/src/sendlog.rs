//! Log sinks
//!
//! A sink receives a message together with a destination name such as
//! `common.log`. Callers that log as a side effect of a query treat sink
//! failures as non-fatal.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use parking_lot::Mutex;

use crate::config::{LoggingConfig, SinkKind};
use crate::error::DsError;
use crate::result::DsResult;

/// Destination-addressed log collaborator
pub trait LogSink: Send + Sync {
    /// Deliver `message` to the named destination
    fn send(&self, message: &str, destination: &str) -> DsResult<()>;
}

/// Build the sink selected by the logging configuration
pub fn sink_from_config(config: &LoggingConfig) -> Arc<dyn LogSink> {
    match config.sink {
        SinkKind::File => Arc::new(FileLogSink::new(&config.dir)),
        SinkKind::Tracing => Arc::new(TracingLogSink),
        SinkKind::None => Arc::new(NullLogSink),
    }
}

/// Appends timestamped lines to `<dir>/<destination>`
#[derive(Debug)]
pub struct FileLogSink {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileLogSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve a destination name to a file inside the sink directory
    pub fn path_for(&self, destination: &str) -> DsResult<PathBuf> {
        let trimmed = destination.trim();
        if trimmed.is_empty() {
            return Err(DsError::invalid("destination", "must not be empty"));
        }
        if trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == ".." {
            return Err(DsError::invalid(
                "destination",
                format!("'{}' must be a plain file name", destination),
            ));
        }
        Ok(self.dir.join(trimmed))
    }
}

impl LogSink for FileLogSink {
    fn send(&self, message: &str, destination: &str) -> DsResult<()> {
        let path = self.path_for(destination)?;
        let line = format!(
            "{} {}\n",
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            message
        );

        let _guard = self.write_lock.lock();
        fs::create_dir_all(&self.dir)
            .map_err(|e| DsError::io(self.dir.display().to_string(), e))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| DsError::io(path.display().to_string(), e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| DsError::io(path.display().to_string(), e))?;
        Ok(())
    }
}

/// Forwards messages to the tracing subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn send(&self, message: &str, destination: &str) -> DsResult<()> {
        tracing::info!(destination, "{}", message);
        Ok(())
    }
}

/// Discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogSink;

impl LogSink for NullLogSink {
    fn send(&self, _message: &str, _destination: &str) -> DsResult<()> {
        Ok(())
    }
}

/// A log entry captured by [`MemoryLogSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub destination: String,
    pub message: String,
}

/// Keeps messages in memory, in arrival order
#[derive(Debug, Default)]
pub struct MemoryLogSink {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl LogSink for MemoryLogSink {
    fn send(&self, message: &str, destination: &str) -> DsResult<()> {
        self.entries.lock().push(LogEntry {
            destination: destination.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}
