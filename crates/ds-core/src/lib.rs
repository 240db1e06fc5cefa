//! # ds-core
//!
//! Core types and utilities for the document server example.
//!
//! This crate provides the building blocks shared by the other crates:
//! - Error types and the result alias
//! - Configuration loading
//! - Log sinks (destination-addressed message logging)
//! - Tracing subscriber setup

pub mod error;
pub mod result;
pub mod config;
pub mod sendlog;
pub mod telemetry;

pub use error::*;
pub use result::*;
pub use sendlog::{LogSink, MemoryLogSink};
