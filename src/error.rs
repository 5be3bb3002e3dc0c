//! Error types for benchenv operations.
//!
//! This module defines [`BenchError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A package or version that is simply not installed is not an error; the
//!   prober returns `None` for it
//! - Use `BenchError` for failures that abort an install run
//! - Use `anyhow::Error` (via `BenchError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for benchenv operations.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// External command could not be started or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Reading or rewriting a build descriptor failed.
    #[error("Failed to patch build descriptor {path}: {source}")]
    BuildDescriptor {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for benchenv operations.
pub type Result<T> = std::result::Result<T, BenchError>;
