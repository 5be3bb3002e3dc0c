//! Benchmark environment tooling for quantized ML backends.
//!
//! Two concerns live here: probing which optional ML packages a Python
//! environment can import (and at what version), and building the AutoAWQ
//! and AutoGPTQ quantization libraries from source so they link against the
//! torch that is already installed.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and layering
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Clone, patch and build of quantization libraries
//! - [`logging`] - Tracing setup for the binaries
//! - [`probe`] - Optional package availability and versions
//! - [`shell`] - External process execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use benchenv::installer::apply_patch;
//!
//! let setup = "    \"torch==2.3.1\",\n    \"numpy\",\n";
//! assert_eq!(apply_patch(setup), "    \"numpy\",\n");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod logging;
pub mod probe;
pub mod shell;
pub mod ui;

pub use error::{BenchError, Result};
pub use logging::init_tracing;
