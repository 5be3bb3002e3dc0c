//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Both binaries parse their own arguments and hand them to
//! [`CommandDispatcher`], which resolves settings once and routes to:
//! - [`install::InstallCommand`] for `install-quant-libs`
//! - [`probe::ProbeCommand`] for `benchenv-probe`

pub mod dispatcher;
pub mod install;
pub mod probe;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, usage_message};
