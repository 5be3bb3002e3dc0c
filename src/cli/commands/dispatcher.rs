//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for resolving settings and routing each binary's
//!   arguments to its command

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, ProbeCli};
use crate::config::{load_config, site_packages_from_env, Overrides, Settings};
use crate::error::Result;
use crate::installer::InstallTarget;
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::UserInterface;

use super::install::InstallCommand;
use super::probe::ProbeCommand;

/// Shown when the installer is run without a target flag.
pub fn usage_message() -> String {
    let flags: Vec<&str> = InstallTarget::ALL.iter().map(|t| t.flag()).collect();
    format!(
        "Please specify an installation option. Use {}.",
        flags.join(" or ")
    )
}

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Resolves settings and dispatches to command implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
    runner: Box<dyn CommandRunner>,
}

impl CommandDispatcher {
    /// Create a dispatcher that spawns real processes.
    pub fn new(working_dir: PathBuf) -> Self {
        Self::with_runner(working_dir, Box::new(SystemRunner))
    }

    /// Create a dispatcher with a custom runner.
    pub fn with_runner(working_dir: PathBuf, runner: Box<dyn CommandRunner>) -> Self {
        Self {
            working_dir,
            runner,
        }
    }

    /// Run the installer.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let targets = cli.targets();
        if targets.is_empty() {
            ui.error(&usage_message());
            return Ok(CommandResult::failure(1));
        }

        let settings = self.resolve_settings(
            cli.config.as_deref(),
            Overrides {
                python: cli.python.clone(),
                repos_dir: cli.repos_dir.clone(),
                site_packages: None,
            },
        )?;

        let cmd = InstallCommand::new(settings, targets, self.runner.as_ref());
        cmd.execute(ui)
    }

    /// Run the availability report.
    pub fn dispatch_probe(&self, cli: &ProbeCli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = self.resolve_settings(
            cli.config.as_deref(),
            Overrides {
                python: cli.python.clone(),
                repos_dir: None,
                site_packages: site_packages_from_env(|key| std::env::var_os(key)),
            },
        )?;

        let cmd = ProbeCommand::new(settings, cli.json);
        cmd.execute(ui)
    }

    fn resolve_settings(&self, config: Option<&Path>, overrides: Overrides) -> Result<Settings> {
        let explicit = config.map(|path| self.working_dir.join(path));
        let file = load_config(explicit.as_deref(), &self.working_dir)?;
        let mut settings = Settings::resolve(file, overrides);
        settings.repos_dir = self.working_dir.join(&settings.repos_dir);
        tracing::debug!(?settings, "resolved settings");
        Ok(settings)
    }
}
