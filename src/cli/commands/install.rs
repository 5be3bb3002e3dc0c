//! Install command implementation.
//!
//! `install-quant-libs` builds the selected quantization libraries from
//! source.

use crate::config::Settings;
use crate::error::Result;
use crate::installer::{InstallTarget, SourceInstaller};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand<'a> {
    settings: Settings,
    targets: Vec<InstallTarget>,
    runner: &'a dyn CommandRunner,
}

impl<'a> InstallCommand<'a> {
    /// Create a new install command.
    pub fn new(settings: Settings, targets: Vec<InstallTarget>, runner: &'a dyn CommandRunner) -> Self {
        Self {
            settings,
            targets,
            runner,
        }
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let installer =
            SourceInstaller::new(&self.settings.repos_dir, &self.settings.python, self.runner);
        installer.install_all(&self.targets, ui)?;
        Ok(CommandResult::success())
    }
}
