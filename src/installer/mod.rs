//! From-source installs of quantization libraries.
//!
//! Prebuilt wheels of AutoAWQ and AutoGPTQ pin torch and may be CPU-only.
//! The installer builds them from upstream sources instead: for every
//! repository of a target it syncs the checkout, patches `setup.py`, and runs
//! `pip install .` in the checkout. Everything is sequential and the first
//! failure aborts the run, leaving the checkout as it is.
//!
//! # Modules
//!
//! - [`repo`] - Fixed upstream repositories and their local checkouts
//! - [`sync`] - Clone-or-pull of a checkout
//! - [`patch`] - `setup.py` rewriting
//! - [`target`] - Targets selectable from the command line
//!
//! # Example
//!
//! ```
//! use benchenv::installer::{InstallTarget, SourceInstaller};
//! use benchenv::shell::MockRunner;
//! use benchenv::ui::MockUI;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let runner = MockRunner::new().with_clone_contents("IS_CPU_ONLY = True\n");
//! let installer = SourceInstaller::new(temp.path(), "python3", &runner);
//!
//! let mut ui = MockUI::new();
//! installer.install(InstallTarget::AutoGptq, &mut ui).unwrap();
//! assert!(ui.has_success("AutoGPTQ package installed."));
//! ```

pub mod patch;
pub mod repo;
pub mod sync;
pub mod target;

pub use patch::{apply_patch, patch_build_descriptor, CPU_ONLY_DETECTION, CPU_ONLY_FORCED};
pub use repo::{RepoDescriptor, RepoSource, BUILD_DESCRIPTOR};
pub use sync::{sync_repo, SyncAction};
pub use target::InstallTarget;

use std::path::PathBuf;

use crate::error::Result;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

/// Runs the install procedure for one or more targets.
pub struct SourceInstaller<'a> {
    repos_dir: PathBuf,
    python: String,
    runner: &'a dyn CommandRunner,
}

impl<'a> SourceInstaller<'a> {
    /// Create an installer placing checkouts under `repos_dir` and building
    /// with `python -m pip`.
    pub fn new(repos_dir: impl Into<PathBuf>, python: &str, runner: &'a dyn CommandRunner) -> Self {
        Self {
            repos_dir: repos_dir.into(),
            python: python.to_string(),
            runner,
        }
    }

    /// Resolve a fixed repository against the base directory.
    pub fn resolve(&self, source: &RepoSource) -> RepoDescriptor {
        RepoDescriptor::from_source(source, &self.repos_dir)
    }

    /// Install every target in `targets`, stopping at the first failure.
    pub fn install_all(&self, targets: &[InstallTarget], ui: &mut dyn UserInterface) -> Result<()> {
        for target in targets {
            self.install(*target, ui)?;
        }
        Ok(())
    }

    /// Install one target. Its repositories are processed strictly in order,
    /// each fully installed before the next is synced.
    pub fn install(&self, target: InstallTarget, ui: &mut dyn UserInterface) -> Result<()> {
        tracing::info!(%target, "installing from source");
        ui.message(&format!("Installing {}.", target.description()));

        for source in target.repos() {
            self.install_repo(source, ui)?;
        }

        ui.success(&format!("{} installed.", target.description()));
        Ok(())
    }

    fn install_repo(&self, source: &RepoSource, ui: &mut dyn UserInterface) -> Result<()> {
        let repo = self.resolve(source);
        ui.show_step(&repo.name, &repo.path.display().to_string());

        let action = sync_repo(&repo, self.runner, ui)?;
        tracing::debug!(repo = %repo.name, ?action, "synced");

        if !source.helper_packages.is_empty() {
            ui.message(&format!(
                "Installing helper packages: {}",
                source.helper_packages.join(", ")
            ));
            let mut args = vec!["-m", "pip", "install"];
            args.extend_from_slice(source.helper_packages);
            self.runner.run(&self.python, &args, None)?;
        }

        patch_build_descriptor(&repo.build_descriptor())?;

        ui.message(&format!(
            "Building and installing {} from {}",
            repo.name,
            repo.path.display()
        ));
        self.runner
            .run(&self.python, &["-m", "pip", "install", "."], Some(&repo.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenchError;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const SETUP_PY: &str = "IS_CPU_ONLY = not torch.backends.mps.is_available() and not torch.cuda.is_available()\nrequirements = [\n    \"torch==2.1.2\",\n    \"numpy\",\n]\n";

    fn rendered_with_cwd(runner: &MockRunner) -> Vec<(String, Option<PathBuf>)> {
        runner
            .calls()
            .into_iter()
            .map(|c| (c.rendered(), c.cwd.clone()))
            .collect()
    }

    #[test]
    fn autoawq_installs_kernels_before_main_library() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new().with_clone_contents(SETUP_PY);
        let installer = SourceInstaller::new(temp.path(), "python3", &runner);
        let mut ui = MockUI::new();

        installer.install(InstallTarget::AutoAwq, &mut ui).unwrap();

        let kernels = temp.path().join("AutoAWQ_kernels");
        let main = temp.path().join("AutoAWQ");
        assert_eq!(
            rendered_with_cwd(&runner),
            vec![
                (
                    format!(
                        "git clone https://github.com/casper-hansen/AutoAWQ_kernels {}",
                        kernels.display()
                    ),
                    None
                ),
                ("python3 -m pip install .".to_string(), Some(kernels.clone())),
                (
                    format!(
                        "git clone https://github.com/casper-hansen/AutoAWQ {}",
                        main.display()
                    ),
                    None
                ),
                ("python3 -m pip install .".to_string(), Some(main.clone())),
            ]
        );
        assert!(ui.has_message("Installing AutoAWQ and AutoAWQ_kernels packages."));
        assert!(ui.has_success("AutoAWQ and AutoAWQ_kernels packages installed."));
    }

    #[test]
    fn autogptq_installs_helpers_before_building() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new().with_clone_contents(SETUP_PY);
        let installer = SourceInstaller::new(temp.path(), "/venv/bin/python", &runner);
        let mut ui = MockUI::new();

        installer.install(InstallTarget::AutoGptq, &mut ui).unwrap();

        let rendered = runner.rendered();
        assert_eq!(rendered.len(), 3);
        assert!(rendered[0].starts_with("git clone https://github.com/PanQiWei/AutoGPTQ.git"));
        assert_eq!(rendered[1], "/venv/bin/python -m pip install numpy gekko pandas");
        assert_eq!(rendered[2], "/venv/bin/python -m pip install .");
    }

    #[test]
    fn checkout_setup_py_is_patched_before_build() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new().with_clone_contents(SETUP_PY);
        let installer = SourceInstaller::new(temp.path(), "python3", &runner);

        installer
            .install(InstallTarget::AutoGptq, &mut MockUI::new())
            .unwrap();

        let patched = fs::read_to_string(temp.path().join("AutoGPTQ/setup.py")).unwrap();
        assert_eq!(patched, "IS_CPU_ONLY = False\nrequirements = [\n    \"numpy\",\n]\n");
    }

    #[test]
    fn existing_checkout_is_pulled_and_built_in_same_path() {
        let temp = TempDir::new().unwrap();
        let checkout = temp.path().join("AutoGPTQ");
        fs::create_dir_all(&checkout).unwrap();
        fs::write(checkout.join("setup.py"), SETUP_PY).unwrap();
        let runner = MockRunner::new();
        let installer = SourceInstaller::new(temp.path(), "python3", &runner);

        installer
            .install(InstallTarget::AutoGptq, &mut MockUI::new())
            .unwrap();

        let calls = runner.calls();
        assert_eq!(calls[0].rendered(), "git pull");
        assert_eq!(calls[0].cwd.as_deref(), Some(checkout.as_path()));
        assert_eq!(calls[2].cwd.as_deref(), Some(checkout.as_path()));
    }

    #[test]
    fn install_all_runs_both_targets_in_order() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new().with_clone_contents(SETUP_PY);
        let installer = SourceInstaller::new(temp.path(), "python3", &runner);
        let mut ui = MockUI::new();

        installer
            .install_all(&InstallTarget::ALL, &mut ui)
            .unwrap();

        let clones: Vec<String> = runner
            .rendered()
            .into_iter()
            .filter(|c| c.starts_with("git clone"))
            .collect();
        assert_eq!(clones.len(), 3);
        assert!(clones[0].contains("AutoAWQ_kernels"));
        assert!(clones[1].contains("/AutoAWQ "));
        assert!(clones[2].contains("AutoGPTQ"));
        assert_eq!(ui.successes().len(), 2);
    }

    #[test]
    fn build_failure_stops_before_main_library() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new()
            .with_clone_contents(SETUP_PY)
            .fail_on("pip install .");
        let installer = SourceInstaller::new(temp.path(), "python3", &runner);
        let mut ui = MockUI::new();

        let err = installer
            .install_all(&InstallTarget::ALL, &mut ui)
            .unwrap_err();

        assert!(matches!(err, BenchError::CommandFailed { code: Some(1), .. }));
        assert_eq!(runner.calls().len(), 2);
        assert!(!temp.path().join("AutoAWQ").exists());
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn missing_setup_py_aborts_without_building() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("AutoGPTQ")).unwrap();
        let runner = MockRunner::new();
        let installer = SourceInstaller::new(temp.path(), "python3", &runner);

        let err = installer
            .install(InstallTarget::AutoGptq, &mut MockUI::new())
            .unwrap_err();

        assert!(matches!(err, BenchError::BuildDescriptor { .. }));
        assert!(!runner
            .rendered()
            .iter()
            .any(|c| c.ends_with("pip install .")));
    }
}
