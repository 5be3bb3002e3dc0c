//! CLI argument definitions.
//!
//! [`Cli`] is the installer (`install-quant-libs`); [`ProbeCli`] is the
//! availability report (`benchenv-probe`).

use clap::Parser;
use std::path::PathBuf;

use crate::installer::InstallTarget;
use crate::ui::OutputMode;

/// Build quantization libraries from source against the installed torch.
#[derive(Debug, Parser)]
#[command(name = "install-quant-libs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Install AutoAWQ and AutoAWQ_kernels packages from source
    #[arg(long)]
    pub install_autoawq_from_source: bool,

    /// Install AutoGPTQ package from source
    #[arg(long)]
    pub install_autogptq_from_source: bool,

    /// Directory checkouts are placed under
    #[arg(long, env = "BENCHENV_REPOS_DIR", value_name = "DIR")]
    pub repos_dir: Option<PathBuf>,

    /// Python interpreter used for pip
    #[arg(long, env = "BENCHENV_PYTHON", value_name = "PATH")]
    pub python: Option<String>,

    /// Path to config file (overrides ./benchenv.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Selected targets, in run order.
    pub fn targets(&self) -> Vec<InstallTarget> {
        InstallTarget::ALL
            .into_iter()
            .filter(|target| match target {
                InstallTarget::AutoAwq => self.install_autoawq_from_source,
                InstallTarget::AutoGptq => self.install_autogptq_from_source,
            })
            .collect()
    }

    /// Output mode implied by `--quiet` / `--verbose`.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }
}

/// Report which ML packages the target interpreter can import.
#[derive(Debug, Parser)]
#[command(name = "benchenv-probe")]
#[command(author, version, about, long_about = None)]
pub struct ProbeCli {
    /// Python interpreter whose environment is inspected
    #[arg(long, env = "BENCHENV_PYTHON", value_name = "PATH")]
    pub python: Option<String>,

    /// Path to config file (overrides ./benchenv.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
