//! Install targets selectable from the command line.

use std::fmt;

use super::repo::{RepoSource, AUTOAWQ, AUTOAWQ_KERNELS, AUTOGPTQ};

/// A library (or library pair) built from source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstallTarget {
    /// AutoAWQ plus its kernel extension.
    AutoAwq,
    /// AutoGPTQ.
    AutoGptq,
}

impl InstallTarget {
    /// Every target, in the order they run when several are selected.
    pub const ALL: [InstallTarget; 2] = [InstallTarget::AutoAwq, InstallTarget::AutoGptq];

    /// Repositories to install, dependencies first.
    pub fn repos(self) -> &'static [RepoSource] {
        match self {
            InstallTarget::AutoAwq => &[AUTOAWQ_KERNELS, AUTOAWQ],
            InstallTarget::AutoGptq => &[AUTOGPTQ],
        }
    }

    /// Human-readable subject used in progress messages.
    pub fn description(self) -> &'static str {
        match self {
            InstallTarget::AutoAwq => "AutoAWQ and AutoAWQ_kernels packages",
            InstallTarget::AutoGptq => "AutoGPTQ package",
        }
    }

    /// Command-line flag that selects this target.
    pub fn flag(self) -> &'static str {
        match self {
            InstallTarget::AutoAwq => "--install-autoawq-from-source",
            InstallTarget::AutoGptq => "--install-autogptq-from-source",
        }
    }
}

impl fmt::Display for InstallTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallTarget::AutoAwq => f.write_str("AutoAWQ"),
            InstallTarget::AutoGptq => f.write_str("AutoGPTQ"),
        }
    }
}
