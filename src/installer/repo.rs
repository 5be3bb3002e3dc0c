//! Repository descriptors.

use std::path::{Path, PathBuf};

/// Build descriptor file patched in every checkout.
pub const BUILD_DESCRIPTOR: &str = "setup.py";

/// A fixed upstream repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepoSource {
    /// Repository (and checkout directory) name.
    pub name: &'static str,
    /// Clone URL.
    pub url: &'static str,
    /// Packages `pip install`ed by name after syncing, before patching.
    pub helper_packages: &'static [&'static str],
}

pub const AUTOAWQ_KERNELS: RepoSource = RepoSource {
    name: "AutoAWQ_kernels",
    url: "https://github.com/casper-hansen/AutoAWQ_kernels",
    helper_packages: &[],
};

pub const AUTOAWQ: RepoSource = RepoSource {
    name: "AutoAWQ",
    url: "https://github.com/casper-hansen/AutoAWQ",
    helper_packages: &[],
};

pub const AUTOGPTQ: RepoSource = RepoSource {
    name: "AutoGPTQ",
    url: "https://github.com/PanQiWei/AutoGPTQ.git",
    helper_packages: &["numpy", "gekko", "pandas"],
};

/// One repository resolved against a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoDescriptor {
    pub name: String,
    pub url: String,
    /// Local checkout: `<repos_dir>/<name>`.
    pub path: PathBuf,
}

impl RepoDescriptor {
    pub fn new(name: &str, url: &str, repos_dir: &Path) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            path: repos_dir.join(name),
        }
    }

    /// Resolve a fixed source under `repos_dir`.
    pub fn from_source(source: &RepoSource, repos_dir: &Path) -> Self {
        Self::new(source.name, source.url, repos_dir)
    }

    /// Path of the checkout's `setup.py`.
    pub fn build_descriptor(&self) -> PathBuf {
        self.path.join(BUILD_DESCRIPTOR)
    }
}
