//! Availability flags and version accessors.
//!
//! [`Availability::detect`] is the one place flags are computed. The result
//! is immutable and meant to be built once at startup and passed by
//! reference.

use std::path::PathBuf;

use serde::Serialize;

use super::package::{Package, RUNTIME_ENGINE_VARIANTS};
use super::site_packages::{MetadataRegistry, ModuleResolver, SitePackages};

/// Where to look for the Python environment being probed.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Interpreter queried for its module search path.
    pub python: String,
    /// Explicit search path; skips the interpreter query when set.
    pub site_packages: Option<Vec<PathBuf>>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            python: crate::config::DEFAULT_PYTHON.to_string(),
            site_packages: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Entry {
    available: bool,
    version: Option<String>,
}

/// One row of the availability report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageReport {
    /// Package (import) name.
    pub package: &'static str,
    /// Whether the package is importable.
    pub available: bool,
    /// Reported version, if any.
    pub version: Option<String>,
}

/// Snapshot of which optional packages are usable and at what version.
#[derive(Debug, Clone)]
pub struct Availability {
    entries: [Entry; Package::ALL.len()],
    runtime_engine: Option<String>,
}

impl Availability {
    /// Compute every flag once from the given collaborators.
    ///
    /// Versions are only looked up for packages whose module is present.
    /// The runtime engine is looked up across its distribution variants
    /// regardless of its flag.
    pub fn detect(resolver: &dyn ModuleResolver, registry: &dyn MetadataRegistry) -> Self {
        let mut entries: [Entry; Package::ALL.len()] = Default::default();

        for package in Package::ALL {
            let available = resolver.has_module(package.module_name());
            let version = if available && package != Package::OnnxRuntime {
                registry.version(package.distribution_name())
            } else {
                None
            };

            tracing::debug!(%package, available, version = ?version, "probed package");
            entries[package.index()] = Entry { available, version };
        }

        Self {
            entries,
            runtime_engine: probe_runtime_engine(registry),
        }
    }

    /// Probe the Python environment described by `config`.
    pub fn from_environment(config: &ProbeConfig) -> Self {
        let site = match &config.site_packages {
            Some(paths) => SitePackages::new(paths.clone()),
            None => SitePackages::from_interpreter(&config.python),
        };
        Self::detect(&site, &site)
    }

    /// Whether `package` can be imported.
    pub fn is_available(&self, package: Package) -> bool {
        self.entries[package.index()].available
    }

    /// Installed version of `package`, or `None` when it is unavailable.
    ///
    /// The runtime engine reports a variant-labelled version, see
    /// [`Availability::runtime_engine_version`].
    pub fn version(&self, package: Package) -> Option<&str> {
        if !self.is_available(package) {
            return None;
        }
        if package == Package::OnnxRuntime {
            return self.runtime_engine_version();
        }
        self.entries[package.index()].version.as_deref()
    }

    /// Runtime engine version as `ort:<v>`, `ort-gpu:<v>` or
    /// `ort-training:<v>`, whichever distribution is registered first in
    /// that order.
    pub fn runtime_engine_version(&self) -> Option<&str> {
        self.runtime_engine.as_deref()
    }

    pub fn is_torch_available(&self) -> bool {
        self.is_available(Package::Torch)
    }

    pub fn torch_version(&self) -> Option<&str> {
        self.version(Package::Torch)
    }

    pub fn optimum_version(&self) -> Option<&str> {
        self.version(Package::Optimum)
    }

    pub fn transformers_version(&self) -> Option<&str> {
        self.version(Package::Transformers)
    }

    pub fn accelerate_version(&self) -> Option<&str> {
        self.version(Package::Accelerate)
    }

    pub fn diffusers_version(&self) -> Option<&str> {
        self.version(Package::Diffusers)
    }

    pub fn openvino_version(&self) -> Option<&str> {
        self.version(Package::OpenVino)
    }

    pub fn neural_compressor_version(&self) -> Option<&str> {
        self.version(Package::NeuralCompressor)
    }

    /// One row per package in [`Package::ALL`] order.
    pub fn report(&self) -> Vec<PackageReport> {
        Package::ALL
            .into_iter()
            .map(|package| PackageReport {
                package: package.module_name(),
                available: self.is_available(package),
                version: self.version(package).map(str::to_string),
            })
            .collect()
    }
}

fn probe_runtime_engine(registry: &dyn MetadataRegistry) -> Option<String> {
    RUNTIME_ENGINE_VARIANTS
        .iter()
        .find_map(|(distribution, label)| {
            // A miss just means this variant isn't the installed one.
            registry
                .version(distribution)
                .map(|v| format!("{label}:{v}"))
        })
}
