//! Optional package availability probing.
//!
//! Answers "is package X usable" and "what version is installed" for the
//! optional ML/runtime packages a benchmark backend may depend on, without
//! importing anything and without failing when a package is absent.
//!
//! # Modules
//!
//! - [`package`] - The closed set of probed packages
//! - [`site_packages`] - Module and distribution lookup on an import path
//! - [`availability`] - Flags computed once, plus version accessors
//!
//! # Example
//!
//! ```
//! use benchenv::probe::{Availability, Package, ProbeConfig};
//!
//! let config = ProbeConfig {
//!     python: "python3".to_string(),
//!     site_packages: Some(Vec::new()),
//! };
//! let availability = Availability::from_environment(&config);
//! assert!(!availability.is_available(Package::Torch));
//! assert_eq!(availability.runtime_engine_version(), None);
//! ```

pub mod availability;
pub mod package;
pub mod site_packages;

pub use availability::{Availability, PackageReport, ProbeConfig};
pub use package::{Package, RUNTIME_ENGINE_VARIANTS};
pub use site_packages::{normalize_name, MetadataRegistry, ModuleResolver, SitePackages};
