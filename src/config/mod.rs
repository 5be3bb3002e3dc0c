//! Configuration loading and resolution.
//!
//! Settings are layered, later layers winning:
//! 1. Built-in defaults (`python3`, `external_repos`)
//! 2. `benchenv.yml` in the working directory, or the file given with `--config`
//! 3. Environment variables and command-line flags
//!
//! # Example
//!
//! ```
//! use benchenv::config::{load_config, Overrides, Settings};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("benchenv.yml"), "python: /opt/venv/bin/python").unwrap();
//!
//! let file = load_config(None, temp.path()).unwrap();
//! let settings = Settings::resolve(file, Overrides::default());
//! assert_eq!(settings.python, "/opt/venv/bin/python");
//! assert_eq!(settings.repos_dir, std::path::PathBuf::from("external_repos"));
//! ```

pub mod loader;
pub mod settings;

pub use loader::{load_config, load_config_file, BenchConfig};
pub use settings::{site_packages_from_env, Overrides, Settings};

/// Interpreter used when nothing else is configured.
pub const DEFAULT_PYTHON: &str = "python3";

/// Directory checkouts are placed under, relative to the working directory.
pub const DEFAULT_REPOS_DIR: &str = "external_repos";

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "benchenv.yml";

/// Path-list variable that replaces the interpreter's module search path.
pub const SITE_PACKAGES_ENV: &str = "BENCHENV_SITE_PACKAGES";
