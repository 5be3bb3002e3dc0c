//! Configuration file discovery and loading.

use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::CONFIG_FILE_NAME;

/// Contents of `benchenv.yml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchConfig {
    /// Python interpreter used for probing and `pip install`.
    #[serde(default)]
    pub python: Option<String>,

    /// Directory checkouts are cloned into.
    #[serde(default)]
    pub repos_dir: Option<PathBuf>,

    /// Explicit module search path for the prober.
    #[serde(default)]
    pub site_packages: Option<Vec<PathBuf>>,
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParse` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<BenchConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BenchError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            BenchError::Io(e)
        }
    })?;

    // An empty file is an empty config, not a parse error.
    if content.trim().is_empty() {
        return Ok(BenchConfig::default());
    }

    serde_yaml::from_str(&content).map_err(|e| BenchError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the explicit config file, or `benchenv.yml` from `dir` if present.
///
/// A missing default file yields an empty config. A missing explicit file
/// is an error.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<BenchConfig> {
    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "loading explicit config");
        return load_config_file(path);
    }

    let default_path = dir.join(CONFIG_FILE_NAME);
    if default_path.is_file() {
        tracing::debug!(path = %default_path.display(), "loading config");
        load_config_file(&default_path)
    } else {
        Ok(BenchConfig::default())
    }
}
