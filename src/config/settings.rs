//! Resolution of the effective settings from all layers.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::probe::ProbeConfig;

use super::{BenchConfig, DEFAULT_PYTHON, DEFAULT_REPOS_DIR, SITE_PACKAGES_ENV};

/// Values from the environment and command line. `None` defers to the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub python: Option<String>,
    pub repos_dir: Option<PathBuf>,
    pub site_packages: Option<Vec<PathBuf>>,
}

/// Effective settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Interpreter for probing and `pip install`.
    pub python: String,
    /// Base directory for checkouts.
    pub repos_dir: PathBuf,
    /// Explicit module search path, if any.
    pub site_packages: Option<Vec<PathBuf>>,
}

impl Settings {
    /// Merge defaults, the config file and overrides.
    pub fn resolve(file: BenchConfig, overrides: Overrides) -> Self {
        Self {
            python: overrides
                .python
                .or(file.python)
                .unwrap_or_else(|| DEFAULT_PYTHON.to_string()),
            repos_dir: overrides
                .repos_dir
                .or(file.repos_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REPOS_DIR)),
            site_packages: overrides.site_packages.or(file.site_packages),
        }
    }

    /// Prober configuration derived from these settings.
    pub fn probe_config(&self) -> ProbeConfig {
        ProbeConfig {
            python: self.python.clone(),
            site_packages: self.site_packages.clone(),
        }
    }
}

/// Read the explicit search path from `BENCHENV_SITE_PACKAGES`.
///
/// Takes the lookup function so tests don't touch the process environment.
/// An unset or empty variable yields `None`.
pub fn site_packages_from_env<F>(env_fn: F) -> Option<Vec<PathBuf>>
where
    F: Fn(&str) -> Option<OsString>,
{
    let value = env_fn(SITE_PACKAGES_ENV)?;
    if value.is_empty() {
        return None;
    }
    Some(
        std::env::split_paths(&value)
            .filter(|p| !p.as_os_str().is_empty())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_set() {
        let settings = Settings::resolve(BenchConfig::default(), Overrides::default());
        assert_eq!(settings.python, "python3");
        assert_eq!(settings.repos_dir, PathBuf::from("external_repos"));
        assert_eq!(settings.site_packages, None);
    }

    #[test]
    fn file_overrides_defaults() {
        let file = BenchConfig {
            python: Some("/venv/bin/python".to_string()),
            repos_dir: Some(PathBuf::from("/srv/repos")),
            site_packages: None,
        };
        let settings = Settings::resolve(file, Overrides::default());
        assert_eq!(settings.python, "/venv/bin/python");
        assert_eq!(settings.repos_dir, PathBuf::from("/srv/repos"));
    }

    #[test]
    fn overrides_win_over_file() {
        let file = BenchConfig {
            python: Some("file-python".to_string()),
            repos_dir: Some(PathBuf::from("file-repos")),
            site_packages: Some(vec![PathBuf::from("/file/site")]),
        };
        let overrides = Overrides {
            python: Some("flag-python".to_string()),
            repos_dir: None,
            site_packages: Some(vec![PathBuf::from("/env/site")]),
        };
        let settings = Settings::resolve(file, overrides);
        assert_eq!(settings.python, "flag-python");
        assert_eq!(settings.repos_dir, PathBuf::from("file-repos"));
        assert_eq!(settings.site_packages, Some(vec![PathBuf::from("/env/site")]));
    }

    #[test]
    fn probe_config_carries_python_and_path() {
        let settings = Settings {
            python: "py".to_string(),
            repos_dir: PathBuf::from("r"),
            site_packages: Some(vec![PathBuf::from("/s")]),
        };
        let probe = settings.probe_config();
        assert_eq!(probe.python, "py");
        assert_eq!(probe.site_packages, Some(vec![PathBuf::from("/s")]));
    }

    #[test]
    fn site_packages_env_splits_path_list() {
        let joined = std::env::join_paths(["/a/site-packages", "/b/site-packages"]).unwrap();
        let paths = site_packages_from_env(|key| {
            (key == "BENCHENV_SITE_PACKAGES").then(|| joined.clone())
        });
        assert_eq!(
            paths,
            Some(vec![
                PathBuf::from("/a/site-packages"),
                PathBuf::from("/b/site-packages"),
            ])
        );
    }

    #[test]
    fn site_packages_env_unset_or_empty_is_none() {
        assert_eq!(site_packages_from_env(|_| None), None);
        assert_eq!(site_packages_from_env(|_| Some(OsString::new())), None);
    }
}
