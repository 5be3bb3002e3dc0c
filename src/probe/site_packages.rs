//! Read-only view of a Python environment's import path.
//!
//! The prober never imports anything. When an interpreter is available it is
//! asked once for its `sys.path` and for `importlib.util.find_spec` answers
//! on the probed modules, so meta-path finders (editable installs) are
//! honored. With an explicit search path, module presence falls back to
//! looking for a package directory or module file. Versions always come from
//! the installed-distribution records (`*.dist-info/METADATA`,
//! `*.egg-info/PKG-INFO`) found on the search path.
//!
//! # Example
//!
//! ```no_run
//! use benchenv::probe::{MetadataRegistry, ModuleResolver, SitePackages};
//!
//! let site = SitePackages::from_interpreter("python3");
//! if site.has_module("torch") {
//!     println!("torch {:?}", site.version("torch"));
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{BenchError, Result};
use crate::shell::execute_quiet;

use super::package::Package;

static NAME_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_.]+").unwrap());

/// Answers whether a top-level module could be imported.
pub trait ModuleResolver {
    /// Whether `module` is importable, without executing it.
    fn has_module(&self, module: &str) -> bool;
}

/// Looks up installed distribution versions.
pub trait MetadataRegistry {
    /// Installed version of `distribution`, or `None` when it is not
    /// registered. Names are matched after normalization.
    fn version(&self, distribution: &str) -> Option<String>;
}

/// What a single interpreter query reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterpreterReport {
    /// `sys.path`, without the empty (current directory) entry.
    pub search_path: Vec<PathBuf>,
    /// Module -> whether `find_spec` resolved it.
    pub importable: HashMap<String, bool>,
}

/// Module search path plus an index of the distributions installed on it.
#[derive(Debug, Clone, Default)]
pub struct SitePackages {
    search_path: Vec<PathBuf>,
    /// Normalized distribution name -> version. First entry on the path wins.
    distributions: HashMap<String, String>,
    /// Interpreter answers; modules missing here are looked up on disk.
    importable: HashMap<String, bool>,
}

impl SitePackages {
    /// Index the given search path directories.
    ///
    /// Entries that are not readable directories (zip archives, missing
    /// paths) are kept in the path but contribute nothing.
    pub fn new(search_path: Vec<PathBuf>) -> Self {
        let mut distributions = HashMap::new();
        for dir in &search_path {
            index_distributions(dir, &mut distributions);
        }

        tracing::debug!(
            entries = search_path.len(),
            distributions = distributions.len(),
            "indexed site packages"
        );

        Self {
            search_path,
            distributions,
            importable: HashMap::new(),
        }
    }

    /// Index a reported search path and keep its module answers.
    pub fn from_report(report: InterpreterReport) -> Self {
        Self {
            importable: report.importable,
            ..Self::new(report.search_path)
        }
    }

    /// Query `python` once for its search path and module resolution.
    ///
    /// If the interpreter cannot be run the result is empty, so every
    /// package reads as absent.
    pub fn from_interpreter(python: &str) -> Self {
        let modules: Vec<&str> = Package::ALL.iter().map(|p| p.module_name()).collect();
        match query_interpreter(python, &modules) {
            Ok(report) => Self::from_report(report),
            Err(e) => {
                tracing::warn!("Could not query {} for its module path: {}", python, e);
                Self::default()
            }
        }
    }

    /// Directories searched, in interpreter order.
    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    /// Number of distinct distributions found.
    pub fn distribution_count(&self) -> usize {
        self.distributions.len()
    }
}

impl ModuleResolver for SitePackages {
    fn has_module(&self, module: &str) -> bool {
        if let Some(found) = self.importable.get(module) {
            return *found;
        }
        self.search_path
            .iter()
            .any(|dir| module_in_dir(dir, module))
    }
}

impl MetadataRegistry for SitePackages {
    fn version(&self, distribution: &str) -> Option<String> {
        self.distributions
            .get(&normalize_name(distribution))
            .cloned()
    }
}

/// Python source printing `path\t<entry>` and `spec\t<module>\t<bool>` lines.
fn query_script(modules: &[&str]) -> String {
    let list = modules
        .iter()
        .map(|m| format!("'{m}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "import importlib.util, sys
for p in sys.path:
    print('path\\t' + p)
for m in [{list}]:
    try:
        found = importlib.util.find_spec(m) is not None
    except Exception:
        found = False
    print('spec\\t' + m + '\\t' + str(found))
"
    )
}

/// Run the interpreter once and parse its report on `modules`.
pub fn query_interpreter(python: &str, modules: &[&str]) -> Result<InterpreterReport> {
    let script = query_script(modules);
    let args = ["-c", script.as_str()];
    let result = execute_quiet(python, &args, None)?;
    if !result.success {
        tracing::debug!(stderr = %result.stderr.trim(), "interpreter query failed");
        return Err(BenchError::CommandFailed {
            command: format!("{python} -c <module query>"),
            code: result.exit_code,
        });
    }
    Ok(parse_interpreter_report(&result.stdout))
}

/// Parse the output of the interpreter query.
///
/// The empty search path entry (the current directory) is dropped. Lines
/// that match neither record kind are ignored.
pub fn parse_interpreter_report(output: &str) -> InterpreterReport {
    let mut report = InterpreterReport::default();

    for line in output.lines().map(|l| l.trim_end_matches('\r')) {
        match line.split_once('\t') {
            Some(("path", entry)) if !entry.trim().is_empty() => {
                report.search_path.push(PathBuf::from(entry));
            }
            Some(("spec", rest)) => {
                if let Some((module, found)) = rest.split_once('\t') {
                    report
                        .importable
                        .insert(module.to_string(), found == "True");
                }
            }
            _ => {}
        }
    }

    report
}

/// Normalize a distribution name: lowercase, with runs of `-`, `_` and `.`
/// collapsed to a single `-`.
pub fn normalize_name(name: &str) -> String {
    NAME_SEPARATORS
        .replace_all(name.trim(), "-")
        .to_lowercase()
}

/// Extract `(Name, Version)` from core metadata headers.
///
/// Only the header block before the first blank line is read.
pub fn parse_metadata(text: &str) -> Option<(String, String)> {
    let mut name = None;
    let mut version = None;

    for line in text.lines() {
        if line.trim().is_empty() {
            break;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if key.eq_ignore_ascii_case("name") && name.is_none() {
            name = Some(value.to_string());
        } else if key.eq_ignore_ascii_case("version") && version.is_none() {
            version = Some(value.to_string());
        }
    }

    match (name, version) {
        (Some(n), Some(v)) if !n.is_empty() && !v.is_empty() => Some((n, v)),
        _ => None,
    }
}

fn module_in_dir(dir: &Path, module: &str) -> bool {
    if dir.join(module).is_dir() {
        return true;
    }
    if dir.join(format!("{module}.py")).is_file() || dir.join(format!("{module}.pyc")).is_file() {
        return true;
    }

    // Extension modules: foo.so, foo.pyd, foo.cpython-311-x86_64-linux-gnu.so
    let Ok(entries) = fs::read_dir(dir) else {
        return false;
    };
    let prefix = format!("{module}.");
    entries.filter_map(|e| e.ok()).any(|entry| {
        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        file_name.starts_with(&prefix)
            && (file_name.ends_with(".so") || file_name.ends_with(".pyd"))
            && entry.path().is_file()
    })
}

fn index_distributions(dir: &Path, index: &mut HashMap<String, String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    let mut records: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .is_some_and(|ext| ext == "dist-info" || ext == "egg-info")
        })
        .collect();
    // read_dir order is unspecified; keep duplicate resolution stable.
    records.sort();

    for record in records {
        let metadata_file = if record.is_dir() {
            if record.extension().is_some_and(|ext| ext == "dist-info") {
                record.join("METADATA")
            } else {
                record.join("PKG-INFO")
            }
        } else {
            record.clone()
        };

        let Ok(text) = fs::read_to_string(&metadata_file) else {
            tracing::debug!(path = %metadata_file.display(), "unreadable metadata");
            continue;
        };

        if let Some((name, version)) = parse_metadata(&text) {
            index.entry(normalize_name(&name)).or_insert(version);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_dist_info(site: &Path, dir_name: &str, name: &str, version: &str) {
        let dist = site.join(dir_name);
        fs::create_dir_all(&dist).unwrap();
        fs::write(
            dist.join("METADATA"),
            format!("Metadata-Version: 2.1\nName: {name}\nVersion: {version}\nSummary: x\n\nbody"),
        )
        .unwrap();
    }

    #[test]
    fn normalize_name_collapses_separators() {
        assert_eq!(normalize_name("neural_compressor"), "neural-compressor");
        assert_eq!(normalize_name("Neural.Compressor"), "neural-compressor");
        assert_eq!(normalize_name("onnxruntime__-gpu"), "onnxruntime-gpu");
        assert_eq!(normalize_name("Torch"), "torch");
    }

    #[test]
    fn parse_metadata_reads_headers_only() {
        let text = "Metadata-Version: 2.1\nName: torch\nVersion: 2.1.0+cu121\n\nName: not-this\n";
        assert_eq!(
            parse_metadata(text),
            Some(("torch".to_string(), "2.1.0+cu121".to_string()))
        );
    }

    #[test]
    fn parse_metadata_requires_name_and_version() {
        assert_eq!(parse_metadata("Name: torch\n"), None);
        assert_eq!(parse_metadata("Version: 1.0\n"), None);
        assert_eq!(parse_metadata(""), None);
    }

    #[test]
    fn interpreter_report_parses_paths_and_answers() {
        let out = "path\t\npath\t/usr/lib/python311.zip\r\npath\t/venv/site-packages\nspec\ttorch\tTrue\nspec\tdiffusers\tFalse\nnoise\n";
        let report = parse_interpreter_report(out);

        assert_eq!(
            report.search_path,
            vec![
                PathBuf::from("/usr/lib/python311.zip"),
                PathBuf::from("/venv/site-packages"),
            ]
        );
        assert_eq!(report.importable.get("torch"), Some(&true));
        assert_eq!(report.importable.get("diffusers"), Some(&false));
        assert_eq!(report.importable.len(), 2);
    }

    #[test]
    fn query_script_lists_every_module() {
        let script = query_script(&["torch", "neural_compressor"]);
        assert!(script.contains("for m in ['torch', 'neural_compressor']:"));
        assert!(script.contains("importlib.util.find_spec(m)"));
    }

    #[test]
    fn interpreter_answers_override_directory_scan() {
        let temp = TempDir::new().unwrap();
        // Finder-based editable install: metadata but no package directory.
        write_dist_info(
            temp.path(),
            "transformers-4.40.0.dist-info",
            "transformers",
            "4.40.0",
        );
        fs::write(
            temp.path().join("__editable___transformers_4_40_0_finder.py"),
            "",
        )
        .unwrap();
        // Directory present but the interpreter cannot resolve it.
        fs::create_dir_all(temp.path().join("diffusers")).unwrap();

        let mut importable = HashMap::new();
        importable.insert("transformers".to_string(), true);
        importable.insert("diffusers".to_string(), false);
        let site = SitePackages::from_report(InterpreterReport {
            search_path: vec![temp.path().to_path_buf()],
            importable,
        });

        assert!(site.has_module("transformers"));
        assert!(!site.has_module("diffusers"));
        assert_eq!(site.version("transformers"), Some("4.40.0".to_string()));
    }

    #[test]
    fn unanswered_module_falls_back_to_directory_scan() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("openvino")).unwrap();

        let site = SitePackages::from_report(InterpreterReport {
            search_path: vec![temp.path().to_path_buf()],
            importable: HashMap::new(),
        });
        assert!(site.has_module("openvino"));
    }

    #[cfg(unix)]
    #[test]
    fn from_interpreter_uses_find_spec_answers() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let site = temp.path().join("site-packages");
        fs::create_dir_all(&site).unwrap();
        write_dist_info(&site, "transformers-4.40.0.dist-info", "transformers", "4.40.0");

        let python = temp.path().join("python");
        fs::write(
            &python,
            format!(
                "#!/bin/sh\nprintf 'path\\t%s\\n' '{}'\nprintf 'spec\\ttransformers\\tTrue\\n'\nprintf 'spec\\ttorch\\tFalse\\n'\n",
                site.display()
            ),
        )
        .unwrap();
        fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();

        let view = SitePackages::from_interpreter(python.to_str().unwrap());

        assert_eq!(view.search_path(), [site]);
        assert!(view.has_module("transformers"));
        assert!(!view.has_module("torch"));
        assert_eq!(view.version("transformers"), Some("4.40.0".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn failing_interpreter_is_command_failed() {
        let err = query_interpreter("false", &["torch"]).unwrap_err();
        assert!(matches!(err, BenchError::CommandFailed { code: Some(1), .. }));
    }

    #[test]
    fn finds_package_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("torch")).unwrap();
        fs::write(temp.path().join("torch/__init__.py"), "").unwrap();

        let site = SitePackages::new(vec![temp.path().to_path_buf()]);
        assert!(site.has_module("torch"));
        assert!(!site.has_module("diffusers"));
    }

    #[test]
    fn namespace_package_without_init_counts() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("optimum/exporters")).unwrap();

        let site = SitePackages::new(vec![temp.path().to_path_buf()]);
        assert!(site.has_module("optimum"));
    }

    #[test]
    fn finds_single_file_and_extension_modules() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("six.py"), "").unwrap();
        fs::write(
            temp.path().join("fastmod.cpython-311-x86_64-linux-gnu.so"),
            "",
        )
        .unwrap();
        fs::write(temp.path().join("winmod.pyd"), "").unwrap();

        let site = SitePackages::new(vec![temp.path().to_path_buf()]);
        assert!(site.has_module("six"));
        assert!(site.has_module("fastmod"));
        assert!(site.has_module("winmod"));
        assert!(!site.has_module("fast"));
    }

    #[test]
    fn dist_info_metadata_answers_versions() {
        let temp = TempDir::new().unwrap();
        write_dist_info(
            temp.path(),
            "neural_compressor-2.4.1.dist-info",
            "neural-compressor",
            "2.4.1",
        );

        let site = SitePackages::new(vec![temp.path().to_path_buf()]);
        assert_eq!(site.version("neural_compressor"), Some("2.4.1".to_string()));
        assert_eq!(site.version("torch"), None);
        assert_eq!(site.distribution_count(), 1);
    }

    #[test]
    fn egg_info_file_and_directory_forms() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("legacy-0.1-py3.11.egg-info"),
            "Metadata-Version: 1.0\nName: legacy\nVersion: 0.1\n",
        )
        .unwrap();
        let egg_dir = temp.path().join("devpkg.egg-info");
        fs::create_dir_all(&egg_dir).unwrap();
        fs::write(
            egg_dir.join("PKG-INFO"),
            "Metadata-Version: 2.1\nName: devpkg\nVersion: 0.0.1.dev0\n",
        )
        .unwrap();

        let site = SitePackages::new(vec![temp.path().to_path_buf()]);
        assert_eq!(site.version("legacy"), Some("0.1".to_string()));
        assert_eq!(site.version("devpkg"), Some("0.0.1.dev0".to_string()));
    }

    #[test]
    fn earlier_search_path_entry_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_dist_info(first.path(), "torch-2.2.0.dist-info", "torch", "2.2.0");
        write_dist_info(second.path(), "torch-1.13.1.dist-info", "torch", "1.13.1");

        let site = SitePackages::new(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        assert_eq!(site.version("torch"), Some("2.2.0".to_string()));
    }

    #[test]
    fn missing_directories_are_ignored() {
        let site = SitePackages::new(vec![PathBuf::from("/nonexistent/site-packages")]);
        assert!(!site.has_module("torch"));
        assert_eq!(site.version("torch"), None);
        assert_eq!(site.search_path().len(), 1);
    }

    #[test]
    fn unrunnable_interpreter_yields_empty_view() {
        let site = SitePackages::from_interpreter("benchenv-no-such-python");
        assert!(site.search_path().is_empty());
        assert!(!site.has_module("torch"));
    }
}
