//! Build descriptor patching.
//!
//! Upstream `setup.py` files pin a specific torch release and decide at
//! build time whether to compile GPU kernels. [`apply_patch`] drops the pin
//! and forces the GPU build. Text that matches neither rule passes through
//! byte-for-byte, and patched text is a fixed point.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{BenchError, Result};

static PINNED_TORCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""torch==[^"]+","#).unwrap());

/// Upstream CPU-only detection assignment.
pub const CPU_ONLY_DETECTION: &str =
    "IS_CPU_ONLY = not torch.backends.mps.is_available() and not torch.cuda.is_available()";

/// Replacement forcing the GPU build.
pub const CPU_ONLY_FORCED: &str = "IS_CPU_ONLY = False";

/// Apply both patch rules to build descriptor text.
///
/// 1. Every `"torch==<version>",` declaration is removed; a line left blank by
///    the removal is dropped along with its newline.
/// 2. [`CPU_ONLY_DETECTION`] becomes [`CPU_ONLY_FORCED`].
pub fn apply_patch(text: &str) -> String {
    let mut patched = String::with_capacity(text.len());

    for line in text.split_inclusive('\n') {
        if !PINNED_TORCH.is_match(line) {
            patched.push_str(line);
            continue;
        }
        let stripped = PINNED_TORCH.replace_all(line, "");
        if !stripped.trim().is_empty() {
            patched.push_str(&stripped);
        }
    }

    patched.replace(CPU_ONLY_DETECTION, CPU_ONLY_FORCED)
}

/// Patch the build descriptor at `path` in place.
///
/// Returns whether the contents changed. The file is rewritten either way.
pub fn patch_build_descriptor(path: &Path) -> Result<bool> {
    let original = fs::read_to_string(path).map_err(|source| BenchError::BuildDescriptor {
        path: path.to_path_buf(),
        source,
    })?;

    let patched = apply_patch(&original);
    let changed = patched != original;

    fs::write(path, &patched).map_err(|source| BenchError::BuildDescriptor {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), changed, "patched build descriptor");
    Ok(changed)
}
