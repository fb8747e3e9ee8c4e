//! Version folder discovery inside an Assemblies directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::model::VersionDir;

static VERSION_DIR_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("valid version pattern"));

/// Whether `name` looks like `<major>.<minor>.<patch>`.
pub fn is_version_name(name: &str) -> bool {
    VERSION_DIR_NAME.is_match(name)
}

/// Version folders directly under `assemblies_dir`.
///
/// Sorted by the lowercased full path, so `10.0.0` lands before `2.0.0`.
pub fn discover_version_dirs(assemblies_dir: &Path) -> Result<Vec<VersionDir>> {
    let entries = fs::read_dir(assemblies_dir)
        .with_context(|| format!("failed to list {}", assemblies_dir.display()))?;

    let mut versions = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to list {}", assemblies_dir.display()))?;
        let path = entry.path();
        let matches = entry.file_name().to_str().is_some_and(is_version_name);
        if matches && path.is_dir() {
            versions.push(VersionDir::new(path));
        }
    }

    versions.sort_by_cached_key(|version| version.path.to_string_lossy().to_lowercase());
    Ok(versions)
}

/// Discover versions across all `assemblies_dirs`, keeping their order.
pub fn discover_all<P: AsRef<Path>>(assemblies_dirs: &[P]) -> Result<Vec<VersionDir>> {
    let mut all = Vec::new();
    for dir in assemblies_dirs {
        let found = discover_version_dirs(dir.as_ref())?;
        tracing::debug!(dir = %dir.as_ref().display(), versions = found.len(), "scanned assemblies");
        all.extend(found);
    }
    Ok(all)
}
