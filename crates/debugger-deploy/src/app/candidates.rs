//! Assemblies directory discovery.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::infra::config::Config;
use crate::infra::paths::{comparison_key, expand_home, resolve};
use crate::infra::platform::{Platform, PlatformEnv, default_assemblies_dirs};

/// Every place an Assemblies folder might live, in probing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSources {
    /// `--assemblies` flags.
    pub explicit: Vec<PathBuf>,
    /// Config file and environment entries.
    pub configured: Vec<PathBuf>,
    /// Platform install locations.
    pub defaults: Vec<PathBuf>,
}

impl CandidateSources {
    pub fn new(
        explicit: Vec<PathBuf>,
        config: &Config,
        platform: Platform,
        env: &PlatformEnv,
    ) -> Self {
        let defaults = if config.search.include_defaults() {
            default_assemblies_dirs(platform, env)
        } else {
            Vec::new()
        };
        Self {
            explicit,
            configured: config.search.assemblies.clone(),
            defaults,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.explicit
            .iter()
            .chain(&self.configured)
            .chain(&self.defaults)
            .map(PathBuf::as_path)
    }

    /// Existing, deduplicated, absolute Assemblies directories.
    pub fn resolve(&self) -> Vec<PathBuf> {
        resolve_assemblies_dirs(self.iter())
    }
}

/// Expand, resolve, and deduplicate `candidates`, keeping first-seen order.
///
/// Candidates that are missing or not directories are dropped.
pub fn resolve_assemblies_dirs<'a>(candidates: impl IntoIterator<Item = &'a Path>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut existing = Vec::new();

    for candidate in candidates {
        let expanded = expand_home(candidate);
        let resolved = match resolve(&expanded) {
            Ok(resolved) => resolved,
            Err(err) => {
                debug!(path = %expanded.display(), error = %err, "skipping assemblies candidate");
                continue;
            }
        };
        if !resolved.is_dir() {
            debug!(path = %resolved.display(), "assemblies candidate is not a directory");
            continue;
        }
        if !seen.insert(comparison_key(&resolved)) {
            debug!(path = %resolved.display(), "duplicate assemblies candidate");
            continue;
        }
        existing.push(resolved);
    }

    existing
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;

    #[test]
    fn drops_missing_and_non_directories() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let dir = temp.path().join("Assemblies");
        let file = temp.path().join("notes.txt");
        fs::create_dir(&dir)?;
        fs::write(&file, "not a dir")?;
        let missing = temp.path().join("gone");

        let resolved = resolve_assemblies_dirs([missing.as_path(), file.as_path(), dir.as_path()]);

        assert_eq!(resolved, vec![resolve(&dir)?]);
        Ok(())
    }

    #[test]
    fn deduplicates_equivalent_spellings() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let dir = temp.path().join("Assemblies");
        fs::create_dir_all(dir.join("1.0.0"))?;
        let dotted = dir.join("1.0.0").join("..");

        let resolved = resolve_assemblies_dirs([dir.as_path(), dotted.as_path()]);

        assert_eq!(resolved, vec![resolve(&dir)?]);
        assert!(resolved[0].is_absolute());
        Ok(())
    }

    #[cfg(any(windows, target_os = "macos"))]
    #[test]
    fn case_different_spellings_collapse() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let dir = temp.path().join("Assemblies");
        fs::create_dir_all(dir.join("1.0.0"))?;
        let shouted = temp.path().join("ASSEMBLIES");

        let resolved = resolve_assemblies_dirs([dir.as_path(), shouted.as_path()]);

        assert_eq!(resolved.len(), 1);
        Ok(())
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn case_different_directories_stay_separate() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let upper = temp.path().join("Assemblies");
        let lower = temp.path().join("assemblies");
        fs::create_dir_all(upper.join("1.0.0"))?;
        fs::create_dir_all(lower.join("2.0.0"))?;

        let resolved = resolve_assemblies_dirs([upper.as_path(), lower.as_path()]);

        assert_eq!(resolved, vec![resolve(&upper)?, resolve(&lower)?]);
        Ok(())
    }

    #[test]
    fn preserves_first_seen_order() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let b = temp.path().join("b");
        let a = temp.path().join("a");
        fs::create_dir(&a)?;
        fs::create_dir(&b)?;

        let resolved = resolve_assemblies_dirs([b.as_path(), a.as_path(), b.as_path()]);

        assert_eq!(resolved, vec![resolve(&b)?, resolve(&a)?]);
        Ok(())
    }

    #[test]
    fn explicit_paths_come_before_configured_and_defaults() {
        let mut config = Config::default();
        config.search.assemblies.push(PathBuf::from("configured"));
        let sources = CandidateSources::new(
            vec![PathBuf::from("explicit")],
            &config,
            Platform::Other,
            &PlatformEnv::default(),
        );

        let order: Vec<_> = sources.iter().collect();
        assert_eq!(order[0], Path::new("explicit"));
        assert_eq!(order[1], Path::new("configured"));
        assert_eq!(order[2], Path::new("/opt/proffix-rest-api/Assemblies"));
        assert_eq!(order.len(), 4);
    }

    #[test]
    fn defaults_can_be_disabled() -> Result<()> {
        let config: Config = toml::from_str("[search]\ninclude_defaults = false\n")?;
        let sources =
            CandidateSources::new(Vec::new(), &config, Platform::Other, &PlatformEnv::default());
        assert!(sources.defaults.is_empty());
        assert!(sources.resolve().is_empty());
        Ok(())
    }
}
