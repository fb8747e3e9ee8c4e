//! Path helpers: home expansion, absolute resolution, and comparison keys.

use std::io;
use std::path::{Component, Path, PathBuf};

use dirs_next::home_dir;

/// Replace a leading `~` component with the user's home directory.
///
/// Paths without a leading `~`, or when no home directory can be determined,
/// are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    match home_dir() {
        Some(home) => expand_home_with(path, &home),
        None => path.to_path_buf(),
    }
}

fn expand_home_with(path: &Path, home: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => home.join(components.as_path()),
        _ => path.to_path_buf(),
    }
}

/// Resolve `path` to an absolute location with symlinks and `..` removed.
///
/// Fails when the path does not exist.
pub fn resolve(path: &Path) -> io::Result<PathBuf> {
    path.canonicalize().map(strip_verbatim)
}

#[cfg(windows)]
fn strip_verbatim(path: PathBuf) -> PathBuf {
    let raw = path.to_string_lossy();
    match raw.strip_prefix(r"\\?\") {
        Some(rest) if !rest.starts_with("UNC\\") => PathBuf::from(rest),
        _ => path,
    }
}

#[cfg(not(windows))]
fn strip_verbatim(path: PathBuf) -> PathBuf {
    path
}

/// Key used to detect the same directory spelled twice.
///
/// Case is folded only where the filesystem ignores it.
pub fn comparison_key(path: &Path) -> String {
    let key = path.to_string_lossy();
    if cfg!(windows) {
        key.to_lowercase().replace('/', "\\")
    } else if cfg!(target_os = "macos") {
        key.to_lowercase()
    } else {
        key.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn expands_leading_tilde() {
        let home = Path::new("/home/ops");
        let expanded = expand_home_with(Path::new("~/Applications/Proffix"), home);
        assert_eq!(expanded, home.join("Applications/Proffix"));
        assert_eq!(expand_home_with(Path::new("~"), home), home.to_path_buf());
    }

    #[test]
    fn leaves_other_paths_alone() {
        let home = Path::new("/home/ops");
        assert_eq!(
            expand_home_with(Path::new("/opt/~/x"), home),
            PathBuf::from("/opt/~/x")
        );
        assert_eq!(
            expand_home_with(Path::new("~other/x"), home),
            PathBuf::from("~other/x")
        );
    }

    #[test]
    fn resolve_normalizes_parent_segments() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        fs::create_dir_all(temp.path().join("a/b"))?;
        let resolved = resolve(&temp.path().join("a/b/.."))?;
        assert_eq!(resolved, resolve(&temp.path().join("a"))?);
        assert!(resolved.is_absolute());
        Ok(())
    }

    #[test]
    fn resolve_fails_for_missing_paths() {
        assert!(resolve(Path::new("/definitely/not/here/at/all")).is_err());
    }

    #[cfg(any(windows, target_os = "macos"))]
    #[test]
    fn comparison_key_ignores_case() {
        assert_eq!(
            comparison_key(Path::new("/Opt/Proffix-REST-API/Assemblies")),
            comparison_key(Path::new("/opt/proffix-rest-api/assemblies"))
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn comparison_key_keeps_case_on_linux() {
        assert_ne!(
            comparison_key(Path::new("/opt/proffix-rest-api/Assemblies")),
            comparison_key(Path::new("/opt/proffix-rest-api/assemblies"))
        );
    }
}
