//! Domain models for version folders, destinations, and deployment reports.

use std::fmt;
use std::path::PathBuf;

/// An installed API version: a folder named `<major>.<minor>.<patch>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDir {
    pub path: PathBuf,
}

impl VersionDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn name(&self) -> Option<&str> {
        self.path.file_name().and_then(|name| name.to_str())
    }
}

/// How a version ships its debugger page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebuggerLayout {
    /// `debugger/index.html`
    Folder,
    /// `debugger.html` next to the assemblies.
    SingleFile,
}

/// Where the source page gets written for one version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub path: PathBuf,
    pub layout: DebuggerLayout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeployMode {
    #[default]
    Write,
    DryRun,
}

impl DeployMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run { Self::DryRun } else { Self::Write }
    }
}

/// Outcome of a deployment pass, in processing order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeployReport {
    pub mode: DeployMode,
    pub destinations: Vec<Destination>,
}

impl DeployReport {
    pub fn new(mode: DeployMode) -> Self {
        Self {
            mode,
            destinations: Vec::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.destinations.len()
    }
}

impl fmt::Display for DeployReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self.mode {
            DeployMode::DryRun => "Would update",
            DeployMode::Write => "Updated",
        };
        write!(f, "{action} {} version(s).", self.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reflects_mode() {
        let mut report = DeployReport::new(DeployMode::Write);
        report.destinations.push(Destination {
            path: PathBuf::from("1.0.0/debugger.html"),
            layout: DebuggerLayout::SingleFile,
        });
        assert_eq!(report.to_string(), "Updated 1 version(s).");

        report.mode = DeployMode::DryRun;
        assert_eq!(report.to_string(), "Would update 1 version(s).");
    }

    #[test]
    fn version_dir_exposes_folder_name() {
        let version = VersionDir::new("/opt/proffix-rest-api/Assemblies/4.2.1");
        assert_eq!(version.name(), Some("4.2.1"));
    }
}
