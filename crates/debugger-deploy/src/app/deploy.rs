//! Copying the debugger page into each version folder.

use std::fs::{self, File, FileTimes};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::app::destination::destination_for;
use crate::domain::model::{DeployMode, DeployReport, VersionDir};

/// Writes (or simulates writing) one source page over every version's debugger.
#[derive(Debug, Clone)]
pub struct Deployer {
    source: PathBuf,
    mode: DeployMode,
}

impl Deployer {
    pub fn new(source: impl Into<PathBuf>, mode: DeployMode) -> Self {
        Self {
            source: source.into(),
            mode,
        }
    }

    /// Process `versions` in order, printing one line per destination to `out`.
    ///
    /// The first copy failure aborts the pass; earlier copies stay in place.
    pub fn deploy<W: Write>(&self, versions: &[VersionDir], out: &mut W) -> Result<DeployReport> {
        let mut report = DeployReport::new(self.mode);

        for version in versions {
            let destination = destination_for(version);
            match self.mode {
                DeployMode::DryRun => {
                    writeln!(out, "[DRY-RUN] Would write: {}", destination.path.display())?;
                }
                DeployMode::Write => {
                    copy_with_metadata(&self.source, &destination.path)?;
                    info!(
                        path = %destination.path.display(),
                        layout = ?destination.layout,
                        "debugger updated"
                    );
                    writeln!(out, "Updated: {}", destination.path.display())?;
                }
            }
            report.destinations.push(destination);
        }

        Ok(report)
    }
}

/// Copy contents and permissions, then carry over access and modification times.
fn copy_with_metadata(source: &Path, destination: &Path) -> Result<()> {
    fs::copy(source, destination).with_context(|| {
        format!(
            "failed to copy {} to {}",
            source.display(),
            destination.display()
        )
    })?;

    let metadata = fs::metadata(source)
        .with_context(|| format!("failed to read metadata of {}", source.display()))?;
    let mut times = FileTimes::new();
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }

    open_for_times(destination)
        .and_then(|file| file.set_times(times))
        .with_context(|| format!("failed to set timestamps on {}", destination.display()))?;
    Ok(())
}

#[cfg(windows)]
fn open_for_times(path: &Path) -> io::Result<File> {
    use std::os::windows::fs::OpenOptionsExt;

    const FILE_WRITE_ATTRIBUTES: u32 = 0x0100;
    fs::OpenOptions::new()
        .access_mode(FILE_WRITE_ATTRIBUTES)
        .open(path)
}

#[cfg(not(windows))]
fn open_for_times(path: &Path) -> io::Result<File> {
    File::open(path)
}
