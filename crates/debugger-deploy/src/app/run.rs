//! End-to-end deployment pass: source check, discovery, copy, summary.

use std::env;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::app::candidates::CandidateSources;
use crate::app::deploy::Deployer;
use crate::app::discover::discover_all;
use crate::domain::errors::DeployError;
use crate::domain::model::{DeployMode, DeployReport};
use crate::infra::config::Config;
use crate::infra::paths::{expand_home, resolve};
use crate::infra::platform::{Platform, PlatformEnv};

const SOURCE_FILE: &str = "index.html";

/// Inputs gathered from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub assemblies: Vec<PathBuf>,
    pub dry_run: bool,
    pub source: Option<PathBuf>,
}

/// A fully configured deployment ready to execute.
#[derive(Debug, Clone)]
pub struct Run {
    source: PathBuf,
    candidates: CandidateSources,
    mode: DeployMode,
}

impl Run {
    /// Combine CLI options with config for the current platform.
    ///
    /// Source precedence: `--source`, then config/env, then `index.html`
    /// next to the executable.
    pub fn new(options: RunOptions, config: &Config) -> Result<Self> {
        let source = match options.source.or_else(|| config.source.clone()) {
            Some(source) => source,
            None => default_source()?,
        };
        let candidates = CandidateSources::new(
            options.assemblies,
            config,
            Platform::current(),
            &PlatformEnv::from_env(),
        );
        Ok(Self {
            source,
            candidates,
            mode: DeployMode::from_dry_run(options.dry_run),
        })
    }

    /// Deploy and print progress plus the summary line to `out`.
    ///
    /// Configuration problems surface as [`DeployError`] before anything is written.
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<DeployReport> {
        let expanded = expand_home(&self.source);
        let source = resolve(&expanded).unwrap_or(expanded);
        if !source.is_file() {
            return Err(DeployError::SourceMissing(source).into());
        }
        debug!(source = %source.display(), "using source page");

        let assemblies = self.candidates.resolve();
        if assemblies.is_empty() {
            return Err(DeployError::NoAssemblies.into());
        }
        info!(count = assemblies.len(), "found assemblies directories");

        let versions = discover_all(assemblies.as_slice())?;
        if versions.is_empty() {
            return Err(DeployError::NoVersions.into());
        }

        let report = Deployer::new(source, self.mode).deploy(&versions, out)?;
        writeln!(out, "{report}")?;
        Ok(report)
    }
}

/// `index.html` beside the running executable.
pub fn default_source() -> Result<PathBuf> {
    let exe = env::current_exe().context("unable to locate the running executable")?;
    let exe = resolve(&exe).unwrap_or(exe);
    let dir = exe
        .parent()
        .context("executable path has no parent directory")?;
    Ok(dir.join(SOURCE_FILE))
}
