use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};

const BIN_NAME: &str = "debugger-deploy";

#[derive(Parser)]
#[command(author, version, about = "Project automation commands", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run cargo nextest with default configuration
    Nextest {
        #[arg(long)]
        profile: Option<String>,
        #[arg(long)]
        release: bool,
    },
    /// Build a release binary and place the debugger page next to it
    Bundle {
        /// Debugger page shipped as the binary's sibling index.html
        #[arg(long, value_name = "FILE")]
        page: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Nextest { profile, release } => run_nextest(profile, release)?,
        Commands::Bundle { page } => bundle(&page)?,
    }
    Ok(())
}

fn run_nextest(profile: Option<String>, release: bool) -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.arg("nextest").arg("run");
    if let Some(profile) = profile {
        cmd.arg("--profile").arg(profile);
    }
    if release {
        cmd.arg("--release");
    }
    let status = cmd.status()?;
    if !status.success() {
        anyhow::bail!("cargo nextest run failed");
    }
    Ok(())
}

fn bundle(page: &Path) -> Result<()> {
    if !page.is_file() {
        anyhow::bail!("debugger page not found: {}", page.display());
    }

    let status = Command::new("cargo")
        .args(["build", "--release", "--bin", BIN_NAME])
        .status()?;
    if !status.success() {
        anyhow::bail!("cargo build --release failed");
    }

    let metadata = MetadataCommand::new()
        .no_deps()
        .exec()
        .context("failed to read cargo metadata")?;
    let release_dir = metadata.target_directory.join("release");
    let target = release_dir.join("index.html");
    fs::copy(page, &target).with_context(|| format!("failed to copy page to {target}"))?;

    println!("Bundled {} with {target}", release_dir.join(BIN_NAME));
    Ok(())
}
