//! Command-line interface.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::app::RunOptions;

/// Copy ./index.html into the debugger page of every detected Proffix REST API version.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Explicit Assemblies folder path (can be passed multiple times)
    #[arg(long = "assemblies", value_name = "PATH", action = ArgAction::Append)]
    pub assemblies: Vec<PathBuf>,

    /// Only show what would be updated; do not copy files
    #[arg(long)]
    pub dry_run: bool,

    /// Page to deploy instead of the index.html next to this executable
    #[arg(long, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Read settings from this TOML file instead of the per-user config
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            assemblies: self.assemblies.clone(),
            dry_run: self.dry_run,
            source: self.source.clone(),
        }
    }
}
