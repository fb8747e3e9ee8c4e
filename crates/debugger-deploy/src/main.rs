use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use debugger_deploy::app::Run;
use debugger_deploy::cli::Cli;
use debugger_deploy::domain::errors::DeployError;
use debugger_deploy::infra::config::Config;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    debugger_deploy::init(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    let run = Run::new(cli.run_options(), &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run.execute(&mut out) {
        Ok(_) => {
            out.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => match err.downcast_ref::<DeployError>() {
            Some(deploy_err) => {
                eprintln!("ERROR: {deploy_err}");
                Ok(ExitCode::from(deploy_err.exit_code()))
            }
            None => Err(err),
        },
    }
}
