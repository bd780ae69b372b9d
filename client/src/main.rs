//! Harness entry-point: loads settings and runs one store command.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use handreceipt::cli::{Cli, CliError, run};
use handreceipt::config::{ClientSettings, ProxySettings};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<(), String> {
    let program = [OsString::from("handreceipt")];
    let client = ClientSettings::load_from_iter(program.clone()).map_err(|e| e.to_string())?;
    let proxy = ProxySettings::load_from_iter(program).map_err(|e| e.to_string())?;
    let mut out = io::stdout().lock();
    run(&cli.command, &client, &proxy, &mut out).map_err(|err: CliError| err.to_string())
}
