//! Points the distribution's 404 custom error response at the client shell.
//!
//! A refused update is printed and the process still exits successfully; a
//! configuration that cannot be read or written is a failure.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use cap_std::ambient_authority;
use cap_std::fs::Dir;
use cloudfront_maint::{AwsCli, MaintenanceSettings, run_patch};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let settings = MaintenanceSettings::load_from_iter([OsString::from("update-cloudfront")])
        .map_err(|e| e.to_string())?;
    let workdir = Dir::open_ambient_dir(".", ambient_authority())
        .map_err(|e| format!("failed to open working directory: {e}"))?;
    let api = AwsCli::new(settings.aws_program());
    run_patch(
        &api,
        settings.distribution_id(),
        &workdir,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
    .map_err(|e| e.to_string())?;
    Ok(())
}
