//! Reports whether the CloudFront distribution has finished deploying.
//!
//! Lookup failures are printed and the process still exits successfully.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use cloudfront_maint::{AwsCli, MaintenanceSettings, run_status_check};
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
    let settings = MaintenanceSettings::load_from_iter([OsString::from("check-cloudfront")])
        .map_err(|e| e.to_string())?;
    let api = AwsCli::new(settings.aws_program());
    run_status_check(
        &api,
        settings.distribution_id(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
    .map_err(|e| e.to_string())?;
    Ok(())
}
