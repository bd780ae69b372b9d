//! Rewrite of the 404 custom error response.
//!
//! The distribution answers unknown paths with the single-page application
//! shell at [`NOT_FOUND_PAGE`]. Only `ResponsePagePath` of the existing 404
//! rule changes; every other property of the configuration is carried over.

use std::io::{self, Write};

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde_json::{Map, Value, json};
use tracing::{info, warn};

use crate::atomic_io::write_atomic;
use crate::{CloudFrontApi, MaintenanceError};

/// Page served for unknown paths.
pub const NOT_FOUND_PAGE: &str = "/defense/app.html";
/// File name of the update document handed to `update-distribution`.
pub const UPDATED_CONFIG_FILE: &str = "updated-cloudfront-config.json";

const CUSTOM_ERROR_RESPONSES: &str = "CustomErrorResponses";

/// A configuration with its 404 rule rewritten.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchedConfig {
    /// `ResponsePagePath` before the rewrite, if the rule had one.
    pub previous_path: Option<String>,
    /// Deep copy of the configuration with the rewrite applied.
    pub config: Map<String, Value>,
}

/// How a patch run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The update was submitted.
    Updated,
    /// The update document was written but CloudFront refused it.
    UpdateFailed(MaintenanceError),
    /// No 404 rule exists; nothing was written.
    NoNotFoundRule,
}

/// Insert an empty `CustomErrorResponses` block when the key is absent or
/// null.
pub fn ensure_error_responses(config: &mut Map<String, Value>) {
    let missing = config
        .get(CUSTOM_ERROR_RESPONSES)
        .is_none_or(Value::is_null);
    if missing {
        config.insert(
            CUSTOM_ERROR_RESPONSES.to_owned(),
            json!({ "Quantity": 0, "Items": [] }),
        );
    }
}

fn is_not_found_rule(item: &Value) -> bool {
    item.get("ErrorCode").and_then(Value::as_u64) == Some(404)
}

/// Copy `config`, pointing the first 404 rule at [`NOT_FOUND_PAGE`].
///
/// Returns `None` when no rule has `ErrorCode` 404.
#[must_use]
pub fn rewrite_not_found_page(config: &Map<String, Value>) -> Option<PatchedConfig> {
    let mut updated = config.clone();
    let rule = updated
        .get_mut(CUSTOM_ERROR_RESPONSES)
        .and_then(|responses| responses.get_mut("Items"))
        .and_then(Value::as_array_mut)
        .and_then(|items| items.iter_mut().find(|item| is_not_found_rule(item)))
        .and_then(Value::as_object_mut)?;
    let previous_path = rule
        .insert(
            "ResponsePagePath".to_owned(),
            Value::String(NOT_FOUND_PAGE.to_owned()),
        )
        .and_then(|previous| previous.as_str().map(str::to_owned));
    Some(PatchedConfig {
        previous_path,
        config: updated,
    })
}

/// Render the `update-distribution` input document as two-space pretty JSON.
///
/// # Errors
///
/// Returns [`MaintenanceError::Parse`] if the configuration cannot be encoded.
pub fn render_update_document(config: &Map<String, Value>) -> Result<String, MaintenanceError> {
    serde_json::to_string_pretty(&json!({ "DistributionConfig": config })).map_err(|err| {
        MaintenanceError::Parse {
            context: "update-distribution input",
            message: err.to_string(),
        }
    })
}

/// Fetch, patch and resubmit the configuration of distribution `id`.
///
/// The update document is written to [`UPDATED_CONFIG_FILE`] inside
/// `workdir`, which must be the process working directory because the CLI
/// resolves the `file://` reference relative to it.
///
/// # Errors
///
/// Returns [`MaintenanceError`] when the configuration cannot be read or the
/// update document cannot be written. A refused update is reported on `err`
/// and returned as [`PatchOutcome::UpdateFailed`].
pub fn run_patch<A>(
    api: &A,
    id: &str,
    workdir: &Dir,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<PatchOutcome, MaintenanceError>
where
    A: CloudFrontApi + ?Sized,
{
    report(out, "Getting current CloudFront configuration...")?;
    let response = api.get_distribution_config(id)?;
    let mut config = response.config;
    ensure_error_responses(&mut config);

    let Some(patched) = rewrite_not_found_page(&config) else {
        report(out, "No existing 404 error response found to update.")?;
        return Ok(PatchOutcome::NoNotFoundRule);
    };

    report(out, "Updating existing 404 error response...")?;
    report(
        out,
        &format!(
            "Current ResponsePagePath: {}",
            patched.previous_path.as_deref().unwrap_or("(none)")
        ),
    )?;
    report(out, &format!("New ResponsePagePath: {NOT_FOUND_PAGE}"))?;

    let document = render_update_document(&patched.config)?;
    let file = Utf8Path::new(UPDATED_CONFIG_FILE);
    write_atomic(workdir, file, &document).map_err(|error| MaintenanceError::Write {
        path: UPDATED_CONFIG_FILE.to_owned(),
        message: error.to_string(),
    })?;
    info!(distribution_id = id, file = UPDATED_CONFIG_FILE, "update document written");

    report(out, "Updating CloudFront distribution...")?;
    match api.update_distribution(id, &response.etag, file) {
        Ok(()) => {
            report(out, "CloudFront distribution update initiated successfully.")?;
            report(out, "The update may take 5-10 minutes to fully deploy.")?;
            Ok(PatchOutcome::Updated)
        }
        Err(error) => {
            warn!(distribution_id = id, %error, "update-distribution failed");
            report(err, &format!("Error updating CloudFront distribution: {error}"))?;
            Ok(PatchOutcome::UpdateFailed(error))
        }
    }
}

fn report(out: &mut impl Write, line: &str) -> Result<(), MaintenanceError> {
    writeln!(out, "{line}").map_err(|error: io::Error| MaintenanceError::Write {
        path: "<output>".to_owned(),
        message: error.to_string(),
    })
}
