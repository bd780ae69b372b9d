//! CloudFront access port and its AWS CLI adapter.

use std::process::Command;

use camino::Utf8Path;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::MaintenanceError;

/// Deployment state of a distribution as reported by `get-distribution`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DistributionStatus {
    /// `Deployed` or `InProgress`.
    pub status: String,
    /// Timestamp of the last configuration change, as reported.
    pub last_modified_time: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DistributionEnvelope {
    distribution: DistributionStatus,
}

/// Result of `get-distribution-config`.
///
/// The configuration is kept as an untyped JSON object so properties this
/// tool does not know about survive the round trip unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DistributionConfigResponse {
    /// Entity tag required by the conditional update.
    #[serde(rename = "ETag")]
    pub etag: String,
    /// Full distribution configuration.
    #[serde(rename = "DistributionConfig")]
    pub config: Map<String, Value>,
}

/// Operations the maintenance tools need from CloudFront.
#[cfg_attr(test, mockall::automock)]
pub trait CloudFrontApi: Send + Sync {
    /// Fetch the deployment status of distribution `id`.
    ///
    /// # Errors
    ///
    /// Returns [`MaintenanceError`] when the call fails or the response is
    /// malformed.
    fn get_distribution(&self, id: &str) -> Result<DistributionStatus, MaintenanceError>;

    /// Fetch the configuration and ETag of distribution `id`.
    ///
    /// # Errors
    ///
    /// Returns [`MaintenanceError`] when the call fails or the response is
    /// malformed.
    fn get_distribution_config(
        &self,
        id: &str,
    ) -> Result<DistributionConfigResponse, MaintenanceError>;

    /// Submit the update document at `input` guarded by `etag`.
    ///
    /// # Errors
    ///
    /// Returns [`MaintenanceError`] when CloudFront rejects the update.
    fn update_distribution(
        &self,
        id: &str,
        etag: &str,
        input: &Utf8Path,
    ) -> Result<(), MaintenanceError>;
}

/// Adapter invoking the `aws cloudfront` command line.
#[derive(Debug, Clone)]
pub struct AwsCli {
    program: String,
}

impl AwsCli {
    /// Adapter running `program` (normally `aws`).
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<Vec<u8>, MaintenanceError> {
        let command = format!("{} {}", self.program, args.join(" "));
        debug!(%command, "invoking aws cli");
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|err| MaintenanceError::Spawn {
                command: command.clone(),
                message: err.to_string(),
            })?;
        if !output.status.success() {
            return Err(MaintenanceError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }
        Ok(output.stdout)
    }
}

fn decode<T: serde::de::DeserializeOwned>(
    context: &'static str,
    bytes: &[u8],
) -> Result<T, MaintenanceError> {
    serde_json::from_slice(bytes).map_err(|err| MaintenanceError::Parse {
        context,
        message: err.to_string(),
    })
}

impl CloudFrontApi for AwsCli {
    fn get_distribution(&self, id: &str) -> Result<DistributionStatus, MaintenanceError> {
        let stdout = self.run(&["cloudfront", "get-distribution", "--id", id])?;
        let envelope: DistributionEnvelope = decode("get-distribution", &stdout)?;
        Ok(envelope.distribution)
    }

    fn get_distribution_config(
        &self,
        id: &str,
    ) -> Result<DistributionConfigResponse, MaintenanceError> {
        let stdout = self.run(&["cloudfront", "get-distribution-config", "--id", id])?;
        decode("get-distribution-config", &stdout)
    }

    fn update_distribution(
        &self,
        id: &str,
        etag: &str,
        input: &Utf8Path,
    ) -> Result<(), MaintenanceError> {
        let input_arg = format!("file://{input}");
        self.run(&[
            "cloudfront",
            "update-distribution",
            "--id",
            id,
            "--if-match",
            etag,
            "--cli-input-json",
            &input_arg,
        ])?;
        info!(distribution_id = id, "update-distribution accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Decoding of AWS CLI responses.

    #![expect(
        clippy::expect_used,
        reason = "test code uses expect for clear failure messages"
    )]

    use super::*;
    use rstest::rstest;

    #[rstest]
    fn decodes_distribution_status() {
        let raw = br#"{"ETag":"E1","Distribution":{"Id":"E3T7VX6HV95Q5O","Status":"InProgress","LastModifiedTime":"2025-04-02T10:11:12.000Z","DomainName":"d1.cloudfront.net"}}"#;
        let envelope: DistributionEnvelope =
            decode("get-distribution", raw).expect("status decodes");
        assert_eq!(envelope.distribution.status, "InProgress");
        assert_eq!(
            envelope.distribution.last_modified_time,
            "2025-04-02T10:11:12.000Z"
        );
    }

    #[rstest]
    fn config_response_keeps_unknown_properties() {
        let raw = br#"{"ETag":"EABC","DistributionConfig":{"CallerReference":"hr","Enabled":true}}"#;
        let response: DistributionConfigResponse =
            decode("get-distribution-config", raw).expect("config decodes");
        assert_eq!(response.etag, "EABC");
        assert_eq!(response.config.get("Enabled"), Some(&Value::Bool(true)));
    }

    #[rstest]
    fn missing_status_is_a_parse_error() {
        let err = decode::<DistributionEnvelope>("get-distribution", br#"{"Distribution":{}}"#)
            .err()
            .expect("decode fails");
        assert!(matches!(
            err,
            MaintenanceError::Parse {
                context: "get-distribution",
                ..
            }
        ));
    }

    #[rstest]
    fn missing_program_is_a_spawn_error() {
        let cli = AwsCli::new("handreceipt-no-such-aws-binary");
        let err = cli.get_distribution("E1").expect_err("spawn fails");
        assert!(matches!(err, MaintenanceError::Spawn { .. }));
    }
}
