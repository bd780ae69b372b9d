//! Distribution deployment status check.

use std::io::{self, Write};

use tracing::warn;

use crate::{CloudFrontApi, DistributionStatus};

/// Status value of a fully propagated distribution.
pub const DEPLOYED: &str = "Deployed";

/// What the status check found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Reported status and modification time.
    pub distribution: DistributionStatus,
}

impl StatusReport {
    /// Whether the distribution has finished deploying.
    #[must_use]
    pub fn is_deployed(&self) -> bool {
        self.distribution.status == DEPLOYED
    }

    /// Write the human-readable report.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Distribution Status: {}", self.distribution.status)?;
        writeln!(out, "Last Modified: {}", self.distribution.last_modified_time)?;
        if self.is_deployed() {
            writeln!(
                out,
                "\nDistribution is fully deployed. Your site should be working correctly now."
            )?;
            writeln!(
                out,
                "You can verify by visiting: https://www.handreceipt.com/defense/"
            )
        } else {
            writeln!(
                out,
                "\nDistribution is still deploying. Please wait a few more minutes."
            )?;
            writeln!(out, "You can run this script again to check the status.")
        }
    }
}

/// Check distribution `id` and report to `out`.
///
/// A failed lookup is reported on `err` and yields `Ok(None)`; the check never
/// fails the process because of CloudFront.
///
/// # Errors
///
/// Returns an error only when writing to `out` or `err` fails.
pub fn run_status_check<A>(
    api: &A,
    id: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<Option<StatusReport>>
where
    A: CloudFrontApi + ?Sized,
{
    writeln!(out, "Checking CloudFront distribution status...")?;
    match api.get_distribution(id) {
        Ok(distribution) => {
            let report = StatusReport { distribution };
            report.write_to(out)?;
            Ok(Some(report))
        }
        Err(error) => {
            warn!(distribution_id = id, %error, "status lookup failed");
            writeln!(err, "Error checking CloudFront status: {error}")?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "test code uses expect for clear failure messages"
    )]

    use super::*;
    use crate::MaintenanceError;
    use crate::api::MockCloudFrontApi;
    use mockall::predicate::eq;
    use rstest::rstest;

    fn api_reporting(status: &'static str) -> MockCloudFrontApi {
        let mut api = MockCloudFrontApi::new();
        api.expect_get_distribution()
            .with(eq("E3T7VX6HV95Q5O"))
            .times(1)
            .return_once(move |_| {
                Ok(DistributionStatus {
                    status: status.to_owned(),
                    last_modified_time: "2025-04-02T10:11:12.000Z".to_owned(),
                })
            });
        api
    }

    fn run(api: &MockCloudFrontApi) -> (Option<StatusReport>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let report =
            run_status_check(api, "E3T7VX6HV95Q5O", &mut out, &mut err).expect("writes succeed");
        (
            report,
            String::from_utf8(out).expect("utf8 stdout"),
            String::from_utf8(err).expect("utf8 stderr"),
        )
    }

    #[rstest]
    fn deployed_distribution_points_at_the_site() {
        let (report, out, err) = run(&api_reporting("Deployed"));

        assert!(report.expect("report").is_deployed());
        assert_eq!(
            out,
            concat!(
                "Checking CloudFront distribution status...\n",
                "Distribution Status: Deployed\n",
                "Last Modified: 2025-04-02T10:11:12.000Z\n",
                "\n",
                "Distribution is fully deployed. Your site should be working correctly now.\n",
                "You can verify by visiting: https://www.handreceipt.com/defense/\n",
            )
        );
        assert!(err.is_empty());
    }

    #[rstest]
    #[case("InProgress")]
    #[case("deployed")]
    fn anything_else_is_still_deploying(#[case] status: &'static str) {
        let (report, out, _) = run(&api_reporting(status));

        assert!(!report.expect("report").is_deployed());
        assert!(out.contains("Distribution is still deploying. Please wait a few more minutes."));
        assert!(out.ends_with("You can run this script again to check the status.\n"));
    }

    #[rstest]
    fn lookup_failures_are_reported_not_raised() {
        let mut api = MockCloudFrontApi::new();
        api.expect_get_distribution().return_once(|_| {
            Err(MaintenanceError::CommandFailed {
                command: "aws cloudfront get-distribution --id E3T7VX6HV95Q5O".to_owned(),
                status: "exit status: 255".to_owned(),
                stderr: "AccessDenied".to_owned(),
            })
        });

        let (report, out, err) = run(&api);

        assert!(report.is_none());
        assert_eq!(out, "Checking CloudFront distribution status...\n");
        assert!(err.starts_with("Error checking CloudFront status: "));
        assert!(err.contains("AccessDenied"));
    }
}
