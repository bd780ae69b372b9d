//! Maintenance tool settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_DISTRIBUTION_ID: &str = "E3T7VX6HV95Q5O";
const DEFAULT_AWS_PROGRAM: &str = "aws";

/// Which distribution to work on and how to reach the AWS CLI.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CLOUDFRONT")]
pub struct MaintenanceSettings {
    /// Distribution identifier.
    pub distribution_id: Option<String>,
    /// AWS CLI executable name or path.
    pub aws_program: Option<String>,
}

impl MaintenanceSettings {
    /// Configured distribution id, or the production distribution.
    #[must_use]
    pub fn distribution_id(&self) -> &str {
        non_empty(self.distribution_id.as_deref()).unwrap_or(DEFAULT_DISTRIBUTION_ID)
    }

    /// Configured AWS CLI program, or `aws` from `PATH`.
    #[must_use]
    pub fn aws_program(&self) -> &str {
        non_empty(self.aws_program.as_deref()).unwrap_or(DEFAULT_AWS_PROGRAM)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}
