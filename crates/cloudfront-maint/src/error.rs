//! Error types for the maintenance tools.

use thiserror::Error;

/// Failures raised while talking to CloudFront or writing the patched config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaintenanceError {
    /// The CLI program could not be started.
    #[error("failed to run '{command}': {message}")]
    Spawn {
        /// Command line that was attempted.
        command: String,
        /// Operating system error text.
        message: String,
    },
    /// The CLI program ran but reported failure.
    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        /// Command line that failed.
        command: String,
        /// Exit status description.
        status: String,
        /// Captured standard error, trimmed.
        stderr: String,
    },
    /// A response could not be decoded.
    #[error("invalid {context} response: {message}")]
    Parse {
        /// Which response was being decoded.
        context: &'static str,
        /// Decoder error text.
        message: String,
    },
    /// The updated configuration could not be written.
    #[error("failed to write '{path}': {message}")]
    Write {
        /// Target file name.
        path: String,
        /// I/O error text.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failure_includes_status_and_stderr() {
        let err = MaintenanceError::CommandFailed {
            command: "aws cloudfront get-distribution --id E1".to_owned(),
            status: "exit status: 255".to_owned(),
            stderr: "Unable to locate credentials".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "'aws cloudfront get-distribution --id E1' exited with exit status: 255: Unable to locate credentials"
        );
    }

    #[test]
    fn parse_failure_names_the_response() {
        let err = MaintenanceError::Parse {
            context: "get-distribution",
            message: "missing field `Status`".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid get-distribution response: missing field `Status`"
        );
    }
}
