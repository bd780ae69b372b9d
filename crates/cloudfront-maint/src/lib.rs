//! Maintenance tools for the CloudFront distribution serving the HandReceipt
//! web client.
//!
//! Two operations are provided:
//!
//! - [`run_status_check`] reports whether the distribution has finished
//!   deploying.
//! - [`run_patch`] rewrites the 404 custom error response so deep links are
//!   answered by the single-page application shell.
//!
//! Both talk to CloudFront through the [`CloudFrontApi`] trait. The binaries
//! use [`AwsCli`], which shells out to the AWS command line interface.
//!
//! # Example
//!
//! ```
//! use cloudfront_maint::{ensure_error_responses, rewrite_not_found_page};
//! use serde_json::json;
//!
//! let mut config = json!({
//!     "CustomErrorResponses": {
//!         "Quantity": 1,
//!         "Items": [{"ErrorCode": 404, "ResponsePagePath": "/index.html", "ResponseCode": "200"}]
//!     }
//! });
//! let config = config.as_object_mut().expect("object");
//! ensure_error_responses(config);
//!
//! let patched = rewrite_not_found_page(config).expect("404 rule present");
//! assert_eq!(patched.previous_path.as_deref(), Some("/index.html"));
//! ```

mod api;
mod atomic_io;
mod config;
mod error;
mod patch;
mod status;

pub use api::{AwsCli, CloudFrontApi, DistributionConfigResponse, DistributionStatus};
pub use config::MaintenanceSettings;
pub use error::MaintenanceError;
pub use patch::{
    NOT_FOUND_PAGE, PatchOutcome, PatchedConfig, UPDATED_CONFIG_FILE, ensure_error_responses,
    render_update_document, rewrite_not_found_page, run_patch,
};
pub use status::{DEPLOYED, StatusReport, run_status_check};
