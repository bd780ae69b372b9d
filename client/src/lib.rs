//! HandReceipt client core library modules.

pub mod app_state;
pub mod cli;
pub mod config;
pub mod domain;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod views;

pub use app_state::{AppPorts, AppState};
