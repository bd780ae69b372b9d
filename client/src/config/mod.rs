//! Layered configuration for the harness and the dev proxy.

mod client;
mod proxy;

pub use client::ClientSettings;
pub use proxy::{ProxyRule, ProxySettings};
