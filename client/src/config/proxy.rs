//! Development proxy rule: forwards API requests to the backend.
//!
//! The dev server listens on its own port and hands any path starting with
//! the API prefix to the backend unchanged (no prefix rewrite).

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BACKEND_PORT: u16 = 8000;
const DEFAULT_DEV_PORT: u16 = 3000;
const DEFAULT_API_PREFIX: &str = "/api";

/// Dev-proxy settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HANDRECEIPT_PROXY")]
pub struct ProxySettings {
    /// Port the backend listens on.
    pub backend_port: Option<u16>,
    /// Port the dev server listens on.
    pub dev_port: Option<u16>,
    /// Path prefix that is forwarded.
    pub api_prefix: Option<String>,
}

impl ProxySettings {
    /// Backend port, defaulting to 8000.
    pub fn backend_port(&self) -> u16 {
        self.backend_port.unwrap_or(DEFAULT_BACKEND_PORT)
    }

    /// Dev-server port, defaulting to 3000.
    pub fn dev_port(&self) -> u16 {
        self.dev_port.unwrap_or(DEFAULT_DEV_PORT)
    }

    /// Forwarded prefix, defaulting to `/api`.
    pub fn api_prefix(&self) -> &str {
        self.api_prefix.as_deref().unwrap_or(DEFAULT_API_PREFIX)
    }

    /// Origin requests are forwarded to.
    pub fn backend_origin(&self) -> String {
        format!("http://localhost:{}", self.backend_port())
    }

    /// Resolved forwarding rule.
    pub fn rule(&self) -> ProxyRule {
        ProxyRule {
            prefix: self.api_prefix().to_owned(),
            target: self.backend_origin(),
            change_origin: true,
            secure: false,
        }
    }
}

/// One forwarding rule of the dev server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRule {
    /// Request paths starting with this prefix are forwarded.
    pub prefix: String,
    /// Backend origin.
    pub target: String,
    /// Rewrite the `Host` header to the target.
    pub change_origin: bool,
    /// Verify TLS certificates of the target.
    pub secure: bool,
}

impl ProxyRule {
    /// Backend URL for `path`, or `None` when the dev server serves it.
    pub fn forward(&self, path: &str) -> Option<String> {
        path.starts_with(&self.prefix)
            .then(|| format!("{}{path}", self.target))
    }
}
