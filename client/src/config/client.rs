//! Harness settings loaded via OrthoConfig.

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_STORAGE_DIR: &str = ".handreceipt";

/// Settings for the terminal harness.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HANDRECEIPT")]
pub struct ClientSettings {
    /// Directory holding the durable key-value document.
    pub storage_dir: Option<String>,
    /// Answer given by the colour-scheme probe.
    #[ortho_config(default = false)]
    pub prefers_dark: bool,
}

impl ClientSettings {
    /// Return the configured storage directory, falling back to the default.
    pub fn storage_dir(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(
            self.storage_dir
                .as_deref()
                .filter(|dir| !dir.is_empty())
                .unwrap_or(DEFAULT_STORAGE_DIR),
        )
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for harness configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ClientSettings {
        ClientSettings::load_from_iter([OsString::from("handreceipt")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("HANDRECEIPT_STORAGE_DIR", None::<String>),
            ("HANDRECEIPT_PREFERS_DARK", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.storage_dir(), Utf8PathBuf::from(DEFAULT_STORAGE_DIR));
        assert!(!settings.prefers_dark);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("HANDRECEIPT_STORAGE_DIR", Some("/tmp/hr-store".to_owned())),
            ("HANDRECEIPT_PREFERS_DARK", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.storage_dir(), Utf8PathBuf::from("/tmp/hr-store"));
        assert!(settings.prefers_dark);
    }
}
