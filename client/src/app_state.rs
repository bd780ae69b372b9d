//! Explicitly constructed application state.
//!
//! A renderer receives an [`AppState`] instead of looking stores up from
//! ambient context. All collaborators arrive through [`AppPorts`].

use std::sync::Arc;

use crate::domain::ports::{ColorSchemeProbe, CredentialVerifier, KeyValueStore, ThemeSurface};
use crate::domain::{Error, PreferenceStore, SessionStore};

/// Parameter object bundling every port the stores need.
#[derive(Clone)]
pub struct AppPorts {
    pub verifier: Arc<dyn CredentialVerifier>,
    pub storage: Arc<dyn KeyValueStore>,
    pub color_scheme: Arc<dyn ColorSchemeProbe>,
    pub theme_surface: Arc<dyn ThemeSurface>,
}

/// Session store over trait-object ports.
pub type AppSession = SessionStore<dyn CredentialVerifier, dyn KeyValueStore>;
/// Preference store over trait-object ports.
pub type AppPreferences = PreferenceStore<dyn KeyValueStore, dyn ThemeSurface>;

/// Stores shared by every page.
pub struct AppState {
    pub session: AppSession,
    pub preferences: AppPreferences,
}

impl AppState {
    /// Hydrate the session and resolve preferences from `ports`.
    pub fn bootstrap(ports: AppPorts) -> Result<Self, Error> {
        let AppPorts {
            verifier,
            storage,
            color_scheme,
            theme_surface,
        } = ports;
        let preferences =
            PreferenceStore::load(Arc::clone(&storage), color_scheme.as_ref(), theme_surface)?;
        let session = SessionStore::hydrate(verifier, storage)?;
        Ok(Self {
            session,
            preferences,
        })
    }
}
