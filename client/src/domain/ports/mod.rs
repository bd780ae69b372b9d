//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod color_scheme;
mod credential_verifier;
mod key_value_store;
mod theme_surface;

#[cfg(test)]
pub use color_scheme::MockColorSchemeProbe;
pub use color_scheme::{ColorSchemeProbe, FixedColorScheme};
#[cfg(test)]
pub use credential_verifier::MockCredentialVerifier;
pub use credential_verifier::{
    CredentialVerifier, FIXTURE_PASSWORD, FIXTURE_USERNAME, FixtureCredentialVerifier,
};
#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
pub use key_value_store::{KeyValueStore, KeyValueStoreError};
#[cfg(test)]
pub use theme_surface::MockThemeSurface;
pub use theme_surface::ThemeSurface;
