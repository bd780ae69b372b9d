//! Driving port for checking sign-in credentials.
//!
//! The session store asks a [`CredentialVerifier`] whether a username and
//! password pair is acceptable and which [`User`] it belongs to. Tests and the
//! harness substitute the fixture below; a real deployment would wire an
//! adapter that talks to the personnel service.

use crate::domain::{Error, LoginCredentials, User};

/// Domain use-case port for credential verification.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialVerifier: Send + Sync {
    /// Validate credentials and return the authenticated user.
    fn verify(&self, credentials: &LoginCredentials) -> Result<User, Error>;
}

/// Username accepted by [`FixtureCredentialVerifier`].
pub const FIXTURE_USERNAME: &str = "john.doe";
/// Password accepted by [`FixtureCredentialVerifier`].
pub const FIXTURE_PASSWORD: &str = "password";

/// Development authenticator that accepts exactly one hardcoded pair.
///
/// `john.doe` / `password` authenticates as `CPT John Doe` (id `8675309`).
/// Comparison is exact: no trimming and no case folding.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCredentialVerifier;

impl FixtureCredentialVerifier {
    /// The user every successful fixture login produces.
    pub fn fixture_user() -> Result<User, Error> {
        User::try_from_parts("8675309", FIXTURE_USERNAME, "CPT John Doe", "Captain")
            .map_err(|err| Error::internal(format!("invalid fixture user: {err}")))
    }
}

impl CredentialVerifier for FixtureCredentialVerifier {
    fn verify(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        if credentials.username() == FIXTURE_USERNAME && credentials.password() == FIXTURE_PASSWORD
        {
            Self::fixture_user()
        } else {
            Err(Error::unauthorized("Invalid credentials"))
        }
    }
}
