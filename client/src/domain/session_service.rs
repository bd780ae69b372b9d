//! Session lifecycle: hydration, login and logout.
//!
//! The store owns at most one authenticated [`User`] and mirrors it to durable
//! storage under [`USER_STORAGE_KEY`]. The in-memory value only changes after
//! the storage side effect succeeded, so both views agree once an operation
//! returns.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::ports::{CredentialVerifier, KeyValueStore, KeyValueStoreError};
use crate::domain::{Error, LoginCredentials, User};

/// Storage key holding the JSON-encoded signed-in user.
pub const USER_STORAGE_KEY: &str = "handreceiptUser";

/// Authenticated-session store backed by injected ports.
pub struct SessionStore<V: ?Sized, S: ?Sized> {
    verifier: Arc<V>,
    storage: Arc<S>,
    user: Option<User>,
}

impl<V, S> SessionStore<V, S>
where
    V: CredentialVerifier + ?Sized,
    S: KeyValueStore + ?Sized,
{
    /// Build a store, restoring any session persisted by a previous run.
    ///
    /// A persisted record is trusted without re-validating the credentials.
    /// A record that does not decode as a [`User`] yields
    /// [`ErrorCode::CorruptState`](crate::domain::ErrorCode::CorruptState).
    pub fn hydrate(verifier: Arc<V>, storage: Arc<S>) -> Result<Self, Error> {
        let raw = storage.get(USER_STORAGE_KEY).map_err(map_storage_error)?;
        let user = match raw {
            Some(raw) => {
                let user: User = serde_json::from_str(&raw).map_err(|err| {
                    Error::corrupt_state(format!("persisted session is unreadable: {err}"))
                })?;
                debug!(user_id = %user.id(), "restored persisted session");
                Some(user)
            }
            None => None,
        };
        Ok(Self {
            verifier,
            storage,
            user,
        })
    }

    /// Attempt to sign in with the given form values.
    ///
    /// On success the user is persisted and becomes the current session. Any
    /// rejected pair returns an [`ErrorCode::Unauthorized`] error and leaves
    /// both memory and storage as they were.
    ///
    /// [`ErrorCode::Unauthorized`]: crate::domain::ErrorCode::Unauthorized
    pub fn login(&mut self, username: &str, password: &str) -> Result<&User, Error> {
        let credentials = LoginCredentials::try_from_parts(username, password).map_err(|err| {
            warn!(%err, "login rejected: malformed credentials");
            Error::unauthorized("Invalid credentials")
        })?;
        let user = self.verifier.verify(&credentials).inspect_err(|err| {
            warn!(username = credentials.username(), code = ?err.code(), "login rejected");
        })?;

        let record = serde_json::to_string(&user)
            .map_err(|err| Error::internal(format!("failed to encode session: {err}")))?;
        self.storage
            .set(USER_STORAGE_KEY, &record)
            .map_err(map_storage_error)?;

        info!(user_id = %user.id(), "login accepted");
        Ok(&*self.user.insert(user))
    }

    /// End the current session. Calling it while signed out is a no-op
    /// apart from re-deleting the (absent) record.
    pub fn logout(&mut self) -> Result<(), Error> {
        self.storage
            .remove(USER_STORAGE_KEY)
            .map_err(map_storage_error)?;
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id(), "logged out");
        }
        Ok(())
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

pub(crate) fn map_storage_error(error: KeyValueStoreError) -> Error {
    match &error {
        KeyValueStoreError::Read { key, .. } | KeyValueStoreError::Write { key, .. } => {
            Error::storage(error.to_string()).with_details(serde_json::json!({ "key": key }))
        }
    }
}
