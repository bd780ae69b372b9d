//! Port for durable client-side key-value storage.
//!
//! Models the browser's local storage: string keys, string values, survives
//! restarts. Adapters live under `outbound::storage`.

use super::define_port_error;

define_port_error! {
    /// Errors raised by key-value storage adapters.
    pub enum KeyValueStoreError {
        /// The backing store could not be read.
        Read { key: String, message: String } =>
            "failed to read storage key {key}: {message}",
        /// The backing store rejected a write or removal.
        Write { key: String, message: String } =>
            "failed to write storage key {key}: {message}",
    }
}

/// Port for string-keyed durable storage.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;

    /// Delete `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;
}
