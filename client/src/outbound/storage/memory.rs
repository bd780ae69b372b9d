//! In-memory key-value store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::domain::ports::{KeyValueStore, KeyValueStoreError};

/// Volatile store used by tests and as a stand-in when no directory is set.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl InMemoryKeyValueStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            ),
        }
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries
            .read()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| KeyValueStoreError::read(key, "storage lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| KeyValueStoreError::write(key, "storage lock poisoned"))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| KeyValueStoreError::write(key, "storage lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}
