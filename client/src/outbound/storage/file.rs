//! File-backed key-value store.
//!
//! All keys live in one JSON object (`storage.json`) inside a directory opened
//! with `cap-std`, which keeps the adapter confined to that directory. Each
//! mutation rewrites the document atomically.

use std::collections::BTreeMap;
use std::io;
use std::sync::Mutex;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::debug;

use super::atomic_io::write_atomic;
use crate::domain::ports::{KeyValueStore, KeyValueStoreError};

/// Name of the document holding every stored key.
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Durable store rooted at a directory.
#[derive(Debug)]
pub struct FileKeyValueStore {
    dir: Dir,
    root: Utf8PathBuf,
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Open (creating if needed) the storage directory at `root`.
    pub fn open(root: impl AsRef<Utf8Path>) -> io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        Dir::create_ambient_dir_all(root.as_std_path(), ambient_authority())?;
        let dir = Dir::open_ambient_dir(root.as_std_path(), ambient_authority())?;
        Ok(Self {
            dir,
            root,
            write_lock: Mutex::new(()),
        })
    }

    /// Directory backing this store.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn load(&self) -> io::Result<BTreeMap<String, String>> {
        match self.dir.read_to_string(STORAGE_FILE_NAME) {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> io::Result<()> {
        let raw = serde_json::to_string_pretty(entries)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        write_atomic(&self.dir, Utf8Path::new(STORAGE_FILE_NAME), &raw)
    }

    fn mutate<F>(&self, key: &str, change: F) -> Result<(), KeyValueStoreError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| KeyValueStoreError::write(key, "storage lock poisoned"))?;
        let mut entries = self
            .load()
            .map_err(|err| KeyValueStoreError::write(key, err.to_string()))?;
        change(&mut entries);
        self.save(&entries)
            .map_err(|err| KeyValueStoreError::write(key, err.to_string()))?;
        debug!(key, root = %self.root, "storage document rewritten");
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        let mut entries = self
            .load()
            .map_err(|err| KeyValueStoreError::read(key, err.to_string()))?;
        Ok(entries.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        self.mutate(key, |entries| {
            entries.insert(key.to_owned(), value.to_owned());
        })
    }

    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        self.mutate(key, |entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn root() -> (tempfile::TempDir, Utf8PathBuf) {
        let tmp = tempfile::tempdir().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().join("store")).expect("utf8 temp path");
        (tmp, root)
    }

    #[rstest]
    fn values_survive_reopening(root: (tempfile::TempDir, Utf8PathBuf)) {
        let (_tmp, path) = root;
        let store = FileKeyValueStore::open(&path).expect("open");
        store.set("theme", "dark").expect("set theme");
        store.set("sidebarCollapsed", "true").expect("set sidebar");
        store.remove("sidebarCollapsed").expect("remove sidebar");
        drop(store);

        let reopened = FileKeyValueStore::open(&path).expect("reopen");
        assert_eq!(reopened.get("theme").expect("get").as_deref(), Some("dark"));
        assert_eq!(reopened.get("sidebarCollapsed").expect("get"), None);
    }

    #[rstest]
    fn unreadable_document_is_a_read_error(root: (tempfile::TempDir, Utf8PathBuf)) {
        let (_tmp, path) = root;
        let store = FileKeyValueStore::open(&path).expect("open");
        let dir = Dir::open_ambient_dir(path.as_std_path(), ambient_authority()).expect("open dir");
        dir.write(STORAGE_FILE_NAME, "not json").expect("corrupt file");

        let err = store.get("theme").expect_err("corrupt document");
        assert!(matches!(err, KeyValueStoreError::Read { ref key, .. } if key == "theme"));
    }
}
