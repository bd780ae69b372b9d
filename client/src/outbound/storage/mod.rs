//! Key-value storage adapters.

mod atomic_io;
mod file;
mod memory;

pub use file::{FileKeyValueStore, STORAGE_FILE_NAME};
pub use memory::InMemoryKeyValueStore;
