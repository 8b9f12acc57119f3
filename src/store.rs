//! Persistent key-value storage.
//!
//! The application keeps exactly one value, the favorites list, but talks to storage
//! through a small string key-value interface so the backing store can be swapped:
//! a JSON file on disk in production, an in-memory map in tests.

use crate::error::Result;

pub mod favorites;
pub mod file;
pub mod memory;

pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// String key-value store with local-storage semantics.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` when the key is absent
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}
