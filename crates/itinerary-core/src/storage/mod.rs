//! Synchronous string-keyed storage.
//!
//! [`KeyValueStore`] is the raw primitive everything durable goes through:
//! get and set of whole string values by key. The core never interprets keys
//! beyond passing them through, and never retries a failed call.
//!
//! Two backends ship with the crate:
//!
//! - [`MemoryStore`]: in-process map with an optional size quota
//! - [`FileStore`]: one file per key inside a directory

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// A synchronous key-value store holding string values.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, or `None` when nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: String) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        (**self).set(key, value)
    }
}
