//! In-memory key-value store.

use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::{ItineraryError, Result};

/// A [`KeyValueStore`] backed by a `HashMap`.
///
/// An optional quota caps the total size of all stored values in bytes;
/// a write that would exceed it is refused and leaves the store unchanged.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Creates an empty, unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store refusing writes past `quota` bytes in total.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            values: HashMap::new(),
            quota: Some(quota),
        }
    }

    /// Changes the quota; `None` removes it.
    pub fn set_quota(&mut self, quota: Option<usize>) {
        self.quota = quota;
    }

    /// Total bytes held across all values.
    pub fn used_bytes(&self) -> usize {
        self.values.values().map(String::len).sum()
    }

    /// Whether anything is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Reads the raw value under `key` without going through the trait.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        if let Some(limit) = self.quota {
            let replaced = self.values.get(key).map_or(0, String::len);
            let after = self.used_bytes() - replaced + value.len();
            if after > limit {
                return Err(ItineraryError::QuotaExceeded {
                    key: key.to_string(),
                    limit,
                });
            }
        }
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut store = MemoryStore::new();
        store.set("k", "v1".to_string()).unwrap();
        store.set("k", "v2".to_string()).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.used_bytes(), 2);
    }

    #[test]
    fn test_quota_refuses_and_keeps_previous_value() {
        let mut store = MemoryStore::with_quota(8);
        store.set("k", "12345".to_string()).unwrap();

        let err = store.set("k", "123456789".to_string()).unwrap_err();
        assert!(matches!(err, ItineraryError::QuotaExceeded { limit: 8, .. }));
        assert_eq!(store.raw("k"), Some("12345"));

        // Replacing counts the old value as freed.
        store.set("k", "12345678".to_string()).unwrap();
    }
}
