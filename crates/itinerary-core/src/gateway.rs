//! Load/save round-trip of aggregates through a [`KeyValueStore`].
//!
//! Nothing in here fails upward. A missing, unreadable or unparseable value
//! loads as [`Loaded::Absent`] so the caller can seed defaults, and a write
//! the store refuses is reported as [`SaveStatus::Failed`] while the caller's
//! in-memory state stays authoritative. Writes are attempted exactly once.

use log::warn;
use serde::{de::DeserializeOwned, Serialize};

use crate::storage::KeyValueStore;

/// Outcome of reading a persisted aggregate.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    /// A value was stored and parsed successfully
    Parsed(T),
    /// Nothing usable is stored; the caller seeds defaults
    Absent,
}

/// Outcome of writing a persisted aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SaveStatus {
    /// The value is durable
    #[default]
    Saved,
    /// The write was refused; only durability of this write is lost
    Failed { reason: String },
}

impl<T> Loaded<T> {
    /// Converts into an `Option`, `None` for [`Loaded::Absent`].
    pub fn into_option(self) -> Option<T> {
        match self {
            Loaded::Parsed(value) => Some(value),
            Loaded::Absent => None,
        }
    }

    /// Whether nothing usable was stored.
    pub fn is_absent(&self) -> bool {
        matches!(self, Loaded::Absent)
    }
}

impl SaveStatus {
    /// Whether the write reached the store.
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveStatus::Saved)
    }

    /// Keeps the first failure when combining the statuses of writes that
    /// belong together.
    pub fn and(self, other: SaveStatus) -> SaveStatus {
        match self {
            SaveStatus::Saved => other,
            failed => failed,
        }
    }
}

/// Reads and parses the value stored under `key`.
pub fn load<T, S>(store: &S, key: &str) -> Loaded<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Loaded::Absent,
        Err(e) => {
            warn!("Could not read '{key}', treating as absent: {e}");
            return Loaded::Absent;
        }
    };

    if raw.trim().is_empty() {
        return Loaded::Absent;
    }

    match serde_json::from_str(&raw) {
        Ok(value) => Loaded::Parsed(value),
        Err(e) => {
            warn!("Discarding unparseable value under '{key}': {e}");
            Loaded::Absent
        }
    }
}

/// Serializes `value` and writes it under `key`.
pub fn save<T, S>(store: &mut S, key: &str, value: &T) -> SaveStatus
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Could not serialize value for '{key}': {e}");
            return SaveStatus::Failed {
                reason: e.to_string(),
            };
        }
    };

    match store.set(key, raw) {
        Ok(()) => SaveStatus::Saved,
        Err(e) => {
            warn!("Write to '{key}' failed, keeping in-memory state: {e}");
            SaveStatus::Failed {
                reason: e.to_string(),
            }
        }
    }
}
