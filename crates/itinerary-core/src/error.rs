//! Error types for the itinerary library.

use std::fmt;

use thiserror::Error;

/// Comprehensive error type for all itinerary operations.
///
/// Mutating session operations only ever return an error before any state
/// has changed, so an `Err` always means "nothing happened".
#[derive(Error, Debug)]
pub enum ItineraryError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Day not found for the given ID
    #[error("Day with ID {id} not found")]
    DayNotFound { id: String },
    /// Item not found for the given ID
    #[error("Item with ID {id} not found")]
    ItemNotFound { id: String },
    /// Event not found for the given ID
    #[error("Event with ID {id} not found")]
    EventNotFound { id: String },
    /// Date or clock-of-day text that could not be understood
    #[error("Invalid time '{input}': {reason}")]
    InvalidTime { input: String, reason: String },
    /// Key-value store read or write errors
    #[error("Storage error for key '{key}': {source}")]
    Storage {
        key: String,
        #[source]
        source: std::io::Error,
    },
    /// The store refused a write because it would exceed its capacity
    #[error("Storage quota of {limit} bytes exceeded while writing '{key}'")]
    QuotaExceeded { key: String, limit: usize },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ItineraryError {
        ItineraryError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ItineraryError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an invalid time error for the given raw input.
    pub fn invalid_time(input: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::InvalidTime {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    /// Wraps an I/O error raised while touching the given storage key.
    pub fn storage(key: impl Into<String>, source: std::io::Error) -> Self {
        Self::Storage {
            key: key.into(),
            source,
        }
    }
}

/// Extension trait for attaching a storage key to I/O results.
pub trait StorageResultExt<T> {
    /// Map I/O errors to [`ItineraryError::Storage`] for `key`.
    fn storage_context(self, key: &str) -> Result<T>;
}

impl<T> StorageResultExt<T> for std::result::Result<T, std::io::Error> {
    fn storage_context(self, key: &str) -> Result<T> {
        self.map_err(|e| ItineraryError::storage(key, e))
    }
}

/// Result type alias for itinerary operations
pub type Result<T> = std::result::Result<T, ItineraryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = ItineraryError::invalid_input("title").with_reason("Title is required");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'title': Title is required"
        );
    }

    #[test]
    fn test_storage_context_keeps_key() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = io.storage_context("itinerary.trip.v1").unwrap_err();
        assert!(err.to_string().contains("itinerary.trip.v1"));
        assert!(matches!(err, ItineraryError::Storage { .. }));
    }
}
