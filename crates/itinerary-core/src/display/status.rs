//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::gateway::SaveStatus;

/// Confirmation or warning line shown after an operation.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }

    /// A warning for a write that did not reach the store, `None` when it did.
    ///
    /// The change itself still happened; only its durability is in doubt.
    pub fn from_save(status: &SaveStatus) -> Option<Self> {
        match status {
            SaveStatus::Saved => None,
            SaveStatus::Failed { reason } => Some(Self::failure(format!(
                "Change kept in memory but not saved: {reason}"
            ))),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}
