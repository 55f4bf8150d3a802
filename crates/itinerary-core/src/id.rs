//! Session-scoped identifier generation.
//!
//! Identifiers combine a nanosecond clock reading with a random suffix and an
//! optional namespace prefix, e.g. `item_18c2f0a1b9e3d400_5f3a9c1e`. They are
//! unique for a single user's session with overwhelming probability; no
//! counter is persisted and no stronger guarantee is made.

use jiff::Timestamp;
use uuid::Uuid;

/// Namespace prefix for trip identifiers.
pub const TRIP_PREFIX: &str = "trip";
/// Namespace prefix for day identifiers.
pub const DAY_PREFIX: &str = "day";
/// Namespace prefix for item identifiers.
pub const ITEM_PREFIX: &str = "item";
/// Namespace prefix for event identifiers.
pub const EVENT_PREFIX: &str = "event";

const RANDOM_LEN: usize = 8;

/// Produces a new identifier, namespaced by `prefix` when it is non-empty.
///
/// ```rust
/// use itinerary_core::id::new_id;
///
/// let id = new_id("day");
/// assert!(id.starts_with("day_"));
/// assert_ne!(id, new_id("day"));
/// ```
pub fn new_id(prefix: &str) -> String {
    let clock = Timestamp::now().as_nanosecond();
    let random = Uuid::new_v4().simple().to_string();
    let random = &random[..RANDOM_LEN];

    if prefix.is_empty() {
        format!("{clock:x}_{random}")
    } else {
        format!("{prefix}_{clock:x}_{random}")
    }
}
