//! Session configuration: persistence keys and first-run seeding.

use std::path::PathBuf;

use jiff::civil::Date;

use crate::{
    error::{ItineraryError, Result},
    time::today,
};

/// Key of the persisted trip document (day-owns-items model).
pub const TRIP_KEY: &str = "itinerary.trip.v1";
/// Key of the persisted day list (event-pool model).
pub const DAYS_KEY: &str = "itinerary.days.v1";
/// Key of the persisted event pool (event-pool model).
pub const EVENTS_KEY: &str = "itinerary.events.v1";

/// Days created when nothing has been persisted yet.
pub const DEFAULT_SEED_DAYS: usize = 3;
/// Minutes from now used for an event added without a time.
pub const DEFAULT_EVENT_LEAD_MINUTES: i64 = 60;

/// Application directory name under the XDG data home.
const APP_DIR: &str = "itinerary";
const STORE_DIR: &str = "store";

/// Versioned storage keys for each persisted aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub trip: String,
    pub days: String,
    pub events: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            trip: TRIP_KEY.to_string(),
            days: DAYS_KEY.to_string(),
            events: EVENTS_KEY.to_string(),
        }
    }
}

/// Settings shared by both session kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Where each aggregate is persisted
    pub keys: StorageKeys,

    /// Number of days seeded on first run
    pub seed_days: usize,

    /// Date of the first seeded calendar day; today when `None`
    pub seed_start: Option<Date>,

    /// Lead time for events added without an explicit time
    pub default_lead_minutes: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            seed_days: DEFAULT_SEED_DAYS,
            seed_start: None,
            default_lead_minutes: DEFAULT_EVENT_LEAD_MINUTES,
        }
    }
}

impl SessionConfig {
    /// The first seeded calendar date.
    pub fn seed_start_date(&self) -> Date {
        self.seed_start.unwrap_or_else(today)
    }
}

/// Default store directory following the XDG Base Directory specification:
/// `$XDG_DATA_HOME/itinerary/store` or `~/.local/share/itinerary/store`.
pub fn default_store_dir() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix(APP_DIR)
        .place_data_file(STORE_DIR)
        .map_err(|e| ItineraryError::XdgDirectory(e.to_string()))
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_default_keys_are_versioned_and_distinct() {
        let keys = StorageKeys::default();
        assert!(keys.trip.ends_with(".v1"));
        assert_ne!(keys.days, keys.events);
    }

    #[test]
    fn test_seed_start_override() {
        let config = SessionConfig {
            seed_start: Some(date(2026, 2, 5)),
            ..SessionConfig::default()
        };
        assert_eq!(config.seed_start_date(), date(2026, 2, 5));
        assert_eq!(SessionConfig::default().seed_days, DEFAULT_SEED_DAYS);
    }
}
