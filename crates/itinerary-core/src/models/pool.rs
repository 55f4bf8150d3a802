//! Event-pool model: lightweight calendar days plus a flat pool of events
//! carrying absolute (timezone-naive) start times.

use jiff::civil::{Date, DateTime};
use serde::{Deserialize, Serialize};

use crate::{
    id::{new_id, DAY_PREFIX},
    time::format_clock,
};

/// A calendar day; the events it shows are derived, not stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarDay {
    /// Unique identifier for the day
    pub id: String,

    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: Date,
}

/// A scheduled activity in the pool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier for the event
    pub id: String,

    /// Required, non-blank title
    pub title: String,

    /// Local start time; its date always equals the date of its day
    pub start_at: DateTime,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CalendarDay {
    /// Creates a day for `date` with a fresh identifier.
    pub fn new(date: Date) -> Self {
        Self {
            id: new_id(DAY_PREFIX),
            date,
        }
    }
}

impl Event {
    /// Calendar-date component of the start time.
    pub fn date(&self) -> Date {
        self.start_at.date()
    }

    /// Clock-of-day of the start time as `HH:MM`.
    pub fn clock(&self) -> String {
        format_clock(self.start_at.time())
    }
}
