//! Parameter structures for itinerary operations
//!
//! These structures carry caller input into the session operations without
//! any framework-specific derives. Interface layers (the CLI today) define
//! their own argument types and convert into these with `From` impls:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Sessions     │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (trip / pool)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Text fields are taken as typed by the user; trimming, time normalisation
//! and the non-blank title rule are applied by the sessions.

use serde::{Deserialize, Serialize};

use crate::ordering::Direction;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: String,
}

/// Parameters for appending a day to a trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddDay {
    /// Optional label; "Day N" when omitted
    pub label: Option<String>,
    /// Optional free-text calendar date
    pub date_text: Option<String>,
}

/// Parameters for adding an item to a trip day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddItem {
    /// ID of the day to add the item to
    pub day_id: String,
    /// Title of the item (required, non-blank)
    pub title: String,
    /// Optional clock-of-day
    pub time: Option<String>,
    /// Optional location
    pub location: Option<String>,
    /// Optional note
    pub note: Option<String>,
}

/// Parameters for editing an item. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItem {
    /// ID of the item to update
    pub id: String,
    pub title: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub note: Option<String>,
}

/// Parameters for swapping two items of the same day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwapItems {
    /// ID of the first item to swap
    pub first_id: String,
    /// ID of the second item to swap
    pub second_id: String,
}

/// Parameters for moving an item one place up or down in its day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveItem {
    /// ID of the item to move
    pub id: String,
    /// Direction to move in
    pub direction: Direction,
}

/// Parameters for appending a calendar day to the event pool's day list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddCalendarDay {
    /// Optional `YYYY-MM-DD`; the day after the latest day when omitted
    pub date: Option<String>,
}

/// Parameters for adding an event to the pool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddEvent {
    /// Title of the event (required, non-blank)
    pub title: String,
    /// Raw time input; only its clock-of-day is used
    pub time: Option<String>,
    pub location: Option<String>,
    pub note: Option<String>,
    /// Day to file the event under; the active day when omitted
    pub day_id: Option<String>,
}

/// Parameters for editing an event. `None` leaves a field unchanged; an
/// empty location or note clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEvent {
    /// ID of the event to update
    pub id: String,
    pub title: Option<String>,
    /// Raw time input; re-anchored onto the event's current date
    pub time: Option<String>,
    pub location: Option<String>,
    pub note: Option<String>,
}

/// Parameters for refiling an event under another day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveEvent {
    /// ID of the event to move
    pub id: String,
    /// ID of the destination day
    pub day_id: String,
}
