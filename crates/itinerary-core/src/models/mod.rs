//! Data models for trips, days, items and events.
//!
//! Two models of the same itinerary live side by side:
//!
//! - **Day-owns-items** ([`Trip`], [`Day`], [`Item`]): a trip owns an ordered
//!   list of days and each day owns its items. Item times are bare `HH:MM`
//!   strings scoped to the owning day. Order within a day is derived from the
//!   time of day unless a manual order has been recorded by a swap.
//! - **Event pool** ([`CalendarDay`], [`Event`]): days are just an identifier
//!   and a strict calendar date; events live in one flat pool with absolute
//!   local start times and are grouped into days by date (see
//!   [`crate::grouping`]).
//!
//! Both serialize with camelCase keys so persisted documents keep the shapes
//! `{ id, name, dateRange, updatedAt, days: [{ id, label, dateText, items }] }`
//! and `[{ id, date }]` / `[{ id, title, startAt, location?, note? }]`.
//!
//! # Examples
//!
//! ```rust
//! use itinerary_core::models::Trip;
//!
//! let trip = Trip::seeded(3);
//! assert_eq!(trip.days.len(), 3);
//! assert_eq!(trip.days[2].label, "Day 3");
//! assert_eq!(trip.item_count(), 0);
//! ```

use jiff::{Timestamp, ToSpan};

pub mod pool;
pub mod trip;


pub use pool::{CalendarDay, Event};
pub use trip::{Day, Item, Trip, DEFAULT_TRIP_NAME};

/// The current time, or one nanosecond past `previous` when the clock has
/// not moved on, so modification stamps are strictly increasing.
pub(crate) fn refreshed(previous: Timestamp) -> Timestamp {
    let now = Timestamp::now();
    if now > previous {
        now
    } else {
        previous.checked_add(1.nanosecond()).unwrap_or(now)
    }
}
