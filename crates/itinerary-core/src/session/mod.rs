//! Session API owning the in-memory itinerary and its persistence.
//!
//! A session is the explicit state object for one running process: it owns
//! the aggregate, the [`KeyValueStore`] it is persisted to, and the
//! configuration naming the storage keys. Two kinds exist, one per model:
//!
//! - [`TripSession`]: the day-owns-items [`Trip`]
//! - [`PoolSession`]: the event-pool day list and [`Event`] pool
//!
//! # Write-through
//!
//! Every mutating operation goes through a single commit step: the change is
//! applied to a draft copy, validated, swapped in, and immediately written to
//! the store. A rejected change (blank title, unknown identifier) returns an
//! error before anything is swapped in or written. A refused write never
//! fails the operation; it is kept as [`TripSession::last_save`] /
//! [`PoolSession::last_save`] and the in-memory state stays authoritative.
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  operation   │──▶│ draft change │──▶│  swap in +   │──▶│ gateway save │
//! │ (trip_ops /  │   │ + validation │   │ touch        │   │ (write once) │
//! │  pool_ops)   │   └──────────────┘   └──────────────┘   └──────────────┘
//! └──────────────┘          │ Err: nothing changed, nothing written
//! ```
//!
//! # Usage
//!
//! ```rust
//! use itinerary_core::{params::AddItem, storage::MemoryStore, SessionConfig, TripSession};
//!
//! let mut session = TripSession::open(MemoryStore::new(), SessionConfig::default());
//! let day_id = session.trip().days[0].id.clone();
//!
//! let item = session
//!     .add_item(&AddItem {
//!         day_id: day_id.clone(),
//!         title: "Tsukiji breakfast".to_string(),
//!         time: Some("7:30".to_string()),
//!         ..Default::default()
//!     })
//!     .unwrap();
//! assert_eq!(item.time, "07:30");
//! assert!(session.last_save().is_saved());
//! ```

use crate::{
    config::SessionConfig,
    gateway::SaveStatus,
    grouping::EventIndex,
    models::{CalendarDay, Event, Trip},
    storage::KeyValueStore,
};

pub mod builder;
pub mod pool_ops;
pub mod trip_ops;


pub use builder::SessionBuilder;

/// Session over the day-owns-items model.
pub struct TripSession<S: KeyValueStore> {
    pub(crate) store: S,
    pub(crate) config: SessionConfig,
    pub(crate) trip: Trip,
    pub(crate) last_save: SaveStatus,
}

/// Session over the event-pool model.
///
/// The day list and the event pool are persisted under separate keys and
/// written independently; both are read at startup.
pub struct PoolSession<S: KeyValueStore> {
    pub(crate) store: S,
    pub(crate) config: SessionConfig,
    pub(crate) days: Vec<CalendarDay>,
    pub(crate) events: Vec<Event>,
    pub(crate) index: EventIndex,
    pub(crate) active_day: Option<String>,
    pub(crate) last_save: SaveStatus,
}

impl<S: KeyValueStore> TripSession<S> {
    /// The current trip.
    pub fn trip(&self) -> &Trip {
        &self.trip
    }

    /// Outcome of the most recent write.
    pub fn last_save(&self) -> &SaveStatus {
        &self.last_save
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The underlying store, e.g. to change its quota in tests.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Consumes the session, handing back its store.
    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: KeyValueStore> PoolSession<S> {
    /// The day list in display order.
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// The event pool in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Outcome of the most recent write.
    pub fn last_save(&self) -> &SaveStatus {
        &self.last_save
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The underlying store, e.g. to change its quota in tests.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Consumes the session, handing back its store.
    pub fn into_store(self) -> S {
        self.store
    }
}
