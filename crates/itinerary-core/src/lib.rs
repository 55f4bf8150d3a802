//! Core library for the Itinerary trip planner.
//!
//! This crate holds the itinerary data model and its local persistence: days
//! and the scheduled activities in them, kept in memory by a session and
//! written through to a string key-value store after every change.
//!
//! Two models of the same itinerary are provided:
//!
//! - **Day-owns-items** ([`TripSession`]): a [`Trip`] owns its [`Day`]s and
//!   each day owns its [`Item`]s, timed by a bare `HH:MM` clock.
//! - **Event pool** ([`PoolSession`]): lightweight [`CalendarDay`]s plus a
//!   flat pool of [`Event`]s with absolute start times, grouped into days by
//!   calendar date.
//!
//! # Display Architecture
//!
//! Domain models implement [`std::fmt::Display`] as markdown and the
//! [`display`] wrappers add collection and operation-result formatting; the
//! CLI renders that markdown in the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use itinerary_core::{
//!     params::{AddEvent, Id},
//!     storage::MemoryStore,
//!     PoolSession, SessionConfig,
//! };
//!
//! let config = SessionConfig {
//!     seed_start: Some(jiff::civil::date(2026, 2, 5)),
//!     ..SessionConfig::default()
//! };
//! let mut session = PoolSession::open(MemoryStore::new(), config);
//!
//! let first_day = session.days()[0].id.clone();
//! session.select_day(&Id { id: first_day }).unwrap();
//!
//! let event = session
//!     .add_event(&AddEvent {
//!         title: "Shibuya Sky".to_string(),
//!         time: Some("14:30".to_string()),
//!         ..Default::default()
//!     })
//!     .unwrap();
//! assert_eq!(event.start_at.to_string(), "2026-02-05T14:30:00");
//!
//! for schedule in session.schedules() {
//!     println!("{schedule}");
//! }
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod gateway;
pub mod grouping;
pub mod id;
pub mod maplink;
pub mod models;
pub mod ordering;
pub mod params;
pub mod session;
pub mod storage;
pub mod time;

// Re-export commonly used types
pub use config::{SessionConfig, StorageKeys};
pub use display::{CreateResult, DeleteResult, Items, OperationStatus, Schedules, UpdateResult};
pub use error::{ItineraryError, Result};
pub use export::ExportFile;
pub use gateway::{Loaded, SaveStatus};
pub use grouping::{DaySchedule, EventIndex};
pub use maplink::MapOpener;
pub use models::{CalendarDay, Day, Event, Item, Trip};
pub use ordering::Direction;
pub use session::{PoolSession, SessionBuilder, TripSession};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
