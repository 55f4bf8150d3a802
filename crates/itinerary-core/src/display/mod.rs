//! Display formatting for itinerary output.
//!
//! Domain models implement [`std::fmt::Display`] directly and produce
//! markdown; the wrappers here add collection handling and operation
//! feedback on top, so the CLI renders everything through one path.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Markdown      │
//! │ (Trip, Event)   │───▶│ Result Types    │───▶│   (terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (`Items`, `Schedules`)
//! - [`results`]: Operation results (`CreateResult`, `UpdateResult`, `DeleteResult`)
//! - [`status`]: Confirmation messages (`OperationStatus`)
//! - [`datetime`]: Timestamp formatting in the local zone
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use itinerary_core::{display::OperationStatus, gateway::SaveStatus};
//!
//! let done = OperationStatus::success("Trip renamed".to_string());
//! assert!(done.to_string().contains("Success:"));
//!
//! let failed = SaveStatus::Failed { reason: "quota".to_string() };
//! let warning = OperationStatus::from_save(&failed);
//! assert!(warning.is_some());
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Items, Schedules};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
