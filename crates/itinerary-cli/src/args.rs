//! Command-line interface definitions using clap
//!
//! The argument structs here carry clap derives and convert into the core
//! parameter types with `From` impls, so the core never depends on clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Session
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use itinerary_core::{params::*, Direction};

/// Plan a multi-day trip from the terminal
///
/// Itinerary keeps a trip of days and their scheduled items, or a pool of
/// timed events grouped by calendar day, and saves every change straight
/// away to a local store.
#[derive(Parser)]
#[command(version, about, name = "itinerary")]
pub struct Args {
    /// Directory holding the saved itinerary. Defaults to
    /// $XDG_DATA_HOME/itinerary/store
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
///
/// - `trip`, `day`, `item`: the trip whose days own their items
/// - `pool`, `event`: calendar days with a pool of timed events
#[derive(Subcommand)]
pub enum Commands {
    /// Show or edit the trip
    #[command(alias = "t")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// Manage days of the trip
    #[command(alias = "d")]
    Day {
        #[command(subcommand)]
        command: DayCommands,
    },
    /// Manage items within trip days
    #[command(alias = "i")]
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
    /// Show or edit the calendar days of the event pool
    #[command(alias = "p")]
    Pool {
        #[command(subcommand)]
        command: PoolCommands,
    },
    /// Manage events in the pool
    #[command(alias = "e")]
    Event {
        #[command(subcommand)]
        command: EventCommands,
    },
}

/// Export the current state as a JSON document
#[derive(ClapArgs)]
pub struct ExportArgs {
    /// Directory to write the export into
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,
}

#[derive(Subcommand)]
pub enum TripCommands {
    /// Show the trip with every day and item
    #[command(alias = "s")]
    Show,
    /// Rename the trip
    Rename {
        /// New name of the trip
        name: String,
    },
    /// Set the free-text date range
    Dates {
        /// Date range label, e.g. "Feb 5 - Feb 8"
        label: String,
    },
    /// Discard everything and start over with empty days
    Reset,
    /// Export the trip as JSON
    Export(ExportArgs),
}

/// Append a day to the trip
#[derive(ClapArgs)]
pub struct AddDayArgs {
    #[arg(short, long, help = "Label of the day (defaults to \"Day N\")")]
    pub label: Option<String>,
    #[arg(short, long, help = "Free-text calendar date of the day")]
    pub date: Option<String>,
}

impl From<AddDayArgs> for AddDay {
    fn from(val: AddDayArgs) -> Self {
        AddDay {
            label: val.label,
            date_text: val.date,
        }
    }
}

#[derive(Subcommand)]
pub enum DayCommands {
    /// Append a day to the trip
    #[command(alias = "a")]
    Add(AddDayArgs),
}

/// Add an item to a day
#[derive(ClapArgs)]
pub struct AddItemArgs {
    #[arg(help = "ID of the day to add the item to")]
    pub day_id: String,
    /// Title of the item
    pub title: String,
    #[arg(short, long, help = "Time of day, e.g. 09:30")]
    pub time: Option<String>,
    #[arg(short, long, help = "Where it happens")]
    pub location: Option<String>,
    #[arg(short, long, help = "Free-text note")]
    pub note: Option<String>,
}

impl From<AddItemArgs> for AddItem {
    fn from(val: AddItemArgs) -> Self {
        AddItem {
            day_id: val.day_id,
            title: val.title,
            time: val.time,
            location: val.location,
            note: val.note,
        }
    }
}

/// Edit an item; only the given fields change
#[derive(ClapArgs)]
pub struct UpdateItemArgs {
    #[arg(help = "ID of the item to update")]
    pub id: String,
    #[arg(long, help = "New title")]
    pub title: Option<String>,
    #[arg(short, long, help = "New time of day; restores time order for the day")]
    pub time: Option<String>,
    #[arg(short, long, help = "New location (empty to clear)")]
    pub location: Option<String>,
    #[arg(short, long, help = "New note (empty to clear)")]
    pub note: Option<String>,
}

impl From<UpdateItemArgs> for UpdateItem {
    fn from(val: UpdateItemArgs) -> Self {
        UpdateItem {
            id: val.id,
            title: val.title,
            time: val.time,
            location: val.location,
            note: val.note,
        }
    }
}

/// Identifies a single item or event
#[derive(ClapArgs)]
pub struct IdArgs {
    #[arg(help = "Unique identifier")]
    pub id: String,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Swap two items of the same day
#[derive(ClapArgs)]
pub struct SwapItemsArgs {
    #[arg(help = "ID of the first item to swap")]
    pub first_id: String,
    #[arg(help = "ID of the second item to swap")]
    pub second_id: String,
}

impl From<SwapItemsArgs> for SwapItems {
    fn from(val: SwapItemsArgs) -> Self {
        SwapItems {
            first_id: val.first_id,
            second_id: val.second_id,
        }
    }
}

#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add an item to a day
    #[command(alias = "a")]
    Add(AddItemArgs),
    /// Edit an item
    #[command(alias = "u")]
    Update(UpdateItemArgs),
    /// Delete an item
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
    /// Swap two items of the same day
    #[command(alias = "sw")]
    Swap(SwapItemsArgs),
    /// Move an item one place earlier in its day
    Up(IdArgs),
    /// Move an item one place later in its day
    Down(IdArgs),
    /// Print a map search link for the item's location
    Map(IdArgs),
}

impl IdArgs {
    /// Move parameters for `item up` / `item down`.
    pub fn moved(self, direction: Direction) -> MoveItem {
        MoveItem {
            id: self.id,
            direction,
        }
    }
}

/// Append a calendar day
#[derive(ClapArgs)]
pub struct AddCalendarDayArgs {
    #[arg(short, long, help = "Date as YYYY-MM-DD (defaults to the day after the last day)")]
    pub date: Option<String>,
}

impl From<AddCalendarDayArgs> for AddCalendarDay {
    fn from(val: AddCalendarDayArgs) -> Self {
        AddCalendarDay { date: val.date }
    }
}

#[derive(Subcommand)]
pub enum PoolDayCommands {
    /// Append a calendar day
    #[command(alias = "a")]
    Add(AddCalendarDayArgs),
}

#[derive(Subcommand)]
pub enum PoolCommands {
    /// Show every day with its events
    #[command(alias = "s")]
    Show,
    /// Manage calendar days
    Day {
        #[command(subcommand)]
        command: PoolDayCommands,
    },
    /// Discard every day and event and reseed the days
    Reset,
    /// Export days and events as JSON
    Export(ExportArgs),
}

/// Add an event to a day
#[derive(ClapArgs)]
pub struct AddEventArgs {
    /// Title of the event
    pub title: String,
    #[arg(
        short,
        long,
        help = "Time of day; a date in it is ignored (defaults to an hour from now)"
    )]
    pub time: Option<String>,
    #[arg(short, long, help = "Where it happens")]
    pub location: Option<String>,
    #[arg(short, long, help = "Free-text note")]
    pub note: Option<String>,
    #[arg(short, long, help = "ID of the day to file the event under (defaults to the first day)")]
    pub day: Option<String>,
}

impl From<AddEventArgs> for AddEvent {
    fn from(val: AddEventArgs) -> Self {
        AddEvent {
            title: val.title,
            time: val.time,
            location: val.location,
            note: val.note,
            day_id: val.day,
        }
    }
}

/// Edit an event; only the given fields change
#[derive(ClapArgs)]
pub struct UpdateEventArgs {
    #[arg(help = "ID of the event to update")]
    pub id: String,
    #[arg(long, help = "New title")]
    pub title: Option<String>,
    #[arg(short, long, help = "New time of day, kept on the event's day")]
    pub time: Option<String>,
    #[arg(short, long, help = "New location (empty to clear)")]
    pub location: Option<String>,
    #[arg(short, long, help = "New note (empty to clear)")]
    pub note: Option<String>,
}

impl From<UpdateEventArgs> for UpdateEvent {
    fn from(val: UpdateEventArgs) -> Self {
        UpdateEvent {
            id: val.id,
            title: val.title,
            time: val.time,
            location: val.location,
            note: val.note,
        }
    }
}

/// Refile an event under another day
#[derive(ClapArgs)]
pub struct MoveEventArgs {
    #[arg(help = "ID of the event to move")]
    pub id: String,
    #[arg(help = "ID of the destination day")]
    pub day_id: String,
}

impl From<MoveEventArgs> for MoveEvent {
    fn from(val: MoveEventArgs) -> Self {
        MoveEvent {
            id: val.id,
            day_id: val.day_id,
        }
    }
}

#[derive(Subcommand)]
pub enum EventCommands {
    /// Add an event
    #[command(alias = "a")]
    Add(AddEventArgs),
    /// Edit an event
    #[command(alias = "u")]
    Update(UpdateEventArgs),
    /// Delete an event
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
    /// Refile an event under another day
    #[command(alias = "mv")]
    Move(MoveEventArgs),
    /// Print a map search link for the event's location
    Map(IdArgs),
}
