//! Portable JSON export of the current state.
//!
//! Building an export is a pure transformation: the caller supplies the
//! export time and receives the file name and document text, and writing or
//! downloading the file is left to the caller.

use jiff::{civil::DateTime, Timestamp};
use serde::Serialize;

use crate::{
    error::Result,
    grouping::chronological,
    models::{CalendarDay, Event, Trip},
};

/// File stem used when a trip name has nothing usable in it.
pub const FALLBACK_STEM: &str = "itinerary";

/// A ready-to-write export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Suggested file name, safe for common filesystems
    pub file_name: String,
    /// Pretty-printed JSON document
    pub contents: String,
}

/// Export document for the day-owns-items model: the trip itself plus
/// `exportedAt`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripExport<'a> {
    #[serde(flatten)]
    pub trip: &'a Trip,
    pub exported_at: Timestamp,
}

/// Export document for the event-pool model. Events are always emitted in
/// chronological order, whatever their order in memory.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolExport<'a> {
    pub days: &'a [CalendarDay],
    pub events: Vec<&'a Event>,
    pub exported_at: Timestamp,
}

impl<'a> TripExport<'a> {
    /// Wraps `trip` for export at `exported_at`.
    pub fn new(trip: &'a Trip, exported_at: Timestamp) -> Self {
        Self { trip, exported_at }
    }

    /// Renders the document and its file name, derived from the trip name.
    pub fn render(&self) -> Result<ExportFile> {
        Ok(ExportFile {
            file_name: trip_file_name(&self.trip.name),
            contents: serde_json::to_string_pretty(self)?,
        })
    }
}

impl<'a> PoolExport<'a> {
    /// Wraps the day list and event pool for export at `exported_at`.
    pub fn new(days: &'a [CalendarDay], events: &'a [Event], exported_at: Timestamp) -> Self {
        Self {
            days,
            events: chronological(events),
            exported_at,
        }
    }

    /// Renders the document; the file name is derived from `local_now`.
    pub fn render(&self, local_now: DateTime) -> Result<ExportFile> {
        Ok(ExportFile {
            file_name: pool_file_name(local_now),
            contents: serde_json::to_string_pretty(self)?,
        })
    }
}

/// File name for a trip export: whitespace runs become `_`, characters
/// outside letters, digits, `-`, `_` and `.` are dropped.
///
/// ```rust
/// use itinerary_core::export::trip_file_name;
///
/// assert_eq!(trip_file_name("Tokyo Trip"), "Tokyo_Trip.json");
/// assert_eq!(trip_file_name("  Paris / Lyon?  "), "Paris__Lyon.json");
/// assert_eq!(trip_file_name("***"), "itinerary.json");
/// ```
pub fn trip_file_name(name: &str) -> String {
    let joined = name.split_whitespace().collect::<Vec<_>>().join("_");
    let stem: String = joined
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect();
    let stem = stem.trim_start_matches('.');

    if stem.chars().any(char::is_alphanumeric) {
        format!("{stem}.json")
    } else {
        format!("{FALLBACK_STEM}.json")
    }
}

/// File name for an event-pool export, stamped with the local time.
pub fn pool_file_name(local_now: DateTime) -> String {
    format!("{FALLBACK_STEM}-{}.json", local_now.strftime("%Y%m%d-%H%M"))
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use serde_json::Value;

    use super::*;
    use crate::models::Item;

    fn exported_at() -> Timestamp {
        "2026-02-01T12:00:00Z".parse().expect("Failed to parse timestamp")
    }

    #[test]
    fn test_trip_file_name_has_no_spaces() {
        let name = trip_file_name("Tokyo Trip");
        assert!(name.contains("Tokyo_Trip"));
        assert!(!name.contains(' '));
        assert_eq!(trip_file_name("東京 旅行"), "東京_旅行.json");
        assert_eq!(trip_file_name("..hidden"), "hidden.json");
    }

    #[test]
    fn test_pool_file_name_from_local_time() {
        let name = pool_file_name(date(2026, 2, 5).at(14, 30, 0, 0));
        assert_eq!(name, "itinerary-20260205-1430.json");
    }

    #[test]
    fn test_trip_export_document() {
        let mut trip = Trip::seeded(1);
        trip.name = "Tokyo Trip".into();
        trip.days[0].items.push(Item {
            id: "item_1".into(),
            time: "10:00".into(),
            title: "Senso-ji".into(),
            location: "Asakusa".into(),
            note: String::new(),
        });

        let file = TripExport::new(&trip, exported_at())
            .render()
            .expect("Failed to render export");
        assert_eq!(file.file_name, "Tokyo_Trip.json");

        let value: Value = serde_json::from_str(&file.contents).expect("Export should be JSON");
        assert_eq!(value["name"], "Tokyo Trip");
        assert_eq!(value["exportedAt"], "2026-02-01T12:00:00Z");
        assert_eq!(value["days"][0]["items"][0]["location"], "Asakusa");
        assert!(value.get("updatedAt").is_some());
    }

    #[test]
    fn test_pool_export_sorts_events_globally() {
        let days = vec![CalendarDay::new(date(2026, 2, 5)), CalendarDay::new(date(2026, 2, 6))];
        let events = vec![
            Event {
                id: "b".into(),
                title: "Second day".into(),
                start_at: date(2026, 2, 6).at(8, 0, 0, 0),
                location: None,
                note: None,
            },
            Event {
                id: "a".into(),
                title: "First day".into(),
                start_at: date(2026, 2, 5).at(18, 0, 0, 0),
                location: Some("Shibuya".into()),
                note: None,
            },
        ];

        let file = PoolExport::new(&days, &events, exported_at())
            .render(date(2026, 2, 1).at(12, 0, 0, 0))
            .expect("Failed to render export");
        let value: Value = serde_json::from_str(&file.contents).expect("Export should be JSON");

        assert_eq!(value["days"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["events"][0]["id"], "a");
        assert_eq!(value["events"][1]["id"], "b");
        assert_eq!(value["events"][0]["startAt"], "2026-02-05T18:00:00");
        assert_eq!(value["exportedAt"], "2026-02-01T12:00:00Z");
    }
}
