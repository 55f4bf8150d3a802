//! Day-owns-items model: a trip owns its days, each day owns its items.

use std::collections::HashSet;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::refreshed;
use crate::{
    id::{new_id, DAY_PREFIX, TRIP_PREFIX},
    ordering::sort_by_clock,
};

/// Name given to a freshly seeded trip.
pub const DEFAULT_TRIP_NAME: &str = "My Trip";

/// Top-level aggregate for one planned journey.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Unique identifier for the trip
    pub id: String,

    /// Display name of the trip
    pub name: String,

    /// Free-text date range label, e.g. "Feb 5 - Feb 8"
    #[serde(default)]
    pub date_range: String,

    /// Refreshed on every mutation of the trip or anything it owns
    pub updated_at: Timestamp,

    /// Days in display order; appended only
    #[serde(default)]
    pub days: Vec<Day>,
}

/// A calendar-scoped bucket of items within a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    /// Unique identifier for the day
    pub id: String,

    /// Display label, "Day N" by default
    pub label: String,

    /// Free-text calendar date
    #[serde(default)]
    pub date_text: String,

    /// Items in insertion order
    #[serde(default)]
    pub items: Vec<Item>,

    /// Item identifiers in a manually chosen order. Present only after a
    /// swap, and cleared again by the next time-field edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_order: Option<Vec<String>>,
}

/// A single scheduled activity within a day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Unique identifier for the item
    pub id: String,

    /// Clock-of-day, normally `HH:MM`; empty when unscheduled
    #[serde(default)]
    pub time: String,

    /// Required, non-blank title
    pub title: String,

    /// Optional free-text location; empty when absent
    #[serde(default)]
    pub location: String,

    /// Optional free-text note; empty when absent
    #[serde(default)]
    pub note: String,
}

impl Trip {
    /// Builds the default trip used on first run: `day_count` empty days
    /// labelled "Day 1" onwards.
    pub fn seeded(day_count: usize) -> Self {
        let mut trip = Self {
            id: new_id(TRIP_PREFIX),
            name: DEFAULT_TRIP_NAME.to_string(),
            date_range: String::new(),
            updated_at: Timestamp::now(),
            days: Vec::with_capacity(day_count),
        };
        for _ in 0..day_count {
            let label = trip.next_day_label();
            trip.days.push(Day::new(label, String::new()));
        }
        trip
    }

    /// Ordinal label for the next appended day.
    pub fn next_day_label(&self) -> String {
        format!("Day {}", self.days.len() + 1)
    }

    /// Refreshes `updated_at`, never moving it backwards.
    pub fn touch(&mut self) {
        self.updated_at = refreshed(self.updated_at);
    }

    /// Looks up a day by identifier.
    pub fn day(&self, id: &str) -> Option<&Day> {
        self.days.iter().find(|day| day.id == id)
    }

    /// Looks up a day by identifier for modification.
    pub fn day_mut(&mut self, id: &str) -> Option<&mut Day> {
        self.days.iter_mut().find(|day| day.id == id)
    }

    /// Finds the day holding the item with `item_id`.
    pub fn day_of_item(&self, item_id: &str) -> Option<&Day> {
        self.days.iter().find(|day| day.item(item_id).is_some())
    }

    /// Finds the day holding the item with `item_id`, for modification.
    pub fn day_of_item_mut(&mut self, item_id: &str) -> Option<&mut Day> {
        self.days.iter_mut().find(|day| day.item(item_id).is_some())
    }

    /// Looks up an item anywhere in the trip.
    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.day_of_item(item_id).and_then(|day| day.item(item_id))
    }

    /// Total number of items across all days.
    pub fn item_count(&self) -> usize {
        self.days.iter().map(|day| day.items.len()).sum()
    }
}

impl Day {
    /// Creates an empty day.
    pub fn new(label: String, date_text: String) -> Self {
        Self {
            id: new_id(DAY_PREFIX),
            label,
            date_text,
            items: Vec::new(),
            manual_order: None,
        }
    }

    /// Looks up an item by identifier.
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Looks up an item by identifier for modification.
    pub fn item_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Items in the order they should be shown.
    ///
    /// Without a manual order this is ascending clock-of-day with untimed
    /// items last and ties in insertion order. With a manual order, the
    /// recorded sequence wins; any item missing from it follows in
    /// clock-of-day order. Each item appears exactly once, whatever ids the
    /// recorded sequence repeats.
    pub fn ordered_items(&self) -> Vec<&Item> {
        let chronological = sort_by_clock(&self.items, |item| item.time.as_str());
        let Some(sequence) = &self.manual_order else {
            return chronological;
        };

        let mut seen: HashSet<&str> = HashSet::with_capacity(self.items.len());
        let mut ordered: Vec<&Item> = sequence
            .iter()
            .filter_map(|id| self.item(id))
            .filter(|item| seen.insert(item.id.as_str()))
            .collect();
        ordered.extend(
            chronological
                .into_iter()
                .filter(|item| seen.insert(item.id.as_str())),
        );
        ordered
    }

    /// Whether the day is currently shown in a manually chosen order.
    pub fn is_manually_ordered(&self) -> bool {
        self.manual_order.is_some()
    }
}
