//! Operations on the day-owns-items model.

use jiff::Timestamp;
use log::{debug, info};

use super::TripSession;
use crate::{
    config::SessionConfig,
    error::{ItineraryError, Result},
    export::{ExportFile, TripExport},
    gateway::{self, Loaded, SaveStatus},
    id::{new_id, ITEM_PREFIX},
    maplink::{open_map, MapOpener},
    models::{refreshed, Day, Item, Trip},
    ordering::{neighbour, swap_by_id},
    params::{AddDay, AddItem, Id, MoveItem, SwapItems, UpdateItem},
    storage::KeyValueStore,
    time::normalize_clock_text,
};

impl<S: KeyValueStore> TripSession<S> {
    /// Restores the trip from `store`, or seeds and persists a default one
    /// when nothing usable is stored.
    pub fn open(store: S, config: SessionConfig) -> Self {
        match gateway::load::<Trip, _>(&store, &config.keys.trip) {
            Loaded::Parsed(trip) => {
                info!("Restored trip '{}' with {} days", trip.name, trip.days.len());
                Self {
                    store,
                    config,
                    trip,
                    last_save: SaveStatus::Saved,
                }
            }
            Loaded::Absent => {
                info!("No saved trip, seeding {} days", config.seed_days);
                let trip = Trip::seeded(config.seed_days);
                let mut session = Self {
                    store,
                    config,
                    trip,
                    last_save: SaveStatus::Saved,
                };
                session.persist();
                session
            }
        }
    }

    /// Writes the whole trip under its key.
    fn persist(&mut self) -> &SaveStatus {
        self.last_save = gateway::save(&mut self.store, &self.config.keys.trip, &self.trip);
        &self.last_save
    }

    /// Applies `change` to a draft of the trip; on success the draft replaces
    /// the trip, `updated_at` is refreshed, and the trip is written through.
    fn commit<T>(&mut self, change: impl FnOnce(&mut Trip) -> Result<T>) -> Result<T> {
        let mut draft = self.trip.clone();
        let value = change(&mut draft).map_err(|e| {
            debug!("Trip change rejected: {e}");
            e
        })?;
        draft.touch();
        self.trip = draft;
        self.persist();
        Ok(value)
    }

    /// Renames the trip. The name must not be blank.
    pub fn rename(&mut self, name: &str) -> Result<()> {
        let name = required(name, "name")?;
        self.commit(|trip| {
            trip.name = name;
            Ok(())
        })
    }

    /// Sets the free-text date range label.
    pub fn set_date_range(&mut self, label: &str) -> Result<()> {
        let label = label.trim().to_string();
        self.commit(|trip| {
            trip.date_range = label;
            Ok(())
        })
    }

    /// Appends a day, labelled "Day N" unless a label is given.
    pub fn add_day(&mut self, params: &AddDay) -> Result<Day> {
        self.commit(|trip| {
            let label = params
                .label
                .as_deref()
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .map_or_else(|| trip.next_day_label(), String::from);
            let date_text = params.date_text.as_deref().unwrap_or("").trim().to_string();

            let day = Day::new(label, date_text);
            trip.days.push(day.clone());
            Ok(day)
        })
    }

    /// Adds an item to a day. The title must not be blank.
    ///
    /// Adding an item sets a time field, so any manual order on the day is
    /// dropped and the day goes back to time-derived order.
    pub fn add_item(&mut self, params: &AddItem) -> Result<Item> {
        let title = required(&params.title, "title")?;
        let item = Item {
            id: new_id(ITEM_PREFIX),
            time: normalize_clock_text(params.time.as_deref().unwrap_or("")),
            title,
            location: trimmed(params.location.as_deref()),
            note: trimmed(params.note.as_deref()),
        };

        self.commit(|trip| {
            let day = trip
                .day_mut(&params.day_id)
                .ok_or_else(|| ItineraryError::DayNotFound {
                    id: params.day_id.clone(),
                })?;
            day.items.push(item.clone());
            day.manual_order = None;
            Ok(item)
        })
    }

    /// Edits an item. Editing the time drops the day's manual order.
    pub fn update_item(&mut self, params: &UpdateItem) -> Result<Item> {
        let title = params
            .title
            .as_deref()
            .map(|title| required(title, "title"))
            .transpose()?;

        self.commit(|trip| {
            let day = trip
                .day_of_item_mut(&params.id)
                .ok_or_else(|| ItineraryError::ItemNotFound {
                    id: params.id.clone(),
                })?;
            if params.time.is_some() {
                day.manual_order = None;
            }

            let item = day
                .item_mut(&params.id)
                .ok_or_else(|| ItineraryError::ItemNotFound {
                    id: params.id.clone(),
                })?;
            if let Some(title) = title {
                item.title = title;
            }
            if let Some(time) = &params.time {
                item.time = normalize_clock_text(time);
            }
            if let Some(location) = &params.location {
                item.location = location.trim().to_string();
            }
            if let Some(note) = &params.note {
                item.note = note.trim().to_string();
            }
            Ok(item.clone())
        })
    }

    /// Removes an item permanently; sibling order is otherwise untouched.
    pub fn delete_item(&mut self, params: &Id) -> Result<Item> {
        self.commit(|trip| {
            let day = trip
                .day_of_item_mut(&params.id)
                .ok_or_else(|| ItineraryError::ItemNotFound {
                    id: params.id.clone(),
                })?;
            let position = day
                .items
                .iter()
                .position(|item| item.id == params.id)
                .ok_or_else(|| ItineraryError::ItemNotFound {
                    id: params.id.clone(),
                })?;
            if let Some(sequence) = &mut day.manual_order {
                sequence.retain(|id| id != &params.id);
            }
            Ok(day.items.remove(position))
        })
    }

    /// Swaps two items of the same day within the day's current order and
    /// records the result verbatim as the day's manual order.
    ///
    /// The manual order holds until the next time-field edit on that day,
    /// even when it contradicts the items' times.
    pub fn swap_items(&mut self, params: &SwapItems) -> Result<()> {
        if params.first_id == params.second_id {
            return Ok(());
        }

        self.commit(|trip| {
            let first_day = trip
                .day_of_item(&params.first_id)
                .map(|day| day.id.clone())
                .ok_or_else(|| ItineraryError::ItemNotFound {
                    id: params.first_id.clone(),
                })?;
            let second_day = trip
                .day_of_item(&params.second_id)
                .map(|day| day.id.clone())
                .ok_or_else(|| ItineraryError::ItemNotFound {
                    id: params.second_id.clone(),
                })?;
            if first_day != second_day {
                return Err(ItineraryError::invalid_input("item_ids")
                    .with_reason("Items must be from the same day to swap"));
            }

            let day = trip
                .day_mut(&first_day)
                .ok_or(ItineraryError::DayNotFound { id: first_day })?;
            let sequence: Vec<String> = swap_by_id(
                day.ordered_items(),
                |item: &Item| item.id.as_str(),
                &params.first_id,
                &params.second_id,
            )
            .map(|swapped| swapped.into_iter().map(|item| item.id.clone()).collect())
            .ok_or_else(|| ItineraryError::ItemNotFound {
                id: params.first_id.clone(),
            })?;
            day.manual_order = Some(sequence);
            Ok(())
        })
    }

    /// Moves an item one place up or down in its day by swapping it with its
    /// neighbour. Returns `false`, without writing, at either end of the day.
    pub fn move_item(&mut self, params: &MoveItem) -> Result<bool> {
        let day = self
            .trip
            .day_of_item(&params.id)
            .ok_or_else(|| ItineraryError::ItemNotFound {
                id: params.id.clone(),
            })?;
        let ordered = day.ordered_items();
        let other = neighbour(
            &ordered,
            |item: &Item| item.id.as_str(),
            &params.id,
            params.direction,
        );
        let Some(other) = other else {
            return Ok(false);
        };

        let swap = SwapItems {
            first_id: params.id.clone(),
            second_id: other.id.clone(),
        };
        self.swap_items(&swap)?;
        Ok(true)
    }

    /// Items of a day in display order.
    pub fn ordered_items(&self, day_id: &str) -> Result<Vec<&Item>> {
        self.trip
            .day(day_id)
            .map(Day::ordered_items)
            .ok_or_else(|| ItineraryError::DayNotFound {
                id: day_id.to_string(),
            })
    }

    /// Asks `opener` to show the item's location on a map. Returns `false`,
    /// without a request, when the item has no location.
    pub fn open_item_map(&self, item_id: &str, opener: &dyn MapOpener) -> Result<bool> {
        let item = self
            .trip
            .item(item_id)
            .ok_or_else(|| ItineraryError::ItemNotFound {
                id: item_id.to_string(),
            })?;
        Ok(open_map(opener, &item.location))
    }

    /// Discards every day and item and reseeds the default trip.
    pub fn reset(&mut self) -> &Trip {
        info!("Resetting trip '{}'", self.trip.name);
        let mut trip = Trip::seeded(self.config.seed_days);
        trip.updated_at = refreshed(self.trip.updated_at);
        self.trip = trip;
        self.persist();
        &self.trip
    }

    /// Export document of the current trip, stamped now.
    pub fn export(&self) -> Result<ExportFile> {
        TripExport::new(&self.trip, Timestamp::now()).render()
    }
}

/// Trims `value`, rejecting it when nothing is left.
pub(crate) fn required(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ItineraryError::invalid_input(field)
            .with_reason(format!("{} is required", capitalized(field))));
    }
    Ok(trimmed.to_string())
}

fn trimmed(value: Option<&str>) -> String {
    value.unwrap_or("").trim().to_string()
}

fn capitalized(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
