//! Operations on the event-pool model.
//!
//! Days and events are two aggregates under separate keys. A change to the
//! day list writes the day list; a change to the pool rebuilds the grouping
//! index and writes the pool.

use std::collections::HashSet;

use jiff::{civil::Date, Timestamp};
use log::{debug, info, warn};

use super::{trip_ops::required, PoolSession};
use crate::{
    config::SessionConfig,
    error::{ItineraryError, Result},
    export::{ExportFile, PoolExport},
    gateway::{self, Loaded, SaveStatus},
    grouping::{schedules, DaySchedule, EventIndex},
    id::{new_id, EVENT_PREFIX},
    maplink::{open_map, MapOpener},
    models::{CalendarDay, Event},
    params::{AddCalendarDay, AddEvent, Id, MoveEvent, UpdateEvent},
    storage::KeyValueStore,
    time::{anchor_to_day, combine, format_date, now_local, now_plus_minutes, parse_date},
};

impl<S: KeyValueStore> PoolSession<S> {
    /// Restores the day list and the event pool from `store`.
    ///
    /// Each aggregate is recovered on its own: an absent or unreadable day
    /// list is reseeded from the configured start date, an absent or
    /// unreadable pool starts empty, and whichever was replaced is written
    /// back straight away. A saved day repeating an earlier day's date or ID
    /// is dropped, so each event is filed under at most one day.
    pub fn open(store: S, config: SessionConfig) -> Self {
        let mut last_save = SaveStatus::Saved;
        let mut store = store;

        let days = match gateway::load::<Vec<CalendarDay>, _>(&store, &config.keys.days) {
            Loaded::Parsed(stored) => {
                let stored_len = stored.len();
                let days = distinct_days(stored);
                if days.len() < stored_len {
                    warn!(
                        "Dropped {} saved days repeating an earlier date or ID",
                        stored_len - days.len()
                    );
                    last_save = gateway::save(&mut store, &config.keys.days, &days);
                }
                days
            }
            Loaded::Absent => {
                info!("No saved days, seeding {} days", config.seed_days);
                let days = seed_days(config.seed_start_date(), config.seed_days);
                last_save = gateway::save(&mut store, &config.keys.days, &days);
                days
            }
        };

        let events = match gateway::load::<Vec<Event>, _>(&store, &config.keys.events) {
            Loaded::Parsed(events) => events,
            Loaded::Absent => {
                info!("No saved events, starting with an empty pool");
                let events: Vec<Event> = Vec::new();
                let status = gateway::save(&mut store, &config.keys.events, &events);
                last_save = last_save.and(status);
                events
            }
        };

        info!("Opened {} days and {} events", days.len(), events.len());
        let index = EventIndex::build(&events);
        let active_day = days.first().map(|day| day.id.clone());

        Self {
            store,
            config,
            days,
            events,
            index,
            active_day,
            last_save,
        }
    }

    fn persist_days(&mut self) -> &SaveStatus {
        self.last_save = gateway::save(&mut self.store, &self.config.keys.days, &self.days);
        &self.last_save
    }

    fn persist_events(&mut self) -> &SaveStatus {
        self.last_save = gateway::save(&mut self.store, &self.config.keys.events, &self.events);
        &self.last_save
    }

    /// Applies `change` to a draft of the day list, then swaps it in and
    /// writes it through.
    fn commit_days<T>(
        &mut self,
        change: impl FnOnce(&mut Vec<CalendarDay>) -> Result<T>,
    ) -> Result<T> {
        let mut draft = self.days.clone();
        let value = change(&mut draft).map_err(|e| {
            debug!("Day list change rejected: {e}");
            e
        })?;
        self.days = draft;
        self.persist_days();
        Ok(value)
    }

    /// Applies `change` to a draft of the pool, then swaps it in, rebuilds
    /// the index and writes it through.
    fn commit_events<T>(
        &mut self,
        change: impl FnOnce(&mut Vec<Event>) -> Result<T>,
    ) -> Result<T> {
        let mut draft = self.events.clone();
        let value = change(&mut draft).map_err(|e| {
            debug!("Event pool change rejected: {e}");
            e
        })?;
        self.events = draft;
        self.index = EventIndex::build(&self.events);
        self.persist_events();
        Ok(value)
    }

    /// Day with the given ID.
    pub fn day(&self, id: &str) -> Result<&CalendarDay> {
        self.days
            .iter()
            .find(|day| day.id == id)
            .ok_or_else(|| ItineraryError::DayNotFound { id: id.to_string() })
    }

    /// Event with the given ID.
    pub fn event(&self, id: &str) -> Result<&Event> {
        self.events
            .iter()
            .find(|event| event.id == id)
            .ok_or_else(|| ItineraryError::EventNotFound { id: id.to_string() })
    }

    /// Appends a calendar day.
    ///
    /// Without an explicit date the new day follows the latest existing day,
    /// or starts at the configured seed date when the list is empty. A date
    /// that already has a day is rejected.
    pub fn add_day(&mut self, params: &AddCalendarDay) -> Result<CalendarDay> {
        let date = match params.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            Some(text) => parse_date(text)?,
            None => self.next_date()?,
        };
        if self.days.iter().any(|day| day.date == date) {
            return Err(ItineraryError::invalid_input("date")
                .with_reason(format!("A day for {} already exists", format_date(date))));
        }

        let day = CalendarDay::new(date);
        let added = day.clone();
        self.commit_days(move |days| {
            days.push(day);
            Ok(())
        })?;
        if self.active_day.is_none() {
            self.active_day = Some(added.id.clone());
        }
        Ok(added)
    }

    /// Makes the given day the target of subsequent event additions.
    pub fn select_day(&mut self, params: &Id) -> Result<&CalendarDay> {
        let id = self.day(&params.id)?.id.clone();
        self.active_day = Some(id);
        self.day(&params.id)
    }

    /// The selected day, falling back to the first day.
    pub fn active_day(&self) -> Option<&CalendarDay> {
        self.active_day
            .as_deref()
            .and_then(|id| self.days.iter().find(|day| day.id == id))
            .or_else(|| self.days.first())
    }

    /// Adds an event to the pool, filed under `day_id` or the active day.
    ///
    /// Only the clock-of-day of the given time is used; the date is always
    /// the target day's. Without a time, the clock of now plus the configured
    /// lead is used.
    pub fn add_event(&mut self, params: &AddEvent) -> Result<Event> {
        let title = required(&params.title, "title")?;
        let day = match params.day_id.as_deref() {
            Some(id) => self.day(id)?,
            None => self.active_day().ok_or_else(|| {
                ItineraryError::invalid_input("day_id")
                    .with_reason("There is no day to add the event to")
            })?,
        };

        let start_at = match params.time.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            Some(raw) => anchor_to_day(raw, day.date)?,
            None => default_start(day.date, self.config.default_lead_minutes)?,
        };

        let event = Event {
            id: new_id(EVENT_PREFIX),
            title,
            start_at,
            location: optional_text(params.location.as_deref()),
            note: optional_text(params.note.as_deref()),
        };

        self.commit_events(|events| {
            events.push(event.clone());
            Ok(event)
        })
    }

    /// Edits an event. A new time is re-anchored onto the event's current
    /// date; an empty location or note clears it.
    pub fn update_event(&mut self, params: &UpdateEvent) -> Result<Event> {
        let title = params
            .title
            .as_deref()
            .map(|title| required(title, "title"))
            .transpose()?;
        let date = self.event(&params.id)?.date();
        let start_at = params
            .time
            .as_deref()
            .map(|raw| anchor_to_day(raw, date))
            .transpose()?;

        self.commit_events(|events| {
            let event = find_event_mut(events, &params.id)?;
            if let Some(title) = title {
                event.title = title;
            }
            if let Some(start_at) = start_at {
                event.start_at = start_at;
            }
            if let Some(location) = &params.location {
                event.location = optional_text(Some(location));
            }
            if let Some(note) = &params.note {
                event.note = optional_text(Some(note));
            }
            Ok(event.clone())
        })
    }

    /// Refiles an event under another day, keeping its clock-of-day.
    pub fn move_event(&mut self, params: &MoveEvent) -> Result<Event> {
        let date = self.day(&params.day_id)?.date;

        self.commit_events(|events| {
            let event = find_event_mut(events, &params.id)?;
            event.start_at = combine(date, event.start_at.time());
            Ok(event.clone())
        })
    }

    /// Removes an event from the pool.
    pub fn delete_event(&mut self, params: &Id) -> Result<Event> {
        self.commit_events(|events| {
            let position = events
                .iter()
                .position(|event| event.id == params.id)
                .ok_or_else(|| ItineraryError::EventNotFound {
                    id: params.id.clone(),
                })?;
            Ok(events.remove(position))
        })
    }

    /// Every day with its events, in day-list order.
    pub fn schedules(&self) -> Vec<DaySchedule<'_>> {
        schedules(&self.index, &self.days, &self.events)
    }

    /// Events filed under a day, in start order.
    pub fn events_for_day(&self, day_id: &str) -> Result<Vec<&Event>> {
        let date = self.day(day_id)?.date;
        Ok(self.index.events_on(&self.events, date))
    }

    /// Asks `opener` to show the event's location on a map. Returns
    /// `false`, without a request, when the event has no location.
    pub fn open_event_map(&self, event_id: &str, opener: &dyn MapOpener) -> Result<bool> {
        let event = self.event(event_id)?;
        Ok(open_map(opener, event.location.as_deref().unwrap_or("")))
    }

    /// Discards every day and event, reseeding the day list.
    pub fn reset(&mut self) {
        info!(
            "Resetting {} days and {} events",
            self.days.len(),
            self.events.len()
        );
        self.days = seed_days(self.config.seed_start_date(), self.config.seed_days);
        self.events.clear();
        self.index = EventIndex::build(&self.events);
        self.active_day = self.days.first().map(|day| day.id.clone());

        let days = self.persist_days().clone();
        let events = self.persist_events().clone();
        self.last_save = days.and(events);
    }

    /// Export document of the day list and pool, stamped now.
    pub fn export(&self) -> Result<ExportFile> {
        PoolExport::new(&self.days, &self.events, Timestamp::now()).render(now_local())
    }

    fn next_date(&self) -> Result<Date> {
        match self.days.iter().map(|day| day.date).max() {
            Some(latest) => latest
                .tomorrow()
                .map_err(|e| ItineraryError::invalid_time(format_date(latest), e)),
            None => Ok(self.config.seed_start_date()),
        }
    }
}

/// Keeps the first day for each date and for each ID, so grouping stays a
/// partition of the pool.
fn distinct_days(days: Vec<CalendarDay>) -> Vec<CalendarDay> {
    let mut dates: HashSet<Date> = HashSet::with_capacity(days.len());
    let mut ids: HashSet<String> = HashSet::with_capacity(days.len());
    days.into_iter()
        .filter(|day| {
            let fresh = !dates.contains(&day.date) && !ids.contains(&day.id);
            if fresh {
                dates.insert(day.date);
                ids.insert(day.id.clone());
            }
            fresh
        })
        .collect()
}

/// `count` consecutive days starting at `start`.
fn seed_days(start: Date, count: usize) -> Vec<CalendarDay> {
    std::iter::successors(Some(start), |date| date.tomorrow().ok())
        .take(count)
        .map(CalendarDay::new)
        .collect()
}

/// Clock of now plus `lead_minutes`, placed on `date`.
fn default_start(date: Date, lead_minutes: i64) -> Result<jiff::civil::DateTime> {
    Ok(combine(date, now_plus_minutes(lead_minutes)?.time()))
}

fn find_event_mut<'a>(events: &'a mut [Event], id: &str) -> Result<&'a mut Event> {
    events
        .iter_mut()
        .find(|event| event.id == id)
        .ok_or_else(|| ItineraryError::EventNotFound { id: id.to_string() })
}

/// Trimmed text, or `None` when blank.
fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(String::from)
}
