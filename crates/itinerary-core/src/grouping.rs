//! Grouping of pooled events into calendar days.
//!
//! The index is built once per pool change: one pass buckets events by
//! calendar date, and each bucket is stable-sorted by start time. Reading a
//! day is then a single map lookup, so showing every day costs time
//! proportional to the pool, not to days times pool.

use std::collections::BTreeMap;

use jiff::civil::Date;

use crate::{
    models::{CalendarDay, Event},
    ordering::sort_by_schedule,
};

/// Event positions in the pool, bucketed by calendar date in start order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventIndex {
    by_date: BTreeMap<Date, Vec<usize>>,
}

/// A day together with the events filed under it.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySchedule<'a> {
    /// 1-based position of the day in the day list
    pub ordinal: usize,
    pub day: &'a CalendarDay,
    pub events: Vec<&'a Event>,
}

impl EventIndex {
    /// Builds the index over `events`.
    pub fn build(events: &[Event]) -> Self {
        let mut by_date: BTreeMap<Date, Vec<usize>> = BTreeMap::new();
        for (position, event) in events.iter().enumerate() {
            by_date.entry(event.date()).or_default().push(position);
        }
        for positions in by_date.values_mut() {
            // Stable, so equal start times keep pool insertion order.
            positions.sort_by_key(|&position| events[position].start_at);
        }
        Self { by_date }
    }

    /// Events on `date` in chronological order.
    ///
    /// `events` must be the slice the index was built from.
    pub fn events_on<'a>(&self, events: &'a [Event], date: Date) -> Vec<&'a Event> {
        self.by_date
            .get(&date)
            .map(|positions| positions.iter().filter_map(|&p| events.get(p)).collect())
            .unwrap_or_default()
    }

    /// Number of distinct dates that have at least one event.
    pub fn date_count(&self) -> usize {
        self.by_date.len()
    }
}

/// Groups `events` under each of `days`, in day-list order.
///
/// Days without events get an empty schedule; events whose date matches no
/// day are not shown anywhere.
pub fn group_by_day<'a>(days: &'a [CalendarDay], events: &'a [Event]) -> Vec<DaySchedule<'a>> {
    let index = EventIndex::build(events);
    schedules(&index, days, events)
}

/// Same as [`group_by_day`] but reusing an already built index.
pub fn schedules<'a>(
    index: &EventIndex,
    days: &'a [CalendarDay],
    events: &'a [Event],
) -> Vec<DaySchedule<'a>> {
    days.iter()
        .enumerate()
        .map(|(position, day)| DaySchedule {
            ordinal: position + 1,
            day,
            events: index.events_on(events, day.date),
        })
        .collect()
}

/// The whole pool in chronological order, ties in insertion order.
pub fn chronological(events: &[Event]) -> Vec<&Event> {
    sort_by_schedule(events, |event| Some(event.start_at))
}
