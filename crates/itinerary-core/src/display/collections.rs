//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::{grouping::DaySchedule, models::Item};

/// Items of one day in display order.
pub struct Items<'a>(pub Vec<&'a Item>);

impl Items<'_> {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of items in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Items<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No items found.");
        }
        for item in &self.0 {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Every calendar day with its grouped events.
pub struct Schedules<'a>(pub Vec<DaySchedule<'a>>);

impl<'a> Schedules<'a> {
    /// Check if there are no days at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total events shown across all days.
    pub fn event_count(&self) -> usize {
        self.0.iter().map(|schedule| schedule.events.len()).sum()
    }

    /// Get an iterator over the day schedules.
    pub fn iter(&self) -> std::slice::Iter<'_, DaySchedule<'a>> {
        self.0.iter()
    }
}

impl fmt::Display for Schedules<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No days found.");
        }
        for (position, schedule) in self.0.iter().enumerate() {
            if position > 0 {
                writeln!(f)?;
            }
            write!(f, "{schedule}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{
        grouping::group_by_day,
        models::{CalendarDay, Event},
    };

    #[test]
    fn test_items_display_empty() {
        let items = Items(Vec::new());
        assert!(items.is_empty());
        assert_eq!(items.to_string(), "No items found.\n");
    }

    #[test]
    fn test_schedules_display() {
        let days = vec![CalendarDay::new(date(2026, 2, 5)), CalendarDay::new(date(2026, 2, 6))];
        let events = vec![
            Event {
                id: "evt_1".into(),
                title: "Tsukiji".into(),
                start_at: date(2026, 2, 5).at(7, 0, 0, 0),
                location: None,
                note: None,
            },
            Event {
                id: "evt_2".into(),
                title: "Akihabara".into(),
                start_at: date(2026, 2, 6).at(15, 0, 0, 0),
                location: None,
                note: None,
            },
        ];

        let schedules = Schedules(group_by_day(&days, &events));
        assert_eq!(schedules.event_count(), 2);
        let output = schedules.to_string();
        assert!(output.find("Tsukiji") < output.find("Akihabara"));
        assert!(output.contains("## Day 2 · 2026-02-06"));
    }

    #[test]
    fn test_schedules_display_no_days() {
        assert_eq!(Schedules(Vec::new()).to_string(), "No days found.\n");
    }
}
