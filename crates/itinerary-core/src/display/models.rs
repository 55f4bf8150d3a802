//! Display implementations for domain models.
//!
//! Every implementation writes markdown. Days list their items in display
//! order, not storage order.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    grouping::DaySchedule,
    models::{CalendarDay, Day, Event, Item, Trip},
    time::format_date,
};

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;

        if !self.date_range.is_empty() {
            writeln!(f, "- Dates: {}", self.date_range)?;
        }
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if self.days.is_empty() {
            writeln!(f, "\nNo days in this trip.")?;
        }
        for day in &self.days {
            writeln!(f)?;
            write!(f, "{day}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.date_text.is_empty() {
            writeln!(f, "## {} (ID: {})", self.label, self.id)?;
        } else {
            writeln!(f, "## {} · {} (ID: {})", self.label, self.date_text, self.id)?;
        }
        writeln!(f)?;

        if self.items.is_empty() {
            return writeln!(f, "No items.");
        }
        if self.is_manually_ordered() {
            writeln!(f, "*Manually ordered*")?;
            writeln!(f)?;
        }
        for item in self.ordered_items() {
            write!(f, "{item}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time = if self.time.is_empty() { "--:--" } else { &self.time };
        writeln!(f, "### {time} {} (ID: {})", self.title, self.id)?;
        writeln!(f)?;

        if !self.location.is_empty() {
            writeln!(f, "- Location: {}", self.location)?;
            writeln!(f)?;
        }
        if !self.note.is_empty() {
            writeln!(f, "{}", self.note)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", format_date(self.date), self.id)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} {} (ID: {})", self.clock(), self.title, self.id)?;
        writeln!(f)?;

        if let Some(location) = &self.location {
            writeln!(f, "- Location: {location}")?;
            writeln!(f)?;
        }
        if let Some(note) = &self.note {
            writeln!(f, "{note}")?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for DaySchedule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## Day {} · {} (ID: {})",
            self.ordinal,
            format_date(self.day.date),
            self.day.id
        )?;
        writeln!(f)?;

        if self.events.is_empty() {
            return writeln!(f, "No events.");
        }
        for event in &self.events {
            write!(f, "{event}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::grouping::group_by_day;

    fn item(id: &str, time: &str, title: &str) -> Item {
        Item {
            id: id.into(),
            time: time.into(),
            title: title.into(),
            location: String::new(),
            note: String::new(),
        }
    }

    #[test]
    fn test_day_lists_items_in_display_order() {
        let mut day = Day::new("Day 1".into(), "Feb 5".into());
        day.items.push(item("a", "", "Wander"));
        day.items.push(item("b", "09:00", "Breakfast"));

        let shown = day.to_string();
        assert!(shown.contains("## Day 1 · Feb 5"));
        let breakfast = shown.find("Breakfast").expect("Breakfast is shown");
        let wander = shown.find("Wander").expect("Wander is shown");
        assert!(breakfast < wander);
        assert!(shown.contains("### --:-- Wander"));
    }

    #[test]
    fn test_empty_trip_day() {
        let trip = Trip::seeded(1);
        let shown = trip.to_string();
        assert!(shown.starts_with("# My Trip"));
        assert!(shown.contains("No items."));
    }

    #[test]
    fn test_schedule_display() {
        let days = vec![CalendarDay::new(date(2026, 2, 5)), CalendarDay::new(date(2026, 2, 6))];
        let events = vec![Event {
            id: "evt_1".into(),
            title: "Shibuya Sky".into(),
            start_at: date(2026, 2, 5).at(14, 30, 0, 0),
            location: Some("Shibuya".into()),
            note: None,
        }];

        let schedules = group_by_day(&days, &events);
        let first = schedules[0].to_string();
        assert!(first.contains("## Day 1 · 2026-02-05"));
        assert!(first.contains("### 14:30 Shibuya Sky (ID: evt_1)"));
        assert!(first.contains("- Location: Shibuya"));
        assert!(schedules[1].to_string().contains("No events."));
    }
}
