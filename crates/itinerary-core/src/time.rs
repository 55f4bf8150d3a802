//! Calendar-date and clock-of-day utilities.
//!
//! Everything here is timezone-naive: values are [`jiff::civil`] types read
//! and written in the ambient local zone without any conversion. Inputs may
//! be bare (`2026-02-05`, `14:30`, `9:05`) or ISO-shaped date-times
//! (`2026-02-05T14:30`, `2026-02-05 14:30:00`, with or without a trailing
//! offset, which is ignored).

use jiff::{
    civil::{Date, DateTime, Time},
    ToSpan, Zoned,
};

use crate::error::{ItineraryError, Result};

const DATE_LEN: usize = 10;

/// Parses the calendar-date component of `input`.
///
/// ```rust
/// use itinerary_core::time::{format_date, parse_date};
///
/// let date = parse_date("2026-02-05T09:00").unwrap();
/// assert_eq!(format_date(date), "2026-02-05");
/// ```
pub fn parse_date(input: &str) -> Result<Date> {
    let trimmed = input.trim();
    let head = trimmed
        .get(..DATE_LEN)
        .ok_or_else(|| ItineraryError::invalid_time(input, "expected YYYY-MM-DD"))?;
    let rest = &trimmed[DATE_LEN..];
    if !(rest.is_empty() || rest.starts_with(['T', 't', ' '])) {
        return Err(ItineraryError::invalid_time(input, "expected YYYY-MM-DD"));
    }
    head.parse::<Date>()
        .map_err(|e| ItineraryError::invalid_time(input, e))
}

/// Parses the clock-of-day component of `input`, dropping seconds.
///
/// Accepts `H:MM`, `HH:MM`, `HH:MM:SS`, or any date-time whose time part has
/// one of those shapes.
pub fn parse_clock(input: &str) -> Result<Time> {
    let trimmed = input.trim();
    let clock = match trimmed.get(..DATE_LEN) {
        Some(head) if head.parse::<Date>().is_ok() => {
            trimmed[DATE_LEN..].trim_start_matches(['T', 't', ' '])
        }
        _ => trimmed,
    };

    // Anything after the clock digits (offset, zone, fraction) is ignored.
    let end = clock
        .find(|c: char| !(c.is_ascii_digit() || c == ':'))
        .unwrap_or(clock.len());
    let parts: Vec<&str> = clock[..end].split(':').collect();

    let (hour, minute) = match parts.as_slice() {
        [h, m] | [h, m, _] if (1..=2).contains(&h.len()) && m.len() == 2 => (*h, *m),
        _ => return Err(ItineraryError::invalid_time(input, "expected HH:MM")),
    };
    let hour: i8 = hour
        .parse()
        .map_err(|_| ItineraryError::invalid_time(input, "hour is not a number"))?;
    let minute: i8 = minute
        .parse()
        .map_err(|_| ItineraryError::invalid_time(input, "minute is not a number"))?;

    Time::new(hour, minute, 0, 0).map_err(|e| ItineraryError::invalid_time(input, e))
}

/// Formats a calendar date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    date.strftime("%Y-%m-%d").to_string()
}

/// Formats a clock-of-day as zero-padded `HH:MM`.
pub fn format_clock(time: Time) -> String {
    time.strftime("%H:%M").to_string()
}

/// Combines a calendar date and a clock-of-day into one local date-time.
pub fn combine(date: Date, time: Time) -> DateTime {
    date.to_datetime(time)
}

/// Keeps the clock-of-day found in `raw` but forces the calendar day to `day`.
///
/// Whatever date the raw picker value carried is discarded.
///
/// ```rust
/// use itinerary_core::time::{anchor_to_day, parse_date};
///
/// let day = parse_date("2026-02-05").unwrap();
/// let start = anchor_to_day("2031-12-24T14:30", day).unwrap();
/// assert_eq!(start.to_string(), "2026-02-05T14:30:00");
/// ```
pub fn anchor_to_day(raw: &str, day: Date) -> Result<DateTime> {
    Ok(combine(day, parse_clock(raw)?))
}

/// Sets an explicit hour and minute on `date`.
pub fn at_clock(date: Date, hour: i8, minute: i8) -> Result<DateTime> {
    let time = Time::new(hour, minute, 0, 0)
        .map_err(|e| ItineraryError::invalid_time(format!("{hour}:{minute}"), e))?;
    Ok(combine(date, time))
}

/// Current local date-time, truncated to the minute.
pub fn now_local() -> DateTime {
    truncate_to_minute(Zoned::now().datetime())
}

/// Current local calendar date.
pub fn today() -> Date {
    Zoned::now().date()
}

/// Adds `minutes` to `base`.
pub fn add_minutes(base: DateTime, minutes: i64) -> Result<DateTime> {
    base.checked_add(minutes.minutes())
        .map_err(|e| ItineraryError::invalid_time(base.to_string(), e))
}

/// Local now plus `minutes`.
pub fn now_plus_minutes(minutes: i64) -> Result<DateTime> {
    add_minutes(now_local(), minutes)
}

/// Local now plus `hours`.
pub fn now_plus_hours(hours: i64) -> Result<DateTime> {
    add_minutes(now_local(), hours * 60)
}

/// Normalises free-form clock text for storage on an item.
///
/// Well-formed input becomes `HH:MM`; blank input becomes an empty string;
/// anything else is kept trimmed and verbatim so it still sorts by raw string
/// comparison.
pub fn normalize_clock_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match parse_clock(trimmed) {
        Ok(time) => format_clock(time),
        Err(_) => trimmed.to_string(),
    }
}

fn truncate_to_minute(dt: DateTime) -> DateTime {
    let time = dt.time();
    let clock = Time::new(time.hour(), time.minute(), 0, 0).unwrap_or(time);
    combine(dt.date(), clock)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_parse_date_shapes() {
        let expected = date(2026, 2, 5);
        assert_eq!(parse_date("2026-02-05").unwrap(), expected);
        assert_eq!(parse_date(" 2026-02-05T14:30 ").unwrap(), expected);
        assert_eq!(parse_date("2026-02-05 14:30:00").unwrap(), expected);
        assert!(parse_date("05/02/2026").is_err());
        assert!(parse_date("2026-02-30").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_clock_shapes() {
        assert_eq!(format_clock(parse_clock("14:30").unwrap()), "14:30");
        assert_eq!(format_clock(parse_clock("9:05").unwrap()), "09:05");
        assert_eq!(format_clock(parse_clock("09:05:59").unwrap()), "09:05");
        assert_eq!(
            format_clock(parse_clock("2026-02-05T07:45:00Z").unwrap()),
            "07:45"
        );
        assert_eq!(
            format_clock(parse_clock("2026-02-05 23:59").unwrap()),
            "23:59"
        );
    }

    #[test]
    fn test_parse_clock_rejects_malformed() {
        assert!(parse_clock("25:00").is_err());
        assert!(parse_clock("12:60").is_err());
        assert!(parse_clock("noon").is_err());
        assert!(parse_clock("1230").is_err());
        assert!(parse_clock("").is_err());
    }

    #[test]
    fn test_anchor_keeps_clock_and_forces_day() {
        let day = date(2026, 2, 5);
        let anchored = anchor_to_day("2019-07-01T14:30", day).unwrap();
        assert_eq!(anchored.date(), day);
        assert_eq!(format_clock(anchored.time()), "14:30");

        let bare = anchor_to_day("14:30", day).unwrap();
        assert_eq!(bare, anchored);
    }

    #[test]
    fn test_at_clock_and_add_minutes() {
        let start = at_clock(date(2026, 2, 5), 23, 30).unwrap();
        let later = add_minutes(start, 45).unwrap();
        assert_eq!(later.date(), date(2026, 2, 6));
        assert_eq!(format_clock(later.time()), "00:15");
        assert!(at_clock(date(2026, 2, 5), 24, 0).is_err());
    }

    #[test]
    fn test_now_plus_is_truncated_and_ahead() {
        let now = now_local();
        let later = now_plus_hours(1).unwrap();
        assert_eq!(later.time().second(), 0);
        assert!(later > now);
        assert!(now_plus_minutes(0).unwrap() >= now);
    }

    #[test]
    fn test_normalize_clock_text() {
        assert_eq!(normalize_clock_text(" 8:00 "), "08:00");
        assert_eq!(normalize_clock_text("   "), "");
        assert_eq!(normalize_clock_text("after lunch"), "after lunch");
    }
}
