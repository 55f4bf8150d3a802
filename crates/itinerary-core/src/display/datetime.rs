//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A `Timestamp` shown in the system time zone as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_date_time_shape() {
        let ts: Timestamp = "2026-02-05T05:30:00Z".parse().expect("Failed to parse timestamp");
        let shown = LocalDateTime(&ts).to_string();
        // Date, time and zone, whatever the system zone is.
        assert_eq!(shown.split(' ').count(), 3);
        assert!(shown.starts_with("2026-02-0"));
    }
}
