//! Time-of-day ordering and manual swaps.
//!
//! Ordering is a stable sort on an optional key: entries with a key come
//! first in ascending key order, entries without one follow, and ties keep
//! their relative insertion order.
//!
//! Clock-of-day strings are compared lexicographically on their raw text.
//! For zero-padded `HH:MM` this is chronological; malformed strings such as
//! `9:05` or `after lunch` are not rejected and simply sort wherever raw
//! string comparison puts them (`"10:00" < "9:05"`).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Direction for moving an entry one place within an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the start of the ordering
    Up,
    /// Towards the end of the ordering
    Down,
}

/// Compares two optional keys so that missing keys sort last.
pub fn compare_present_first<K: Ord>(a: Option<K>, b: Option<K>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable-sorts `items` by `key`, placing keyless entries last.
pub fn sort_by_schedule<'a, T, K, F>(items: &'a [T], key: F) -> Vec<&'a T>
where
    K: Ord,
    F: Fn(&'a T) -> Option<K>,
{
    let mut ordered: Vec<&'a T> = items.iter().collect();
    // `sort_by` is stable, which is what keeps insertion order on ties.
    ordered.sort_by(|a, b| compare_present_first(key(*a), key(*b)));
    ordered
}

/// The sort key of a raw clock-of-day string; blank means "no time".
pub fn clock_key(time: &str) -> Option<&str> {
    let trimmed = time.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Stable-sorts `items` by the raw clock string returned from `clock`.
///
/// ```rust
/// use itinerary_core::ordering::sort_by_clock;
///
/// let items = [("a", ""), ("b", "14:00"), ("c", "09:30"), ("d", ""), ("e", "09:30")];
/// let ordered: Vec<&str> = sort_by_clock(&items, |item| item.1)
///     .into_iter()
///     .map(|item| item.0)
///     .collect();
/// assert_eq!(ordered, vec!["c", "e", "b", "a", "d"]);
/// ```
pub fn sort_by_clock<'a, T, F>(items: &'a [T], clock: F) -> Vec<&'a T>
where
    F: Fn(&'a T) -> &'a str,
{
    sort_by_schedule(items, |item| clock_key(clock(item)))
}

/// Swaps the entries identified by `first` and `second` within `ordered`.
///
/// Returns `None` when either identifier is absent. Swapping an entry with
/// itself returns the ordering unchanged.
pub fn swap_by_id<'a, T, F>(
    mut ordered: Vec<&'a T>,
    id_of: F,
    first: &str,
    second: &str,
) -> Option<Vec<&'a T>>
where
    F: Fn(&T) -> &str,
{
    let a = ordered.iter().position(|entry| id_of(*entry) == first)?;
    let b = ordered.iter().position(|entry| id_of(*entry) == second)?;
    ordered.swap(a, b);
    Some(ordered)
}

/// The entry adjacent to `id` in `direction`, if any.
pub fn neighbour<'a, T, F>(
    ordered: &[&'a T],
    id_of: F,
    id: &str,
    direction: Direction,
) -> Option<&'a T>
where
    F: Fn(&T) -> &str,
{
    let index = ordered.iter().position(|entry| id_of(*entry) == id)?;
    let target = match direction {
        Direction::Up => index.checked_sub(1)?,
        Direction::Down => index + 1,
    };
    ordered.get(target).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Entry {
        id: &'static str,
        time: &'static str,
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry { id: "a", time: "" },
            Entry { id: "b", time: "18:00" },
            Entry { id: "c", time: "08:15" },
            Entry { id: "d", time: "   " },
            Entry { id: "e", time: "08:15" },
            Entry { id: "f", time: "12:00" },
        ]
    }

    fn ids(ordered: &[&Entry]) -> Vec<&'static str> {
        ordered.iter().map(|entry| entry.id).collect()
    }

    #[test]
    fn test_timed_entries_first_and_ties_stable() {
        let items = entries();
        let ordered = sort_by_clock(&items, |entry| entry.time);
        assert_eq!(ids(&ordered), vec!["c", "e", "f", "b", "a", "d"]);
    }

    #[test]
    fn test_sorting_twice_is_idempotent() {
        let items = entries();
        let once: Vec<&Entry> = sort_by_clock(&items, |entry| entry.time);
        let owned: Vec<Entry> = once
            .iter()
            .map(|entry| Entry {
                id: entry.id,
                time: entry.time,
            })
            .collect();
        let twice = sort_by_clock(&owned, |entry| entry.time);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_malformed_times_use_raw_comparison() {
        let items = vec![
            Entry { id: "late", time: "9:05" },
            Entry { id: "early", time: "10:00" },
        ];
        let ordered = sort_by_clock(&items, |entry| entry.time);
        assert_eq!(ids(&ordered), vec!["early", "late"]);
    }

    #[test]
    fn test_swap_by_id() {
        let items = entries();
        let ordered = sort_by_clock(&items, |entry| entry.time);
        let swapped = swap_by_id(ordered, |entry| entry.id, "c", "b").unwrap();
        assert_eq!(ids(&swapped), vec!["b", "e", "f", "c", "a", "d"]);
    }

    #[test]
    fn test_swap_with_unknown_id_is_none() {
        let items = entries();
        let ordered = sort_by_clock(&items, |entry| entry.time);
        assert!(swap_by_id(ordered, |entry| entry.id, "c", "zzz").is_none());
    }

    #[test]
    fn test_neighbour_at_edges() {
        let items = entries();
        let ordered = sort_by_clock(&items, |entry| entry.time);
        assert!(neighbour(&ordered, |entry| entry.id, "c", Direction::Up).is_none());
        assert_eq!(
            neighbour(&ordered, |entry| entry.id, "c", Direction::Down).map(|e| e.id),
            Some("e")
        );
        assert!(neighbour(&ordered, |entry| entry.id, "d", Direction::Down).is_none());
    }

    #[test]
    fn test_compare_present_first() {
        assert_eq!(compare_present_first(Some(1), None), Ordering::Less);
        assert_eq!(compare_present_first::<i32>(None, None), Ordering::Equal);
        assert_eq!(compare_present_first(None, Some(0)), Ordering::Greater);
    }
}
