//! Map search links for free-text locations.
//!
//! Opening a map is a fire-and-forget collaborator: the core only decides
//! whether a request should be made and what it looks like.

use url::Url;

/// Base URL of the map search endpoint.
pub const MAP_SEARCH_BASE: &str = "https://www.google.com/maps/search/";

/// Something that can show a map for a search URL (a browser, a test spy).
pub trait MapOpener {
    /// Opens the map. Nothing is reported back.
    fn open(&self, url: &Url);
}

/// Builds a map search URL for `location`, or `None` when it is blank.
///
/// ```rust
/// use itinerary_core::maplink::map_search_url;
///
/// let url = map_search_url("Shibuya Crossing").unwrap();
/// assert!(url.as_str().contains("query=Shibuya+Crossing"));
/// assert!(map_search_url("   ").is_none());
/// ```
pub fn map_search_url(location: &str) -> Option<Url> {
    let query = location.trim();
    if query.is_empty() {
        return None;
    }
    Url::parse_with_params(MAP_SEARCH_BASE, &[("api", "1"), ("query", query)]).ok()
}

/// Asks `opener` to show `location`, returning whether a request was made.
pub fn open_map(opener: &dyn MapOpener, location: &str) -> bool {
    match map_search_url(location) {
        Some(url) => {
            opener.open(&url);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct Spy {
        opened: RefCell<Vec<String>>,
    }

    impl MapOpener for Spy {
        fn open(&self, url: &Url) {
            self.opened.borrow_mut().push(url.to_string());
        }
    }

    #[test]
    fn test_blank_location_suppresses_request() {
        let spy = Spy::default();
        assert!(!open_map(&spy, ""));
        assert!(!open_map(&spy, " \t "));
        assert!(spy.opened.borrow().is_empty());
    }

    #[test]
    fn test_location_is_encoded() {
        let spy = Spy::default();
        assert!(open_map(&spy, "  Café & Bar  "));

        let opened = spy.opened.borrow();
        assert_eq!(opened.len(), 1);
        let url = Url::parse(&opened[0]).expect("Opened URL should parse");
        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(query.contains(&("query".to_string(), "Café & Bar".to_string())));
        assert!(query.contains(&("api".to_string(), "1".to_string())));
    }
}
