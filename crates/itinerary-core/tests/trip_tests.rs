mod common;

use std::fs;

use itinerary_core::{
    config::TRIP_KEY,
    params::{AddItem, SwapItems, UpdateItem},
    FileStore, Trip,
};

use common::{builder, create_test_environment};

fn add(session: &mut itinerary_core::TripSession<FileStore>, title: &str, time: &str) -> String {
    let day_id = session.trip().days[0].id.clone();
    session
        .add_item(&AddItem {
            day_id,
            title: title.to_string(),
            time: Some(time.to_string()),
            ..Default::default()
        })
        .expect("Failed to add item")
        .id
}

#[test]
fn test_trip_survives_restart() {
    let (_temp_dir, store_dir) = create_test_environment();

    let expected = {
        let mut session = builder(&store_dir).open_trip().expect("Failed to open trip");
        session.rename("Tokyo Trip").expect("Failed to rename");
        session.set_date_range("Feb 5 - Feb 7").expect("Failed to set dates");
        let breakfast = add(&mut session, "Breakfast", "08:00");
        let lunch = add(&mut session, "Lunch", "12:00");
        session
            .swap_items(&SwapItems {
                first_id: breakfast,
                second_id: lunch,
            })
            .expect("Failed to swap");
        session.trip().clone()
    };

    let session = builder(&store_dir).open_trip().expect("Failed to reopen trip");
    assert_eq!(session.trip(), &expected);

    // The manual order is part of the persisted document.
    let titles: Vec<&str> = session.trip().days[0]
        .ordered_items()
        .into_iter()
        .map(|item| item.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Lunch", "Breakfast"]);
}

#[test]
fn test_store_file_matches_memory_after_each_change() {
    let (_temp_dir, store_dir) = create_test_environment();
    let mut session = builder(&store_dir).open_trip().expect("Failed to open trip");
    let path = session.store().path_for(TRIP_KEY);

    let read_back = |path: &std::path::Path| -> Trip {
        let raw = fs::read_to_string(path).expect("Trip file should exist");
        serde_json::from_str(&raw).expect("Trip file should parse")
    };

    assert_eq!(&read_back(&path), session.trip());

    let id = add(&mut session, "Museum", "10:00");
    assert_eq!(&read_back(&path), session.trip());

    session
        .update_item(&UpdateItem {
            id,
            time: Some("9:15".to_string()),
            ..Default::default()
        })
        .expect("Failed to update");
    assert_eq!(&read_back(&path), session.trip());
    assert_eq!(session.trip().days[0].items[0].time, "09:15");
}

#[test]
fn test_unreadable_trip_file_is_replaced() {
    let (_temp_dir, store_dir) = create_test_environment();
    let path = FileStore::new(&store_dir).path_for(TRIP_KEY);
    fs::create_dir_all(&store_dir).expect("Failed to create store dir");
    fs::write(&path, "not json at all").expect("Failed to write garbage");

    let session = builder(&store_dir).open_trip().expect("Failed to open trip");
    assert_eq!(session.trip().days.len(), 3);

    let raw = fs::read_to_string(&path).expect("Trip file should exist");
    let stored: Trip = serde_json::from_str(&raw).expect("Trip file should now parse");
    assert_eq!(&stored, session.trip());
}

#[test]
fn test_seed_days_is_configurable() {
    let (_temp_dir, store_dir) = create_test_environment();
    let session = builder(&store_dir)
        .with_seed_days(5)
        .open_trip()
        .expect("Failed to open trip");
    assert_eq!(session.trip().days.len(), 5);
}
