mod common;

use std::fs;

use itinerary_core::{
    config::{DAYS_KEY, EVENTS_KEY},
    params::{AddCalendarDay, AddEvent, Id, MoveEvent},
    Event,
};
use jiff::civil::date;

use common::{builder, create_test_environment};

#[test]
fn test_pool_workflow_survives_restart() {
    let (_temp_dir, store_dir) = create_test_environment();

    {
        let mut session = builder(&store_dir).open_pool().expect("Failed to open pool");
        let dates: Vec<_> = session.days().iter().map(|day| day.date).collect();
        assert_eq!(dates, vec![date(2026, 2, 5), date(2026, 2, 6), date(2026, 2, 7)]);

        let extra = session
            .add_day(&AddCalendarDay::default())
            .expect("Failed to add day");
        assert_eq!(extra.date, date(2026, 2, 8));

        let second = session.days()[1].id.clone();
        session.select_day(&Id { id: second }).expect("Failed to select day");
        let event = session
            .add_event(&AddEvent {
                title: "Team Lab".to_string(),
                time: Some("1999-01-01T16:00".to_string()),
                location: Some("Toyosu".to_string()),
                ..Default::default()
            })
            .expect("Failed to add event");
        assert_eq!(event.start_at, date(2026, 2, 6).at(16, 0, 0, 0));

        session
            .move_event(&MoveEvent {
                id: event.id,
                day_id: extra.id,
            })
            .expect("Failed to move event");
    }

    let session = builder(&store_dir).open_pool().expect("Failed to reopen pool");
    assert_eq!(session.days().len(), 4);
    assert_eq!(session.events().len(), 1);
    assert_eq!(session.events()[0].start_at, date(2026, 2, 8).at(16, 0, 0, 0));

    let schedules = session.schedules();
    assert!(schedules[..3].iter().all(|s| s.events.is_empty()));
    assert_eq!(schedules[3].events[0].title, "Team Lab");
}

#[test]
fn test_days_and_events_are_separate_files() {
    let (_temp_dir, store_dir) = create_test_environment();
    let mut session = builder(&store_dir).open_pool().expect("Failed to open pool");
    let days_path = session.store().path_for(DAYS_KEY);
    let events_path = session.store().path_for(EVENTS_KEY);
    assert_ne!(days_path, events_path);

    let days_before = fs::read_to_string(&days_path).expect("Days file should exist");
    let day_id = session.days()[0].id.clone();
    session
        .add_event(&AddEvent {
            title: "Breakfast".to_string(),
            time: Some("08:00".to_string()),
            day_id: Some(day_id),
            ..Default::default()
        })
        .expect("Failed to add event");

    // Adding an event leaves the day list untouched.
    let days_after = fs::read_to_string(&days_path).expect("Days file should exist");
    assert_eq!(days_before, days_after);

    let raw = fs::read_to_string(&events_path).expect("Events file should exist");
    let events: Vec<Event> = serde_json::from_str(&raw).expect("Events file should parse");
    assert_eq!(events.len(), 1);
    assert!(raw.contains("\"startAt\":\"2026-02-05T08:00:00\""));
}

#[test]
fn test_corrupt_days_file_reseeds_and_keeps_events() {
    let (_temp_dir, store_dir) = create_test_environment();
    {
        let mut session = builder(&store_dir).open_pool().expect("Failed to open pool");
        let day_id = session.days()[0].id.clone();
        session
            .add_event(&AddEvent {
                title: "Breakfast".to_string(),
                time: Some("08:00".to_string()),
                day_id: Some(day_id),
                ..Default::default()
            })
            .expect("Failed to add event");
        fs::write(session.store().path_for(DAYS_KEY), "{{{").expect("Failed to corrupt days");
    }

    let session = builder(&store_dir).open_pool().expect("Failed to reopen pool");
    assert_eq!(session.days().len(), 3);
    assert_eq!(session.events().len(), 1);
    // Reseeded days cover the same dates, so the event is grouped again.
    assert_eq!(session.schedules()[0].events.len(), 1);
}
