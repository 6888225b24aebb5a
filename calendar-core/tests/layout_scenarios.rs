use calendar_core::layout::events_overlap;
use calendar_core::{compute_position, detect_overlaps, layout_day, CalendarConfig};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use shared_types::{BookingEvent, BookingStatus};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 10).unwrap()
}

fn at(h: u32, m: u32) -> NaiveDateTime {
    day().and_hms_opt(h, m, 0).unwrap()
}

fn booking(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> BookingEvent {
    BookingEvent {
        id: id.to_string(),
        title: format!("Booking {id}"),
        description: None,
        start_time: start,
        end_time: end,
        duration_minutes: (end - start).num_minutes(),
        status: BookingStatus::Confirmed,
        meeting_link: None,
        location: None,
        client_name: "John Doe".to_string(),
        client_email: "john@example.com".to_string(),
        client_phone: None,
        meeting_reason: None,
        cancellation_reason: None,
        reminder_sent_at: None,
        delivery_status: None,
        last_attempt_at: None,
        retry_count: 0,
        created_at: start,
        updated_at: start,
        client_id: None,
    }
}

fn group_ids(events: &[BookingEvent]) -> Vec<Vec<String>> {
    detect_overlaps(events, day())
        .iter()
        .map(|group| group.iter().map(|b| b.id.clone()).collect())
        .collect()
}

#[test]
fn whole_day_event_fills_the_column() {
    let next_midnight = at(0, 0) + Duration::days(1);
    let pos = compute_position(&booking("all", at(0, 0), next_midnight), day());
    assert_eq!(pos.top, 0.0);
    assert_eq!(pos.height, 100.0);
}

#[test]
fn events_within_the_day_stay_within_bounds() {
    for (h, m, len) in [(0, 0, 15), (9, 30, 90), (23, 45, 15), (12, 0, 720)] {
        let start = at(h, m);
        let pos = compute_position(&booking("x", start, start + Duration::minutes(len)), day());
        assert!((0.0..=100.0).contains(&pos.top), "top {}", pos.top);
        assert!(pos.top + pos.height <= 200.0);
        assert!(pos.height >= 0.0);
    }
}

#[test]
fn position_is_deterministic_and_idempotent() {
    let event = booking("a", at(9, 17), at(10, 43));
    let first = compute_position(&event, day());
    let second = compute_position(&event, day());
    assert_eq!(first.top.to_bits(), second.top.to_bits());
    assert_eq!(first.height.to_bits(), second.height.to_bits());
    assert_eq!(first.left.to_bits(), second.left.to_bits());
    assert_eq!(first.width.to_bits(), second.width.to_bits());
}

#[test]
fn partial_overlap_scenario() {
    let events = vec![
        booking("A", at(9, 0), at(10, 0)),
        booking("B", at(9, 30), at(10, 30)),
        booking("C", at(11, 0), at(12, 0)),
    ];
    assert_eq!(group_ids(&events), vec![vec!["A", "C"], vec!["B"]]);
}

#[test]
fn full_overlap_gets_one_lane_each() {
    let events = vec![
        booking("A", at(9, 0), at(10, 0)),
        booking("B", at(9, 0), at(10, 0)),
        booking("C", at(9, 0), at(10, 0)),
    ];
    assert_eq!(group_ids(&events), vec![vec!["A"], vec!["B"], vec!["C"]]);
}

#[test]
fn touching_events_share_a_lane() {
    let events = vec![
        booking("A", at(9, 0), at(10, 0)),
        booking("B", at(10, 0), at(11, 0)),
    ];
    assert_eq!(group_ids(&events), vec![vec!["A", "B"]]);
}

#[test]
fn zero_length_event_overlaps_nothing() {
    let events = vec![
        booking("long", at(9, 0), at(11, 0)),
        booking("blip", at(10, 0), at(10, 0)),
    ];
    let pos = compute_position(&events[1], day());
    assert_eq!(pos.height, 0.0);
    assert_eq!(group_ids(&events), vec![vec!["long", "blip"]]);
}

#[test]
fn unsorted_input_is_grouped_in_start_order() {
    let events = vec![
        booking("C", at(11, 0), at(12, 0)),
        booking("B", at(9, 30), at(10, 30)),
        booking("A", at(9, 0), at(10, 0)),
    ];
    assert_eq!(group_ids(&events), vec![vec!["A", "C"], vec!["B"]]);
}

#[test]
fn ties_keep_input_order() {
    let events = vec![
        booking("second", at(9, 0), at(9, 30)),
        booking("first", at(8, 0), at(9, 0)),
        booking("third", at(9, 0), at(10, 0)),
    ];
    assert_eq!(
        group_ids(&events),
        vec![vec!["first", "second"], vec!["third"]]
    );
}

#[test]
fn other_days_and_empty_input_are_filtered() {
    assert!(detect_overlaps::<BookingEvent>(&[], day()).is_empty());

    let yesterday = at(23, 0) - Duration::days(1);
    let events = vec![
        booking("spans-midnight", yesterday, at(1, 0)),
        booking("today", at(0, 30), at(1, 30)),
    ];
    assert_eq!(group_ids(&events), vec![vec!["today"]]);
}

#[test]
fn every_event_lands_in_exactly_one_non_overlapping_lane() {
    let mut events = Vec::new();
    for i in 0..40u32 {
        let start = at(6 + (i * 7) % 14, (i * 13) % 60);
        let len = 15 + i64::from((i * 37) % 150);
        events.push(booking(&format!("e{i}"), start, start + Duration::minutes(len)));
    }

    let groups = detect_overlaps(&events, day());
    let mut seen: Vec<&str> = groups
        .iter()
        .flat_map(|g| g.iter().map(|b| b.id.as_str()))
        .collect();
    seen.sort_unstable();
    let mut expected: Vec<&str> = events.iter().map(|b| b.id.as_str()).collect();
    expected.sort_unstable();
    assert_eq!(seen, expected);

    for group in &groups {
        let members = group.events();
        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                assert!(!events_overlap(*a, *b), "{} overlaps {}", a.id, b.id);
            }
        }
    }
}

#[test]
fn side_by_side_layout_uses_lane_fractions() {
    let events = vec![
        booking("A", at(9, 0), at(10, 0)),
        booking("B", at(9, 30), at(10, 30)),
        booking("C", at(11, 0), at(12, 0)),
    ];
    let placed = layout_day(&events, day(), &CalendarConfig::default());
    let summary: Vec<(&str, usize, f64)> = placed
        .iter()
        .map(|p| (p.event.id.as_str(), p.lane, p.position.left))
        .collect();
    assert_eq!(summary, vec![("A", 0, 0.0), ("C", 0, 0.0), ("B", 1, 50.0)]);
    assert!(placed.iter().all(|p| p.position.width == 45.0));
}
