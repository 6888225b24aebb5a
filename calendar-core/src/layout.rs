//! Event layout for the time-grid views.
//!
//! A day column is treated as 100% tall for 24 hours. [`compute_position`]
//! maps one event onto that column; [`detect_overlaps`] buckets the events
//! starting on a day into lanes whose members never overlap in time; and
//! [`layout_day`] combines the two according to the configured
//! [`OverlapMode`].
//!
//! Inputs are borrowed and never validated: an event ending before it starts
//! simply produces a negative height, and events that cross midnight are only
//! attributed to the day they start on.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use shared_types::{BookingEvent, BookingStatus};
use tracing::{debug, trace};

use crate::config::{CalendarConfig, OverlapMode};

pub const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// Width of a single event when no lane fan-out is applied.
pub const SINGLE_EVENT_WIDTH: f64 = 95.0;

/// Anything with a time range that can be placed on the grid.
pub trait TimedEvent {
    fn event_id(&self) -> &str;
    fn start(&self) -> NaiveDateTime;
    fn end(&self) -> NaiveDateTime;
    fn status(&self) -> BookingStatus;
}

impl TimedEvent for BookingEvent {
    fn event_id(&self) -> &str {
        &self.id
    }

    fn start(&self) -> NaiveDateTime {
        self.start_time
    }

    fn end(&self) -> NaiveDateTime {
        self.end_time
    }

    fn status(&self) -> BookingStatus {
        self.status
    }
}

impl<T: TimedEvent + ?Sized> TimedEvent for &T {
    fn event_id(&self) -> &str {
        (**self).event_id()
    }

    fn start(&self) -> NaiveDateTime {
        (**self).start()
    }

    fn end(&self) -> NaiveDateTime {
        (**self).end()
    }

    fn status(&self) -> BookingStatus {
        (**self).status()
    }
}

/// Percent rectangle of an event inside a day column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventPosition {
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
}

impl EventPosition {
    /// Inline CSS for an absolutely positioned block.
    pub fn to_style(&self) -> String {
        format!(
            "top: {}%; height: {}%; left: {}%; width: {}%;",
            self.top, self.height, self.left, self.width
        )
    }
}

/// A lane of events that pairwise do not overlap, in start order.
#[derive(Debug)]
pub struct OverlapGroup<'a, E> {
    events: Vec<&'a E>,
}

impl<'a, E: TimedEvent> OverlapGroup<'a, E> {
    pub fn events(&self) -> &[&'a E] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a E> + '_ {
        self.events.iter().copied()
    }

    fn conflicts_with(&self, candidate: &E) -> bool {
        self.events.iter().any(|member| events_overlap(*member, candidate))
    }
}

/// Event placed in a lane with its final rectangle.
#[derive(Debug)]
pub struct PositionedEvent<'a, E> {
    pub event: &'a E,
    pub lane: usize,
    pub lanes: usize,
    pub position: EventPosition,
}

pub fn midnight(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

fn percent_of_day(minutes: i64) -> f64 {
    minutes as f64 / MINUTES_PER_DAY * 100.0
}

/// Half-open overlap test. Empty or reversed ranges overlap nothing.
pub fn intervals_overlap(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < a_end && b_start < b_end && a_start < b_end && b_start < a_end
}

pub fn events_overlap<A: TimedEvent + ?Sized, B: TimedEvent + ?Sized>(a: &A, b: &B) -> bool {
    intervals_overlap(a.start(), a.end(), b.start(), b.end())
}

pub fn starts_on<E: TimedEvent + ?Sized>(event: &E, day: NaiveDate) -> bool {
    event.start().date() == day
}

/// Places one event on the column for `day`. Offsets are whole minutes and
/// are not clamped, so events starting before or running past the day land
/// outside `[0, 100]`.
pub fn compute_position<E: TimedEvent + ?Sized>(event: &E, day: NaiveDate) -> EventPosition {
    let start_offset = (event.start() - midnight(day)).num_minutes();
    let duration = (event.end() - event.start()).num_minutes();
    if duration < 0 {
        debug!(id = event.event_id(), duration, "event ends before it starts");
    }

    EventPosition {
        top: percent_of_day(start_offset),
        height: percent_of_day(duration),
        left: 0.0,
        width: SINGLE_EVENT_WIDTH,
    }
}

/// Greedy first-fit lane assignment for the events starting on `day`.
///
/// Events are visited in start order (ties keep input order) and dropped into
/// the first existing lane none of whose members they overlap. The lane count
/// is valid but not necessarily minimal. Zero-length and reversed events
/// overlap nothing, so they always land in the first lane.
pub fn detect_overlaps<E: TimedEvent>(events: &[E], day: NaiveDate) -> Vec<OverlapGroup<'_, E>> {
    let mut day_events: Vec<&E> = events.iter().filter(|e| starts_on(*e, day)).collect();
    day_events.sort_by_key(|e| e.start());

    let mut groups: Vec<OverlapGroup<'_, E>> = Vec::new();
    for event in day_events {
        match groups.iter_mut().find(|group| !group.conflicts_with(event)) {
            Some(group) => group.events.push(event),
            None => groups.push(OverlapGroup { events: vec![event] }),
        }
    }

    trace!(%day, lanes = groups.len(), "detected overlap lanes");
    groups
}

/// Positions every event starting on `day`.
///
/// In [`OverlapMode::SideBySide`] an event in lane `i` of `n` gets
/// `left = i / n * 100` and `width = 100 / n - lane_margin`, with `n` counted
/// over the whole day. The width never drops below zero, however many lanes
/// there are. In [`OverlapMode::Stacked`] each event keeps
/// [`compute_position`] unchanged and input order is preserved.
pub fn layout_day<'a, E: TimedEvent>(
    events: &'a [E],
    day: NaiveDate,
    config: &CalendarConfig,
) -> Vec<PositionedEvent<'a, E>> {
    match config.overlap_mode {
        OverlapMode::Stacked => events
            .iter()
            .filter(|e| starts_on(*e, day))
            .map(|event| PositionedEvent {
                event,
                lane: 0,
                lanes: 1,
                position: compute_position(event, day),
            })
            .collect(),
        OverlapMode::SideBySide => {
            let groups = detect_overlaps(events, day);
            let lanes = groups.len();
            let lane_width = 100.0 / lanes.max(1) as f64;

            groups
                .iter()
                .enumerate()
                .flat_map(|(lane, group)| {
                    group.iter().map(move |event| {
                        let mut position = compute_position(event, day);
                        position.left = lane as f64 * lane_width;
                        position.width = (lane_width - config.lane_margin).max(0.0);
                        PositionedEvent {
                            event,
                            lane,
                            lanes,
                            position,
                        }
                    })
                })
                .collect()
        }
    }
}

/// Vertical position of a wall-clock time, for the "now" marker.
pub fn now_position(time: NaiveTime) -> f64 {
    percent_of_day(i64::from(time.hour() * 60 + time.minute()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Slot {
        id: &'static str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    }

    impl TimedEvent for Slot {
        fn event_id(&self) -> &str {
            self.id
        }
        fn start(&self) -> NaiveDateTime {
            self.start
        }
        fn end(&self) -> NaiveDateTime {
            self.end
        }
        fn status(&self) -> BookingStatus {
            BookingStatus::Pending
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 10).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        day().and_hms_opt(h, m, 0).unwrap()
    }

    fn slot(id: &'static str, start: NaiveDateTime, end: NaiveDateTime) -> Slot {
        Slot { id, start, end }
    }

    #[test]
    fn nine_to_ten_sits_three_eighths_down() {
        let pos = compute_position(&slot("a", at(9, 0), at(10, 0)), day());
        assert_eq!(pos.top, 37.5);
        assert!((pos.height - 100.0 / 24.0).abs() < 1e-9);
        assert_eq!(pos.left, 0.0);
        assert_eq!(pos.width, 95.0);
    }

    #[test]
    fn reversed_event_gets_negative_height() {
        let pos = compute_position(&slot("a", at(10, 0), at(9, 0)), day());
        assert!(pos.height < 0.0);
    }

    #[test]
    fn event_before_the_day_has_negative_top() {
        let prev = NaiveDate::from_ymd_opt(2025, 12, 9).unwrap().and_hms_opt(23, 0, 0).unwrap();
        let pos = compute_position(&slot("a", prev, at(1, 0)), day());
        assert!(pos.top < 0.0);
        assert!((pos.height - 200.0 / 24.0).abs() < 1e-9);
    }

    #[test]
    fn empty_and_reversed_intervals_overlap_nothing() {
        assert!(!intervals_overlap(at(10, 0), at(10, 0), at(9, 0), at(11, 0)));
        assert!(!intervals_overlap(at(11, 0), at(9, 0), at(9, 30), at(10, 0)));
        assert!(intervals_overlap(at(9, 0), at(10, 0), at(9, 59), at(11, 0)));
    }

    #[test]
    fn reversed_events_share_the_first_lane() {
        let events = vec![
            slot("wide", at(8, 0), at(12, 0)),
            slot("reversed", at(10, 0), at(9, 0)),
        ];
        let groups = detect_overlaps(&events, day());
        assert_eq!(groups.len(), 1);
        let ids: Vec<_> = groups[0].iter().map(|e| e.id).collect();
        assert_eq!(ids, ["wide", "reversed"]);
    }

    #[test]
    fn crowded_lanes_never_get_negative_width() {
        let events: Vec<_> = (0..25).map(|_| slot("x", at(9, 0), at(10, 0))).collect();
        let placed = layout_day(&events, day(), &CalendarConfig::default());
        assert_eq!(placed[0].lanes, 25);
        assert!(placed.iter().all(|p| p.position.width >= 0.0));
        assert!(placed.iter().all(|p| p.position.left < 100.0));
    }

    #[test]
    fn stacked_mode_keeps_input_order_and_fixed_width() {
        let events = vec![
            slot("late", at(11, 0), at(12, 0)),
            slot("early", at(9, 0), at(10, 0)),
        ];
        let config = CalendarConfig {
            overlap_mode: OverlapMode::Stacked,
            ..Default::default()
        };
        let placed = layout_day(&events, day(), &config);
        let ids: Vec<_> = placed.iter().map(|p| p.event.id).collect();
        assert_eq!(ids, ["late", "early"]);
        assert!(placed.iter().all(|p| p.position.width == SINGLE_EVENT_WIDTH));
    }

    #[test]
    fn side_by_side_splits_width_across_lanes() {
        let events = vec![
            slot("a", at(9, 0), at(10, 0)),
            slot("b", at(9, 30), at(10, 30)),
        ];
        let placed = layout_day(&events, day(), &CalendarConfig::default());
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0].event.id, "a");
        assert_eq!(placed[0].position.left, 0.0);
        assert_eq!(placed[0].position.width, 45.0);
        assert_eq!(placed[1].event.id, "b");
        assert_eq!(placed[1].lane, 1);
        assert_eq!(placed[1].position.left, 50.0);
        assert_eq!(placed[1].lanes, 2);
    }

    #[test]
    fn single_lane_matches_single_event_width() {
        let events = vec![slot("a", at(9, 0), at(10, 0))];
        let placed = layout_day(&events, day(), &CalendarConfig::default());
        assert_eq!(placed[0].position, compute_position(&events[0], day()));
    }

    #[test]
    fn now_marker_at_noon_is_halfway() {
        assert_eq!(now_position(NaiveTime::from_hms_opt(12, 0, 0).unwrap()), 50.0);
    }

    #[test]
    fn style_string_uses_percentages() {
        let pos = EventPosition {
            top: 25.0,
            height: 12.5,
            left: 0.0,
            width: 95.0,
        };
        assert_eq!(pos.to_style(), "top: 25%; height: 12.5%; left: 0%; width: 95%;");
    }
}
