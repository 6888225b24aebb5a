use chrono::Duration;
use shared_types::RescheduleBookingDto;
use tracing::debug;

use crate::format::to_datetime_local;
use crate::layout::{TimedEvent, MINUTES_PER_DAY};

/// Pointer tracking for an event being dragged within a day column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    dragged_event_id: Option<String>,
    start: (f64, f64),
    current: (f64, f64),
}

impl DragState {
    pub fn start(&mut self, event_id: impl Into<String>, x: f64, y: f64) {
        self.dragged_event_id = Some(event_id.into());
        self.start = (x, y);
        self.current = (x, y);
    }

    /// Ignored unless a drag is in progress.
    pub fn move_to(&mut self, x: f64, y: f64) {
        if self.is_dragging() {
            self.current = (x, y);
        }
    }

    /// Ends the drag, returning the dragged id and its final offset.
    pub fn end(&mut self) -> Option<(String, (f64, f64))> {
        let offset = self.offset();
        let id = self.dragged_event_id.take();
        *self = Self::default();
        id.map(|id| (id, offset))
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged_event_id.is_some()
    }

    pub fn dragged_event_id(&self) -> Option<&str> {
        self.dragged_event_id.as_deref()
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.current.0 - self.start.0, self.current.1 - self.start.1)
    }
}

/// Turns a vertical drag over a 24-hour column into a reschedule request.
///
/// The shift is snapped to `snap_minutes` and the event keeps its duration.
/// Returns `None` when nothing would move.
pub fn reschedule_from_drag<E: TimedEvent + ?Sized>(
    event: &E,
    offset_y_px: f64,
    column_height_px: f64,
    snap_minutes: u32,
) -> Option<RescheduleBookingDto> {
    if column_height_px.is_nan() || column_height_px <= 0.0 || !offset_y_px.is_finite() || snap_minutes == 0 {
        return None;
    }
    let snap = f64::from(snap_minutes);
    let raw_minutes = offset_y_px / column_height_px * MINUTES_PER_DAY;
    let shift = ((raw_minutes / snap).round() * snap) as i64;
    if shift == 0 {
        return None;
    }

    let delta = Duration::minutes(shift);
    debug!(id = event.event_id(), shift, "rescheduling dragged event");
    Some(RescheduleBookingDto {
        new_start_time: to_datetime_local(event.start() + delta),
        new_end_time: to_datetime_local(event.end() + delta),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use shared_types::BookingStatus;

    struct Block(NaiveDateTime, NaiveDateTime);

    impl TimedEvent for Block {
        fn event_id(&self) -> &str {
            "block"
        }
        fn start(&self) -> NaiveDateTime {
            self.0
        }
        fn end(&self) -> NaiveDateTime {
            self.1
        }
        fn status(&self) -> BookingStatus {
            BookingStatus::Confirmed
        }
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn drag_tracks_offset_until_released() {
        let mut drag = DragState::default();
        drag.move_to(50.0, 50.0);
        assert!(!drag.is_dragging());

        drag.start("7", 10.0, 100.0);
        drag.move_to(12.0, 160.0);
        assert_eq!(drag.dragged_event_id(), Some("7"));
        assert_eq!(drag.offset(), (2.0, 60.0));

        assert_eq!(drag.end(), Some(("7".to_string(), (2.0, 60.0))));
        assert!(!drag.is_dragging());
        assert_eq!(drag.end(), None);
    }

    #[test]
    fn one_hour_of_column_moves_one_hour() {
        let block = Block(at(9, 0), at(10, 0));
        // 1440 px column: one pixel per minute.
        let dto = reschedule_from_drag(&block, 62.0, 1440.0, 15).unwrap();
        assert_eq!(dto.new_start_time, "2026-10-16T10:00");
        assert_eq!(dto.new_end_time, "2026-10-16T11:00");
    }

    #[test]
    fn upward_drag_moves_earlier() {
        let block = Block(at(9, 0), at(9, 30));
        let dto = reschedule_from_drag(&block, -29.0, 1440.0, 15).unwrap();
        assert_eq!(dto.new_start_time, "2026-10-16T08:30");
        assert_eq!(dto.new_end_time, "2026-10-16T09:00");
    }

    #[test]
    fn tiny_or_degenerate_drags_do_nothing() {
        let block = Block(at(9, 0), at(10, 0));
        assert_eq!(reschedule_from_drag(&block, 5.0, 1440.0, 15), None);
        assert_eq!(reschedule_from_drag(&block, 100.0, 0.0, 15), None);
        assert_eq!(reschedule_from_drag(&block, f64::NAN, 1440.0, 15), None);
    }
}
