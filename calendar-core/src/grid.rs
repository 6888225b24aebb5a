use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::CalendarConfig;
use crate::error::{CalendarError, Result};
use crate::layout::{midnight, starts_on, TimedEvent};

/// A proposed booking range, produced by clicking an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// One cell of the month grid.
#[derive(Debug)]
pub struct MonthCell<'a, E> {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    pub visible: Vec<&'a E>,
    /// Bookings not shown, rendered as "+N more".
    pub overflow: usize,
}

/// `None` for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month, 1).map(|first| end_of_month(first).day())
}

pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = (date.weekday().num_days_from_sunday() + 7 - week_start.num_days_from_sunday()) % 7;
    date - Duration::days(i64::from(offset))
}

pub fn end_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    start_of_week(date, week_start) + Duration::days(6)
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// The seven days of the week containing `date`.
pub fn week_days(date: NaiveDate, week_start: Weekday) -> Vec<NaiveDate> {
    let start = start_of_week(date, week_start);
    (0..7).map(|i| start + Duration::days(i)).collect()
}

/// Every day shown by a month grid: whole weeks from the week holding the
/// 1st through the week holding the last day.
pub fn month_days(date: NaiveDate, week_start: Weekday) -> Vec<NaiveDate> {
    let first = start_of_week(start_of_month(date), week_start);
    let last = end_of_week(end_of_month(date), week_start);
    first.iter_days().take_while(|d| *d <= last).collect()
}

pub fn month_weeks(date: NaiveDate, week_start: Weekday) -> Vec<Vec<NaiveDate>> {
    month_days(date, week_start)
        .chunks(7)
        .map(|week| week.to_vec())
        .collect()
}

/// `(hour, minute)` pairs covering a day at the given interval.
pub fn time_slots(interval_minutes: u32) -> Result<Vec<(u32, u32)>> {
    if interval_minutes == 0 || 60 % interval_minutes != 0 {
        return Err(CalendarError::InvalidSlotInterval(interval_minutes));
    }
    Ok((0..24)
        .flat_map(|hour| (0..60).step_by(interval_minutes as usize).map(move |minute| (hour, minute)))
        .collect())
}

pub fn slot_at(day: NaiveDate, hour: u32, minute: u32, duration_minutes: u32) -> TimeSlot {
    let start = midnight(day) + Duration::minutes(i64::from(hour * 60 + minute));
    TimeSlot {
        start,
        end: start + Duration::minutes(i64::from(duration_minutes)),
    }
}

pub fn hour_slot(day: NaiveDate, hour: u32, duration_minutes: u32) -> TimeSlot {
    slot_at(day, hour, 0, duration_minutes)
}

/// Clickable cells of a day column, one every `slot_interval_minutes`, each
/// proposing a booking of `default_slot_minutes`. An interval that does not
/// divide an hour falls back to hourly cells.
pub fn day_slots(day: NaiveDate, config: &CalendarConfig) -> Vec<TimeSlot> {
    let starts = time_slots(config.slot_interval_minutes).unwrap_or_else(|e| {
        warn!(error = %e, "falling back to hourly slots");
        (0..24).map(|hour| (hour, 0)).collect()
    });
    starts
        .into_iter()
        .map(|(hour, minute)| slot_at(day, hour, minute, config.default_slot_minutes))
        .collect()
}

/// Slot proposed when an empty month cell is clicked.
pub fn month_day_slot(day: NaiveDate, config: &CalendarConfig) -> TimeSlot {
    hour_slot(day, config.month_click_hour, config.default_slot_minutes)
}

/// Events starting on `day`, in input order.
pub fn bookings_on<E: TimedEvent>(bookings: &[E], day: NaiveDate) -> Vec<&E> {
    bookings.iter().filter(|b| starts_on(*b, day)).collect()
}

pub fn month_cells<'a, E: TimedEvent>(
    bookings: &'a [E],
    current: NaiveDate,
    today: NaiveDate,
    config: &CalendarConfig,
) -> Vec<MonthCell<'a, E>> {
    month_days(current, config.week_starts_on)
        .into_iter()
        .map(|date| {
            let mut visible = bookings_on(bookings, date);
            let overflow = visible.len().saturating_sub(config.max_month_events);
            visible.truncate(config.max_month_events);
            MonthCell {
                date,
                in_month: is_same_month(date, current),
                is_today: date == today,
                visible,
                overflow,
            }
        })
        .collect()
}
