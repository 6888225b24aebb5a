//! Display and `datetime-local` formatting for calendar labels.
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{CalendarError, Result};

/// Format produced and accepted by `<input type="datetime-local">`.
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const MONTH_NAMES_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn to_datetime_local(value: NaiveDateTime) -> String {
    value.format(DATETIME_LOCAL_FORMAT).to_string()
}

/// Parses a `datetime-local` value; a trailing `:SS` is tolerated.
pub fn parse_datetime_local(value: &str) -> Result<NaiveDateTime> {
    let trimmed = value.trim();
    NaiveDateTime::parse_from_str(trimmed, DATETIME_LOCAL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| CalendarError::InvalidDateTime(value.to_string()))
}

fn twelve_hour(hour: u32) -> (u32, &'static str) {
    match hour {
        0 => (12, "AM"),
        h if h < 12 => (h, "AM"),
        12 => (12, "PM"),
        h => (h - 12, "PM"),
    }
}

/// "9:05 AM"
pub fn format_time(time: NaiveTime) -> String {
    let (hour, period) = twelve_hour(time.hour());
    format!("{}:{:02} {}", hour, time.minute(), period)
}

/// "9 AM", used in the hour gutter.
pub fn format_hour(hour: u32) -> String {
    let (hour, period) = twelve_hour(hour % 24);
    format!("{} {}", hour, period)
}

pub fn format_time_range(start: NaiveDateTime, end: NaiveDateTime) -> String {
    format!("{} - {}", format_time(start.time()), format_time(end.time()))
}

/// "Friday, October 16, 2026"
pub fn format_day_title(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "October 2026"
pub fn format_month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

pub fn weekday_short(date: NaiveDate) -> &'static str {
    use chrono::Datelike;
    WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datetime_local_round_trips_minutes() {
        let value = NaiveDate::from_ymd_opt(2025, 12, 10)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        assert_eq!(to_datetime_local(value), "2025-12-10T09:05");
        assert_eq!(parse_datetime_local("2025-12-10T09:05"), Ok(value));
        assert_eq!(parse_datetime_local("2025-12-10T09:05:00"), Ok(value));
    }

    #[test]
    fn garbage_datetime_is_rejected() {
        assert_eq!(
            parse_datetime_local("tomorrow"),
            Err(CalendarError::InvalidDateTime("tomorrow".to_string()))
        );
    }

    #[test]
    fn twelve_hour_labels() {
        assert_eq!(format_hour(0), "12 AM");
        assert_eq!(format_hour(12), "12 PM");
        assert_eq!(format_hour(15), "3 PM");
        assert_eq!(format_time(NaiveTime::from_hms_opt(9, 5, 0).unwrap()), "9:05 AM");
        assert_eq!(format_time(NaiveTime::from_hms_opt(23, 30, 0).unwrap()), "11:30 PM");
    }

    #[test]
    fn titles() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 6).unwrap();
        assert_eq!(format_day_title(date), "Tuesday, October 6, 2026");
        assert_eq!(format_month_title(date), "October 2026");
        assert_eq!(weekday_short(date), "Tue");
    }
}
