//! State of the "jump to date" picker: a year stepper, a month strip and a
//! day grid for the chosen month.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::CalendarConfig;
use crate::grid::{is_same_month, month_days};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerDay {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_selected: bool,
    pub is_today: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpPicker {
    /// First day of the month being browsed.
    month_start: NaiveDate,
    min_year: i32,
    max_year: i32,
}

impl JumpPicker {
    pub fn open(current: NaiveDate, config: &CalendarConfig) -> Self {
        let month_start = current.with_day(1).unwrap_or(current);
        Self {
            month_start,
            min_year: config.min_year,
            max_year: config.max_year,
        }
    }

    pub fn year(&self) -> i32 {
        self.month_start.year()
    }

    /// Zero-based month, matching the order of the month strip.
    pub fn month0(&self) -> u32 {
        self.month_start.month0()
    }

    fn move_to(&mut self, year: i32, month0: u32) -> bool {
        if !(self.min_year..=self.max_year).contains(&year) {
            return false;
        }
        match NaiveDate::from_ymd_opt(year, month0 + 1, 1) {
            Some(date) => {
                self.month_start = date;
                true
            }
            None => false,
        }
    }

    /// Applies typed year input; anything that is not an in-range integer is ignored.
    pub fn set_year_input(&mut self, input: &str) -> bool {
        match input.trim().parse::<i32>() {
            Ok(year) => self.move_to(year, self.month0()),
            Err(_) => false,
        }
    }

    pub fn increment_year(&mut self) -> bool {
        self.move_to(self.year() + 1, self.month0())
    }

    pub fn decrement_year(&mut self) -> bool {
        self.move_to(self.year() - 1, self.month0())
    }

    pub fn select_month(&mut self, month0: u32) -> bool {
        month0 < 12 && self.move_to(self.year(), month0)
    }

    pub fn days(&self, selected: NaiveDate, today: NaiveDate, week_start: Weekday) -> Vec<PickerDay> {
        month_days(self.month_start, week_start)
            .into_iter()
            .map(|date| PickerDay {
                date,
                in_month: is_same_month(date, self.month_start),
                is_selected: date == selected,
                is_today: date == today,
            })
            .collect()
    }
}
