use chrono::Weekday;
use serde::{Deserialize, Serialize};
use shared_types::CalendarView;
use tracing::warn;

use crate::error::{CalendarError, Result};

/// How concurrent events share a day column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverlapMode {
    /// Every event keeps `left = 0` and the fixed single-event width; overlaps stack by z-order.
    Stacked,
    /// Events are fanned out across the lanes found by overlap detection.
    #[default]
    SideBySide,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub initial_view: CalendarView,
    pub week_starts_on: Weekday,
    /// Spacing of the clickable cells in week and day columns, in minutes.
    pub slot_interval_minutes: u32,
    /// Length of a slot created by clicking an hour cell.
    pub default_slot_minutes: u32,
    /// Start hour of the slot created by clicking a month cell.
    pub month_click_hour: u32,
    pub max_month_events: usize,
    /// Horizontal gap (percent) kept free at the right of each lane.
    pub lane_margin: f64,
    pub overlap_mode: OverlapMode,
    /// Drag-to-reschedule snaps to this many minutes.
    pub snap_minutes: u32,
    pub min_year: i32,
    pub max_year: i32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            initial_view: CalendarView::Week,
            week_starts_on: Weekday::Sun,
            slot_interval_minutes: 30,
            default_slot_minutes: 60,
            month_click_hour: 9,
            max_month_events: 3,
            lane_margin: 5.0,
            overlap_mode: OverlapMode::SideBySide,
            snap_minutes: 15,
            min_year: 1900,
            max_year: 2100,
        }
    }
}

impl CalendarConfig {
    pub fn validate(&self) -> Result<()> {
        if self.slot_interval_minutes == 0 || 60 % self.slot_interval_minutes != 0 {
            return Err(CalendarError::InvalidSlotInterval(self.slot_interval_minutes));
        }
        if self.default_slot_minutes == 0 {
            return Err(CalendarError::InvalidConfig(
                "default_slot_minutes must be positive".to_string(),
            ));
        }
        if self.month_click_hour > 23 {
            return Err(CalendarError::InvalidConfig(format!(
                "month_click_hour must be below 24, got {}",
                self.month_click_hour
            )));
        }
        if !(0.0..100.0).contains(&self.lane_margin) {
            return Err(CalendarError::InvalidConfig(format!(
                "lane_margin must be in [0, 100), got {}",
                self.lane_margin
            )));
        }
        if self.snap_minutes == 0 {
            return Err(CalendarError::InvalidConfig(
                "snap_minutes must be positive".to_string(),
            ));
        }
        if self.min_year > self.max_year {
            return Err(CalendarError::InvalidConfig(format!(
                "year range {}..={} is empty",
                self.min_year, self.max_year
            )));
        }
        Ok(())
    }

    /// Returns `self` when valid, the defaults otherwise.
    pub fn or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                warn!(error = %e, "rejecting calendar configuration, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(CalendarConfig::default().validate(), Ok(()));
    }

    #[test]
    fn slot_interval_must_divide_an_hour() {
        let config = CalendarConfig {
            slot_interval_minutes: 25,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(CalendarError::InvalidSlotInterval(25)));
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let config = CalendarConfig {
            min_year: 2200,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CalendarError::InvalidConfig(_))));
        assert_eq!(config.or_default(), CalendarConfig::default());
    }

    #[test]
    fn partial_json_fills_missing_fields() {
        let config: CalendarConfig =
            serde_json::from_str(r#"{"initial_view":"month","overlap_mode":"stacked"}"#).unwrap();
        assert_eq!(config.initial_view, CalendarView::Month);
        assert_eq!(config.overlap_mode, OverlapMode::Stacked);
        assert_eq!(config.max_month_events, 3);
    }
}
