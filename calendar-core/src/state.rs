//! View state of the top-level calendar.
//!
//! All transient UI state lives in one serializable [`ViewState`] record and
//! only changes through the transition methods below.

use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use shared_types::CalendarView;
use tracing::debug;

use crate::format::format_month_title;
use crate::grid::TimeSlot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModalState {
    #[default]
    Closed,
    /// Creating a booking for an empty slot.
    Create { slot: TimeSlot },
    /// Editing an existing booking.
    Edit { booking_id: String },
    JumpToDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub current_date: NaiveDate,
    pub view: CalendarView,
    pub modal: ModalState,
}

impl ViewState {
    pub fn new(current_date: NaiveDate, view: CalendarView) -> Self {
        Self {
            current_date,
            view,
            modal: ModalState::Closed,
        }
    }

    /// Moves back one month, week or day depending on the view. Month steps
    /// clamp to the last day of a shorter month.
    pub fn navigate_previous(&mut self) {
        self.current_date = self.step(-1);
        debug!(date = %self.current_date, view = ?self.view, "navigated back");
    }

    pub fn navigate_next(&mut self) {
        self.current_date = self.step(1);
        debug!(date = %self.current_date, view = ?self.view, "navigated forward");
    }

    fn step(&self, direction: i64) -> NaiveDate {
        let date = self.current_date;
        match self.view {
            CalendarView::Month if direction < 0 => date.checked_sub_months(Months::new(1)),
            CalendarView::Month => date.checked_add_months(Months::new(1)),
            CalendarView::Week => date.checked_add_signed(Duration::days(7 * direction)),
            CalendarView::Day => date.checked_add_signed(Duration::days(direction)),
        }
        .unwrap_or(date)
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.current_date = today;
    }

    pub fn set_view(&mut self, view: CalendarView) {
        self.view = view;
    }

    pub fn open_jump_picker(&mut self) {
        self.modal = ModalState::JumpToDate;
    }

    /// Applies a date picked in the jump picker and closes it.
    pub fn jump_to(&mut self, date: NaiveDate) {
        self.current_date = date;
        self.modal = ModalState::Closed;
    }

    pub fn open_modal_for_slot(&mut self, slot: TimeSlot) {
        self.modal = ModalState::Create { slot };
    }

    pub fn open_modal_for_booking(&mut self, booking_id: impl Into<String>) {
        self.modal = ModalState::Edit {
            booking_id: booking_id.into(),
        };
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    pub fn is_booking_modal_open(&self) -> bool {
        matches!(self.modal, ModalState::Create { .. } | ModalState::Edit { .. })
    }

    pub fn is_jump_picker_open(&self) -> bool {
        self.modal == ModalState::JumpToDate
    }

    pub fn selected_booking_id(&self) -> Option<&str> {
        match &self.modal {
            ModalState::Edit { booking_id } => Some(booking_id),
            _ => None,
        }
    }

    pub fn new_booking_slot(&self) -> Option<TimeSlot> {
        match self.modal {
            ModalState::Create { slot } => Some(slot),
            _ => None,
        }
    }

    pub fn title(&self) -> String {
        format_month_title(self.current_date)
    }
}
