pub mod booking_calendar;
pub mod booking_modal;
pub mod day_view;
pub mod jump_to_date_modal;
pub mod month_view;
pub mod time_grid;
pub mod week_view;

pub use booking_calendar::BookingCalendar;
pub use booking_modal::BookingModal;
pub use day_view::DayView;
pub use jump_to_date_modal::JumpToDateModal;
pub use month_view::MonthView;
pub use week_view::WeekView;
