pub mod availability;
pub mod badge;
pub mod config;
pub mod drag;
pub mod error;
pub mod form;
pub mod format;
pub mod grid;
pub mod layout;
pub mod picker;
pub mod state;
pub mod submission;

// Re-export commonly used types
pub use availability::check_availability;
pub use badge::{delivery_badge_class, status_badge_class, BadgeSize};
pub use config::{CalendarConfig, OverlapMode};
pub use drag::{reschedule_from_drag, DragState};
pub use error::{CalendarError, Result};
pub use form::{BookingForm, FormErrors, FormField};
pub use grid::TimeSlot;
pub use layout::{
    compute_position, detect_overlaps, layout_day, now_position, EventPosition, OverlapGroup,
    PositionedEvent, TimedEvent,
};
pub use picker::{JumpPicker, PickerDay};
pub use state::{ModalState, ViewState};
pub use submission::{Submission, SubmissionKind};
