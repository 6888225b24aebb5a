use thiserror::Error;

use crate::form::FormErrors;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalendarError {
    #[error("booking form is invalid: {0}")]
    Validation(FormErrors),

    #[error("slot interval must be a positive divisor of 60 minutes, got {0}")]
    InvalidSlotInterval(u32),

    #[error("invalid date/time `{0}`")]
    InvalidDateTime(String),

    #[error("invalid calendar configuration: {0}")]
    InvalidConfig(String),

    #[error("a {0} request is already in flight")]
    RequestInFlight(&'static str),

    #[error("{0}")]
    Callback(String),
}

impl CalendarError {
    /// Wraps a failure reported by a host callback.
    pub fn callback(message: impl Into<String>) -> Self {
        CalendarError::Callback(message.into())
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;
