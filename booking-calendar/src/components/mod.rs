pub mod error;
pub mod status_badge;

pub use error::ErrorView;
pub use status_badge::{BookingStatusBadge, DeliveryStatusBadge};
