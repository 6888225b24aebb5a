use shared_types::{AvailabilityRequest, AvailabilityResponse, BookingEvent, BookingStatus};

use crate::error::Result;
use crate::format::parse_datetime_local;
use crate::layout::intervals_overlap;

/// Checks a requested range against known bookings.
///
/// Cancelled bookings and `exclude_booking_id` (the booking being edited)
/// never conflict.
pub fn check_availability(
    bookings: &[BookingEvent],
    request: &AvailabilityRequest,
) -> Result<AvailabilityResponse> {
    let start = parse_datetime_local(&request.start_time)?;
    let end = parse_datetime_local(&request.end_time)?;

    let conflicting_bookings: Vec<BookingEvent> = bookings
        .iter()
        .filter(|b| b.status != BookingStatus::Cancelled)
        .filter(|b| request.exclude_booking_id.as_deref() != Some(b.id.as_str()))
        .filter(|b| intervals_overlap(start, end, b.start_time, b.end_time))
        .cloned()
        .collect();

    Ok(AvailabilityResponse {
        is_available: conflicting_bookings.is_empty(),
        conflicting_bookings,
    })
}
