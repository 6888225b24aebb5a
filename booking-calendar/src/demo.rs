//! In-memory booking store backing the demo page.

use calendar_core::format::parse_datetime_local;
use calendar_core::{check_availability, CalendarError};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use shared_types::{
    AvailabilityRequest, AvailabilityResponse, BookingEvent, BookingStatus, CreateBookingDto,
    DeliveryStatus, RescheduleBookingDto, UpdateBookingDto,
};

fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// Seed data, laid out around `today` so the default week view is never empty.
pub fn mock_bookings(today: NaiveDate, now: NaiveDateTime) -> Vec<BookingEvent> {
    let tomorrow = today + Duration::days(1);
    vec![
        BookingEvent {
            id: "1".to_string(),
            title: "Project Kickoff".to_string(),
            description: Some("Initial meeting to discuss project scope".to_string()),
            start_time: at(today, 10, 0),
            end_time: at(today, 11, 0),
            duration_minutes: 60,
            status: BookingStatus::Confirmed,
            meeting_link: None,
            location: Some("Office".to_string()),
            client_name: "John Doe".to_string(),
            client_email: "john@example.com".to_string(),
            client_phone: Some("+1234567890".to_string()),
            meeting_reason: Some("Project planning".to_string()),
            cancellation_reason: None,
            reminder_sent_at: None,
            delivery_status: None,
            last_attempt_at: None,
            retry_count: 0,
            created_at: now,
            updated_at: now,
            client_id: None,
        },
        BookingEvent {
            id: "2".to_string(),
            title: "Design Review".to_string(),
            description: None,
            start_time: at(today, 10, 30),
            end_time: at(today, 12, 0),
            duration_minutes: 90,
            status: BookingStatus::Pending,
            meeting_link: None,
            location: None,
            client_name: "Jane Smith".to_string(),
            client_email: "jane@example.com".to_string(),
            client_phone: None,
            meeting_reason: Some("UI/UX review".to_string()),
            cancellation_reason: None,
            reminder_sent_at: None,
            delivery_status: None,
            last_attempt_at: None,
            retry_count: 0,
            created_at: now,
            updated_at: now,
            client_id: None,
        },
        BookingEvent {
            id: "3".to_string(),
            title: "Quarterly Planning".to_string(),
            description: None,
            start_time: at(tomorrow, 14, 0),
            end_time: at(tomorrow, 15, 30),
            duration_minutes: 90,
            status: BookingStatus::Completed,
            meeting_link: Some("https://meet.example.com/qp".to_string()),
            location: None,
            client_name: "Sam Lee".to_string(),
            client_email: "sam@example.com".to_string(),
            client_phone: None,
            meeting_reason: None,
            cancellation_reason: None,
            reminder_sent_at: None,
            delivery_status: None,
            last_attempt_at: None,
            retry_count: 0,
            created_at: now,
            updated_at: now,
            client_id: None,
        },
    ]
}

fn not_found(id: &str) -> CalendarError {
    CalendarError::callback(format!("booking {id} not found"))
}

/// Next id after the largest numeric id in use.
fn next_id(bookings: &[BookingEvent]) -> String {
    let max = bookings
        .iter()
        .filter_map(|b| b.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

pub fn create_booking(
    bookings: &mut Vec<BookingEvent>,
    dto: CreateBookingDto,
    now: NaiveDateTime,
) -> Result<BookingEvent, CalendarError> {
    let start_time = parse_datetime_local(&dto.start_time)?;
    let end_time = parse_datetime_local(&dto.end_time)?;

    let booking = BookingEvent {
        id: next_id(bookings),
        title: dto.title,
        description: dto.description,
        start_time,
        end_time,
        duration_minutes: (end_time - start_time).num_minutes(),
        status: BookingStatus::Pending,
        meeting_link: dto.meeting_link,
        location: dto.location,
        client_name: dto.client_name.unwrap_or_default(),
        client_email: dto.client_email.unwrap_or_default(),
        client_phone: dto.client_phone,
        meeting_reason: dto.meeting_reason,
        cancellation_reason: None,
        reminder_sent_at: None,
        delivery_status: None,
        last_attempt_at: None,
        retry_count: 0,
        created_at: now,
        updated_at: now,
        client_id: dto.client_id,
    };
    bookings.push(booking.clone());
    Ok(booking)
}

/// Applies an edit from the booking form.
///
/// Required fields and status are replaced when set. The free-text fields the
/// form edits (description, location, phone, reason) are taken as submitted,
/// so an emptied field clears the stored value. Meeting link and cancellation
/// reason are not on the form and only change when set.
pub fn update_booking(
    bookings: &mut [BookingEvent],
    id: &str,
    dto: UpdateBookingDto,
    now: NaiveDateTime,
) -> Result<BookingEvent, CalendarError> {
    let start_time = dto.start_time.as_deref().map(parse_datetime_local).transpose()?;
    let end_time = dto.end_time.as_deref().map(parse_datetime_local).transpose()?;

    let booking = bookings
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or_else(|| not_found(id))?;

    if let Some(title) = dto.title {
        booking.title = title;
    }
    if let Some(start) = start_time {
        booking.start_time = start;
    }
    if let Some(end) = end_time {
        booking.end_time = end;
    }
    if let Some(status) = dto.status {
        booking.status = status;
    }
    if let Some(name) = dto.client_name {
        booking.client_name = name;
    }
    if let Some(email) = dto.client_email {
        booking.client_email = email;
    }
    booking.description = dto.description;
    booking.location = dto.location;
    booking.client_phone = dto.client_phone;
    booking.meeting_reason = dto.meeting_reason;
    if dto.meeting_link.is_some() {
        booking.meeting_link = dto.meeting_link;
    }
    if dto.cancellation_reason.is_some() {
        booking.cancellation_reason = dto.cancellation_reason;
    }
    booking.duration_minutes = (booking.end_time - booking.start_time).num_minutes();
    booking.updated_at = now;

    Ok(booking.clone())
}

pub fn reschedule_booking(
    bookings: &mut [BookingEvent],
    id: &str,
    dto: RescheduleBookingDto,
    now: NaiveDateTime,
) -> Result<BookingEvent, CalendarError> {
    let start_time = parse_datetime_local(&dto.new_start_time)?;
    let end_time = parse_datetime_local(&dto.new_end_time)?;

    let booking = bookings
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or_else(|| not_found(id))?;
    booking.start_time = start_time;
    booking.end_time = end_time;
    booking.duration_minutes = (end_time - start_time).num_minutes();
    booking.updated_at = now;

    Ok(booking.clone())
}

pub fn delete_booking(bookings: &mut Vec<BookingEvent>, id: &str) -> Result<(), CalendarError> {
    let before = bookings.len();
    bookings.retain(|b| b.id != id);
    if bookings.len() == before {
        return Err(not_found(id));
    }
    Ok(())
}

/// Records a delivered confirmation the way a mailer would.
pub fn mark_confirmation_sent(
    bookings: &mut [BookingEvent],
    id: &str,
    now: NaiveDateTime,
) -> Result<(), CalendarError> {
    let booking = bookings
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or_else(|| not_found(id))?;
    booking.delivery_status = Some(DeliveryStatus::Sent);
    booking.reminder_sent_at = Some(now);
    booking.last_attempt_at = Some(now);
    Ok(())
}

pub fn availability(
    bookings: &[BookingEvent],
    request: &AvailabilityRequest,
) -> Result<AvailabilityResponse, CalendarError> {
    check_availability(bookings, request)
}
