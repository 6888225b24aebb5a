use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    NoShow,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Cancelled,
        BookingStatus::Completed,
        BookingStatus::NoShow,
    ];

    /// Wire name, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Completed => "Completed",
            BookingStatus::NoShow => "NoShow",
        }
    }

    /// Human label for selectors.
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::NoShow => "No Show",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeliveryStatus {
    #[default]
    Pending,
    Sent,
    Failed,
    Retrying,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::Sent => "Sent",
            DeliveryStatus::Failed => "Failed",
            DeliveryStatus::Retrying => "Retrying",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string names no known enum variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown variant `{}`", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingEvent {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_minutes: i64,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub client_name: String,
    pub client_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_sent_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_status: Option<DeliveryStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_attempt_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub retry_count: u32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

/// Payload handed to the host when a booking is created from the modal.
/// Timestamps use the `datetime-local` form `YYYY-MM-DDTHH:MM`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleBookingDto {
    pub new_start_time: String,
    pub new_end_time: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_booking_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub is_available: bool,
    pub conflicting_bookings: Vec<BookingEvent>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Month,
    #[default]
    Week,
    Day,
}

impl CalendarView {
    pub const ALL: [CalendarView; 3] = [CalendarView::Month, CalendarView::Week, CalendarView::Day];

    pub fn label(&self) -> &'static str {
        match self {
            CalendarView::Month => "Month",
            CalendarView::Week => "Week",
            CalendarView::Day => "Day",
        }
    }
}

impl FromStr for CalendarView {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "month" => Ok(CalendarView::Month),
            "week" => Ok(CalendarView::Week),
            "day" => Ok(CalendarView::Day),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 10)
            .and_then(|d| d.and_hms_opt(h, m, 0))
            .expect("valid timestamp")
    }

    fn sample() -> BookingEvent {
        BookingEvent {
            id: "1".to_string(),
            title: "Project Kickoff".to_string(),
            description: None,
            start_time: at(10, 0),
            end_time: at(11, 0),
            duration_minutes: 60,
            status: BookingStatus::NoShow,
            meeting_link: None,
            location: Some("Office".to_string()),
            client_name: "John Doe".to_string(),
            client_email: "john@example.com".to_string(),
            client_phone: None,
            meeting_reason: None,
            cancellation_reason: None,
            reminder_sent_at: None,
            delivery_status: Some(DeliveryStatus::Retrying),
            last_attempt_at: None,
            retry_count: 2,
            created_at: at(8, 0),
            updated_at: at(8, 0),
            client_id: None,
        }
    }

    #[test]
    fn booking_serializes_with_camel_case_fields() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["startTime"], "2025-12-10T10:00:00");
        assert_eq!(value["clientEmail"], "john@example.com");
        assert_eq!(value["status"], "NoShow");
        assert_eq!(value["deliveryStatus"], "Retrying");
        assert_eq!(value["retryCount"], 2);
        assert!(value.get("description").is_none());
    }

    #[test]
    fn booking_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "2",
            "title": "Design Review",
            "startTime": "2025-12-11T14:00:00",
            "endTime": "2025-12-11T15:30:00",
            "durationMinutes": 90,
            "status": "Pending",
            "clientName": "Jane Smith",
            "clientEmail": "jane@example.com",
            "createdAt": "2025-12-01T00:00:00",
            "updatedAt": "2025-12-01T00:00:00"
        }"#;
        let booking: BookingEvent = serde_json::from_str(json).unwrap();
        assert_eq!(booking.duration_minutes, 90);
        assert_eq!(booking.retry_count, 0);
        assert_eq!(booking.location, None);
    }

    #[test]
    fn status_parses_from_wire_name_and_labels_no_show() {
        assert_eq!("NoShow".parse::<BookingStatus>(), Ok(BookingStatus::NoShow));
        assert!("noshow".parse::<BookingStatus>().is_err());
        assert_eq!(BookingStatus::NoShow.label(), "No Show");
        assert_eq!(BookingStatus::Confirmed.label(), "Confirmed");
    }

    #[test]
    fn calendar_view_is_lowercase_on_the_wire() {
        assert_eq!(serde_json::to_string(&CalendarView::Month).unwrap(), "\"month\"");
        assert_eq!("Day".parse::<CalendarView>(), Ok(CalendarView::Day));
        assert_eq!(CalendarView::default(), CalendarView::Week);
    }

    #[test]
    fn update_dto_omits_unset_fields() {
        let dto = UpdateBookingDto {
            status: Some(BookingStatus::Cancelled),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&dto).unwrap(), r#"{"status":"Cancelled"}"#);
    }
}
