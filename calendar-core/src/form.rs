use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use shared_types::{BookingEvent, BookingStatus, CreateBookingDto, UpdateBookingDto};

use crate::format::{parse_datetime_local, to_datetime_local};
use crate::grid::TimeSlot;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Title,
    ClientName,
    ClientEmail,
    StartTime,
    EndTime,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::ClientName => "clientName",
            FormField::ClientEmail => "clientEmail",
            FormField::StartTime => "startTime",
            FormField::EndTime => "endTime",
        }
    }
}

/// Per-field validation messages, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Records a message for `field`, replacing an earlier one.
    pub fn set(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field.as_str(), message))
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&joined)
    }
}

/// Editable contents of the booking modal, kept as raw input strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingForm {
    pub title: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub meeting_reason: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub description: String,
    pub status: BookingStatus,
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn checked_time(
    field: FormField,
    value: &str,
    missing: &str,
    errors: &mut FormErrors,
) -> Option<NaiveDateTime> {
    if value.is_empty() {
        errors.set(field, missing);
        return None;
    }
    match parse_datetime_local(value) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.set(field, "Invalid date/time");
            None
        }
    }
}

impl BookingForm {
    pub fn for_booking(booking: &BookingEvent) -> Self {
        Self {
            title: booking.title.clone(),
            client_name: booking.client_name.clone(),
            client_email: booking.client_email.clone(),
            client_phone: booking.client_phone.clone().unwrap_or_default(),
            meeting_reason: booking.meeting_reason.clone().unwrap_or_default(),
            start_time: to_datetime_local(booking.start_time),
            end_time: to_datetime_local(booking.end_time),
            location: booking.location.clone().unwrap_or_default(),
            description: booking.description.clone().unwrap_or_default(),
            status: booking.status,
        }
    }

    pub fn for_slot(slot: &TimeSlot) -> Self {
        Self {
            start_time: to_datetime_local(slot.start),
            end_time: to_datetime_local(slot.end),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();

        if self.title.trim().is_empty() {
            errors.set(FormField::Title, "Title is required");
        }
        if self.client_name.trim().is_empty() {
            errors.set(FormField::ClientName, "Client name is required");
        }
        if self.client_email.trim().is_empty() {
            errors.set(FormField::ClientEmail, "Client email is required");
        }
        if !self.client_email.is_empty() && !EMAIL_RE.is_match(&self.client_email) {
            errors.set(FormField::ClientEmail, "Invalid email format");
        }

        let start = checked_time(
            FormField::StartTime,
            &self.start_time,
            "Start time is required",
            &mut errors,
        );
        let end = checked_time(FormField::EndTime, &self.end_time, "End time is required", &mut errors);
        if let (Some(start), Some(end)) = (start, end) {
            if start >= end {
                errors.set(FormField::EndTime, "End time must be after start time");
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn to_create_dto(&self) -> CreateBookingDto {
        CreateBookingDto {
            title: self.title.clone(),
            description: non_empty(&self.description),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            location: non_empty(&self.location),
            meeting_link: None,
            client_id: None,
            client_name: Some(self.client_name.clone()),
            client_email: Some(self.client_email.clone()),
            client_phone: non_empty(&self.client_phone),
            meeting_reason: non_empty(&self.meeting_reason),
        }
    }

    pub fn to_update_dto(&self) -> UpdateBookingDto {
        UpdateBookingDto {
            title: Some(self.title.clone()),
            description: non_empty(&self.description),
            start_time: Some(self.start_time.clone()),
            end_time: Some(self.end_time.clone()),
            location: non_empty(&self.location),
            meeting_link: None,
            status: Some(self.status),
            client_name: Some(self.client_name.clone()),
            client_email: Some(self.client_email.clone()),
            client_phone: non_empty(&self.client_phone),
            meeting_reason: non_empty(&self.meeting_reason),
            cancellation_reason: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::hour_slot;
    use chrono::NaiveDate;

    fn filled() -> BookingForm {
        BookingForm {
            title: "Consultation".to_string(),
            client_name: "Jane Smith".to_string(),
            client_email: "jane@example.com".to_string(),
            start_time: "2026-10-16T09:00".to_string(),
            end_time: "2026-10-16T10:00".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn blank_form_reports_every_required_field() {
        let errors = BookingForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(FormField::Title), Some("Title is required"));
        assert_eq!(errors.get(FormField::ClientName), Some("Client name is required"));
        assert_eq!(errors.get(FormField::ClientEmail), Some("Client email is required"));
        assert_eq!(errors.get(FormField::StartTime), Some("Start time is required"));
        assert_eq!(errors.get(FormField::EndTime), Some("End time is required"));
    }

    #[test]
    fn whitespace_title_is_missing() {
        let form = BookingForm {
            title: "   ".to_string(),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::Title), Some("Title is required"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["jane", "jane@example", "ja ne@example.com", "@example.com"] {
            let form = BookingForm {
                client_email: email.to_string(),
                ..filled()
            };
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.get(FormField::ClientEmail), Some("Invalid email format"), "{email}");
        }
    }

    #[test]
    fn end_must_follow_start() {
        let form = BookingForm {
            end_time: "2026-10-16T09:00".to_string(),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::EndTime), Some("End time must be after start time"));
    }

    #[test]
    fn slot_prefills_times_only() {
        let slot = hour_slot(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(), 14, 60);
        let form = BookingForm::for_slot(&slot);
        assert_eq!(form.start_time, "2026-10-16T14:00");
        assert_eq!(form.end_time, "2026-10-16T15:00");
        assert!(form.title.is_empty());
        assert_eq!(form.status, BookingStatus::Pending);
    }

    #[test]
    fn empty_optionals_become_none() {
        let form = BookingForm {
            location: "Office".to_string(),
            status: BookingStatus::Confirmed,
            ..filled()
        };
        let create = form.to_create_dto();
        assert_eq!(create.location.as_deref(), Some("Office"));
        assert_eq!(create.client_phone, None);
        assert_eq!(create.description, None);

        let update = form.to_update_dto();
        assert_eq!(update.status, Some(BookingStatus::Confirmed));
        assert_eq!(update.meeting_reason, None);
        assert_eq!(update.start_time.as_deref(), Some("2026-10-16T09:00"));
    }

    #[test]
    fn errors_display_lists_fields() {
        let mut errors = FormErrors::default();
        errors.set(FormField::Title, "Title is required");
        assert_eq!(errors.to_string(), "title: Title is required");
    }
}
