//! Tracks the single host request a user action may have in flight.
//!
//! Failures are surfaced to the operator and never retried here; retry
//! policy belongs to whoever implements the callbacks.

use std::fmt;

use tracing::{debug, warn};

use crate::error::{CalendarError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Create,
    Update,
    Delete,
    Reschedule,
    SendConfirmation,
}

impl SubmissionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionKind::Create => "create",
            SubmissionKind::Update => "update",
            SubmissionKind::Delete => "delete",
            SubmissionKind::Reschedule => "reschedule",
            SubmissionKind::SendConfirmation => "send confirmation",
        }
    }

    /// Prefix shown to the operator when this request fails.
    pub fn failure_prefix(&self) -> &'static str {
        match self {
            SubmissionKind::Create | SubmissionKind::Update => "Failed to save booking",
            SubmissionKind::Delete => "Failed to delete booking",
            SubmissionKind::Reschedule => "Failed to reschedule booking",
            SubmissionKind::SendConfirmation => "Failed to send confirmation",
        }
    }
}

impl fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Submission {
    #[default]
    Idle,
    InFlight(SubmissionKind),
    Failed {
        kind: SubmissionKind,
        message: String,
    },
}

impl Submission {
    /// Starts a request. Refused while another one is in flight.
    pub fn begin(&mut self, kind: SubmissionKind) -> Result<()> {
        if let Submission::InFlight(current) = self {
            return Err(CalendarError::RequestInFlight(current.as_str()));
        }
        debug!(%kind, "request started");
        *self = Submission::InFlight(kind);
        Ok(())
    }

    /// Settles the in-flight request. A no-op when nothing is in flight.
    pub fn finish(&mut self, outcome: std::result::Result<(), CalendarError>) {
        let Submission::InFlight(kind) = *self else {
            return;
        };
        *self = match outcome {
            Ok(()) => {
                debug!(%kind, "request completed");
                Submission::Idle
            }
            Err(e) => {
                warn!(%kind, error = %e, "request failed");
                Submission::Failed {
                    kind,
                    message: format!("{}: {}", kind.failure_prefix(), e),
                }
            }
        };
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Submission::InFlight(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Submission::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}
