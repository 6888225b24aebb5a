use serde::{Deserialize, Serialize};
use shared_types::{BookingStatus, DeliveryStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeSize {
    Xs,
    Sm,
    #[default]
    Md,
}

impl BadgeSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeSize::Xs => "xs",
            BadgeSize::Sm => "sm",
            BadgeSize::Md => "md",
        }
    }
}

pub fn status_badge_class(status: BookingStatus, size: BadgeSize) -> String {
    format!(
        "bc-status-badge bc-status-{} bc-badge-{}",
        status.as_str().to_lowercase(),
        size.as_str()
    )
}

pub fn delivery_badge_class(status: DeliveryStatus, size: BadgeSize) -> String {
    format!(
        "bc-delivery-badge bc-delivery-{} bc-badge-{}",
        status.as_str().to_lowercase(),
        size.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes() {
        assert_eq!(
            status_badge_class(BookingStatus::NoShow, BadgeSize::Xs),
            "bc-status-badge bc-status-noshow bc-badge-xs"
        );
        assert_eq!(
            status_badge_class(BookingStatus::Confirmed, BadgeSize::default()),
            "bc-status-badge bc-status-confirmed bc-badge-md"
        );
    }

    #[test]
    fn delivery_classes() {
        assert_eq!(
            delivery_badge_class(DeliveryStatus::Retrying, BadgeSize::Sm),
            "bc-delivery-badge bc-delivery-retrying bc-badge-sm"
        );
    }
}
