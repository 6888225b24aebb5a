use calendar_core::badge::{delivery_badge_class, status_badge_class, BadgeSize};
use leptos::prelude::*;
use shared_types::{BookingStatus, DeliveryStatus};

#[component]
pub fn BookingStatusBadge(
    #[prop(into)] status: Signal<BookingStatus>,
    #[prop(optional)] size: BadgeSize,
) -> impl IntoView {
    view! {
        <span class=move || status_badge_class(status.get(), size)>
            {move || status.get().label()}
        </span>
    }
}

#[component]
pub fn DeliveryStatusBadge(
    status: DeliveryStatus,
    #[prop(optional)] size: BadgeSize,
) -> impl IntoView {
    view! {
        <span class=delivery_badge_class(status, size)>{status.as_str()}</span>
    }
}
