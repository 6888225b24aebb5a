use calendar_core::format::format_day_title;
use calendar_core::{CalendarConfig, TimeSlot};
use chrono::NaiveDate;
use leptos::prelude::*;
use shared_types::{BookingEvent, RescheduleBookingDto};

use super::time_grid::{DayColumn, TimeGutter};

#[component]
pub fn DayView(
    #[prop(into)] current_date: Signal<NaiveDate>,
    #[prop(into)] bookings: Signal<Vec<BookingEvent>>,
    config: StoredValue<CalendarConfig>,
    on_slot_click: Callback<TimeSlot>,
    on_booking_click: Callback<String>,
    on_reschedule: Option<Callback<(String, RescheduleBookingDto)>>,
) -> impl IntoView {
    view! {
        <div class="bc-day-view">
            <div class="bc-day-header">
                <div class="bc-day-title">{move || format_day_title(current_date.get())}</div>
            </div>
            <div class="bc-day-body">
                <TimeGutter prefix="bc-day" />
                <div class="bc-day-grid-container">
                    {move || {
                        let day = current_date.get();
                        view! {
                            <DayColumn
                                day=day
                                bookings=bookings
                                config=config
                                on_slot_click=on_slot_click
                                on_booking_click=on_booking_click
                                on_reschedule=on_reschedule
                                prefix="bc-day"
                                detailed=true
                            />
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
