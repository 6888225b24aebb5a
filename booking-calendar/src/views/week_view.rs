use calendar_core::format::weekday_short;
use calendar_core::grid::week_days;
use calendar_core::{CalendarConfig, TimeSlot};
use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;
use shared_types::{BookingEvent, RescheduleBookingDto};

use super::booking_calendar::today;
use super::time_grid::{DayColumn, TimeGutter};

#[component]
pub fn WeekView(
    #[prop(into)] current_date: Signal<NaiveDate>,
    #[prop(into)] bookings: Signal<Vec<BookingEvent>>,
    config: StoredValue<CalendarConfig>,
    on_slot_click: Callback<TimeSlot>,
    on_booking_click: Callback<String>,
    on_reschedule: Option<Callback<(String, RescheduleBookingDto)>>,
) -> impl IntoView {
    let week_start = config.with_value(|c| c.week_starts_on);
    let days = Memo::new(move |_| week_days(current_date.get(), week_start));

    view! {
        <div class="bc-week-view">
            <div class="bc-week-header">
                <div class="bc-week-time-gutter"></div>
                <For each=move || days.get() key=|day| *day let:day>
                    <div class="bc-week-day-header" class:bc-today=move || day == today()>
                        <div class="bc-week-day-name">{weekday_short(day)}</div>
                        <div class="bc-week-day-date">{day.day()}</div>
                    </div>
                </For>
            </div>
            <div class="bc-week-body">
                <TimeGutter prefix="bc-week" />
                <div class="bc-week-grid-container">
                    <For each=move || days.get() key=|day| *day let:day>
                        <DayColumn
                            day=day
                            bookings=bookings
                            config=config
                            on_slot_click=on_slot_click
                            on_booking_click=on_booking_click
                            on_reschedule=on_reschedule
                            prefix="bc-week"
                        />
                    </For>
                </div>
            </div>
        </div>
    }
}
