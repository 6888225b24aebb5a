use calendar_core::badge::BadgeSize;
use calendar_core::format::WEEKDAY_NAMES;
use calendar_core::grid::{month_cells, month_day_slot};
use calendar_core::{CalendarConfig, TimeSlot};
use chrono::{Datelike, NaiveDate, Weekday};
use leptos::prelude::*;
use shared_types::{BookingEvent, BookingStatus};

use super::booking_calendar::today;
use crate::components::BookingStatusBadge;

/// Weekday labels rotated to start on `week_start`.
pub(crate) fn weekday_header(week_start: Weekday) -> Vec<&'static str> {
    let offset = week_start.num_days_from_sunday() as usize;
    (0..7).map(|i| WEEKDAY_NAMES[(i + offset) % 7]).collect()
}

#[derive(Clone)]
struct CellView {
    date: NaiveDate,
    in_month: bool,
    is_today: bool,
    events: Vec<(String, String, BookingStatus)>,
    overflow: usize,
}

#[component]
pub fn MonthView(
    #[prop(into)] current_date: Signal<NaiveDate>,
    #[prop(into)] bookings: Signal<Vec<BookingEvent>>,
    config: StoredValue<CalendarConfig>,
    on_slot_click: Callback<TimeSlot>,
    on_booking_click: Callback<String>,
) -> impl IntoView {
    let week_start = config.with_value(|c| c.week_starts_on);

    let weeks = move || -> Vec<Vec<CellView>> {
        let current = current_date.get();
        let cells: Vec<CellView> = bookings.with(|list| {
            config.with_value(|cfg| {
                month_cells(list, current, today(), cfg)
                    .into_iter()
                    .map(|cell| CellView {
                        date: cell.date,
                        in_month: cell.in_month,
                        is_today: cell.is_today,
                        events: cell
                            .visible
                            .iter()
                            .map(|b| (b.id.clone(), b.title.clone(), b.status))
                            .collect(),
                        overflow: cell.overflow,
                    })
                    .collect()
            })
        });
        cells.chunks(7).map(<[CellView]>::to_vec).collect()
    };

    let render_cell = move |cell: CellView| {
        let date = cell.date;
        view! {
            <div
                class="bc-month-day"
                class:bc-other-month=!cell.in_month
                class:bc-today=cell.is_today
                on:click=move |_| on_slot_click.run(config.with_value(|cfg| month_day_slot(date, cfg)))
            >
                <div class="bc-month-day-number">{date.day()}</div>
                <div class="bc-month-day-events">
                    {cell
                        .events
                        .into_iter()
                        .map(|(id, title, status)| view! {
                            <div
                                class="bc-month-event"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    on_booking_click.run(id.clone());
                                }
                            >
                                <BookingStatusBadge status=status size=BadgeSize::Sm />
                                <span class="bc-month-event-title">{title}</span>
                            </div>
                        })
                        .collect_view()}
                    {(cell.overflow > 0).then(|| view! {
                        <div class="bc-month-event-more">{format!("+{} more", cell.overflow)}</div>
                    })}
                </div>
            </div>
        }
    };

    view! {
        <div class="bc-month-view">
            <div class="bc-month-header">
                {weekday_header(week_start)
                    .into_iter()
                    .map(|name| view! { <div class="bc-month-header-cell">{name}</div> })
                    .collect_view()}
            </div>
            <div class="bc-month-grid">
                {move || {
                    weeks()
                        .into_iter()
                        .map(|week| view! {
                            <div class="bc-month-week">
                                {week.into_iter().map(render_cell).collect_view()}
                            </div>
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_rotates_with_week_start() {
        assert_eq!(weekday_header(Weekday::Sun)[0], "Sun");
        assert_eq!(
            weekday_header(Weekday::Mon),
            ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
    }
}
