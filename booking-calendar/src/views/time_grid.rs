use calendar_core::badge::BadgeSize;
use calendar_core::format::{format_hour, format_time, format_time_range};
use calendar_core::grid::day_slots;
use calendar_core::{layout_day, now_position, reschedule_from_drag, CalendarConfig, DragState, EventPosition, TimeSlot};
use chrono::{Local, NaiveDate, Timelike};
use leptos::prelude::*;
use shared_types::{BookingEvent, RescheduleBookingDto};

use super::booking_calendar::today;
use crate::components::BookingStatusBadge;

const HOURS: std::ops::Range<u32> = 0..24;

#[component]
pub fn TimeGutter(prefix: &'static str) -> impl IntoView {
    view! {
        <div class=format!("{prefix}-time-column")>
            {HOURS
                .map(|hour| view! { <div class=format!("{prefix}-time-slot")>{format_hour(hour)}</div> })
                .collect_view()}
        </div>
    }
}

/// One day of the week/day grid: clickable hour cells, the bookings starting
/// that day laid out in lanes, and the "now" line when the day is today.
#[component]
pub fn DayColumn(
    day: NaiveDate,
    #[prop(into)] bookings: Signal<Vec<BookingEvent>>,
    config: StoredValue<CalendarConfig>,
    on_slot_click: Callback<TimeSlot>,
    on_booking_click: Callback<String>,
    on_reschedule: Option<Callback<(String, RescheduleBookingDto)>>,
    prefix: &'static str,
    #[prop(optional)] detailed: bool,
) -> impl IntoView {
    let column_ref = NodeRef::<leptos::html::Div>::new();
    let drag = RwSignal::new(DragState::default());
    // The click that follows a successful drop must not open the editor
    let suppress_click = RwSignal::new(false);
    let slots = config.with_value(|cfg| day_slots(day, cfg));
    let slot_height = 100.0 / slots.len().max(1) as f64;
    let badge_size = if detailed { BadgeSize::Sm } else { BadgeSize::Xs };

    let finish_drag = move || {
        let Some((event_id, (_, offset_y))) = drag.try_update(|d| d.end()).flatten() else {
            return;
        };
        let (Some(on_reschedule), Some(column)) = (on_reschedule, column_ref.get_untracked()) else {
            return;
        };
        let column_height = column.get_bounding_client_rect().height();
        let snap = config.with_value(|c| c.snap_minutes);
        let dto = bookings.with_untracked(|list| {
            list.iter()
                .find(|b| b.id == event_id)
                .and_then(|b| reschedule_from_drag(b, offset_y, column_height, snap))
        });
        if let Some(dto) = dto {
            suppress_click.set(true);
            on_reschedule.run((event_id, dto));
        }
    };

    let placed = move || -> Vec<(BookingEvent, EventPosition)> {
        bookings.with(|list| {
            config.with_value(|cfg| {
                layout_day(list, day, cfg)
                    .into_iter()
                    .map(|p| (p.event.clone(), p.position))
                    .collect()
            })
        })
    };

    let render_event = move |(booking, position): (BookingEvent, EventPosition)| {
        let id = StoredValue::new(booking.id.clone());
        let is_dragged = move || drag.with(|d| id.with_value(|id| d.dragged_event_id() == Some(id.as_str())));
        let style = move || {
            let mut style = position.to_style();
            if is_dragged() {
                style.push_str(&format!(" transform: translateY({}px);", drag.with(|d| d.offset().1)));
            }
            style
        };
        let time = if detailed {
            format_time_range(booking.start_time, booking.end_time)
        } else {
            format_time(booking.start_time.time())
        };

        view! {
            <div
                class=format!("{prefix}-event")
                class:bc-dragging=is_dragged
                style=style
                on:mousedown=move |ev: web_sys::MouseEvent| {
                    if on_reschedule.is_some() && ev.button() == 0 {
                        ev.prevent_default();
                        let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
                        drag.update(|d| d.start(id.get_value(), x, y));
                    }
                }
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.stop_propagation();
                    if suppress_click.get_untracked() {
                        suppress_click.set(false);
                        return;
                    }
                    on_booking_click.run(id.get_value());
                }
            >
                <BookingStatusBadge status=booking.status size=badge_size />
                <div class=format!("{prefix}-event-title")>{booking.title.clone()}</div>
                {detailed.then(|| view! {
                    <div class=format!("{prefix}-event-client")>{booking.client_name.clone()}</div>
                })}
                <div class=format!("{prefix}-event-time")>{time}</div>
            </div>
        }
    };

    view! {
        <div
            node_ref=column_ref
            class=format!("{prefix}-column")
            class:bc-today=move || day == today()
            on:mousemove=move |ev: web_sys::MouseEvent| {
                if drag.with_untracked(DragState::is_dragging) {
                    let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
                    drag.update(|d| d.move_to(x, y));
                }
            }
            on:mouseup=move |_| finish_drag()
            on:mouseleave=move |_| {
                if drag.with_untracked(DragState::is_dragging) {
                    drag.update(|d| {
                        d.end();
                    });
                }
            }
        >
            {slots
                .into_iter()
                .map(|slot| view! {
                    <div
                        class=format!("{prefix}-grid-slot")
                        class:bc-hour-start=slot.start.minute() == 0
                        style=format!("height: {slot_height}%;")
                        on:click=move |_| on_slot_click.run(slot)
                    ></div>
                })
                .collect_view()}
            {move || (day == today()).then(|| {
                let top = now_position(Local::now().time());
                view! {
                    <div class=format!("{prefix}-now-line") style=format!("top: {top}%;")>
                        <div class=format!("{prefix}-now-dot")></div>
                    </div>
                }
            })}
            {move || placed().into_iter().map(render_event).collect_view()}
        </div>
    }
}
