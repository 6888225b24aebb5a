use calendar_core::format::MONTH_NAMES_SHORT;
use calendar_core::{CalendarConfig, JumpPicker};
use chrono::{Datelike, NaiveDate};
use leptos::ev;
use leptos::prelude::*;

use super::booking_calendar::today;
use super::month_view::weekday_header;

#[component]
pub fn JumpToDateModal(
    current_date: NaiveDate,
    config: StoredValue<CalendarConfig>,
    on_close: impl Fn() + 'static + Copy + Send + Sync,
    on_select: impl Fn(NaiveDate) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let picker = RwSignal::new(config.with_value(|cfg| JumpPicker::open(current_date, cfg)));
    let (week_start, min_year, max_year) =
        config.with_value(|cfg| (cfg.week_starts_on, cfg.min_year, cfg.max_year));
    let year_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = year_ref.get() {
            if let Err(e) = input.focus() {
                leptos::logging::warn!("Could not focus the year input: {:?}", e);
            }
        }
    });

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close();
        }
    });
    on_cleanup(move || escape.remove());

    let select_day = move |date: NaiveDate| {
        on_select(date);
        on_close();
    };

    view! {
        <div class="bc-modal-overlay" on:click=move |_| on_close()>
            <div class="bc-modal bc-jump-modal" on:click=|ev| ev.stop_propagation()>
                <div class="bc-modal-header">
                    <h3>"Jump to Date"</h3>
                    <button class="bc-modal-close" aria-label="Close" on:click=move |_| on_close()>
                        "×"
                    </button>
                </div>
                <div class="bc-modal-body">
                    <div class="bc-jump-year-row">
                        <button
                            class="bc-jump-year-btn"
                            aria-label="Previous year"
                            disabled=move || picker.with(|p| p.year() <= min_year)
                            on:click=move |_| {
                                picker.maybe_update(JumpPicker::decrement_year);
                            }
                        >
                            "−"
                        </button>
                        <input
                            node_ref=year_ref
                            type="number"
                            class="bc-jump-year-input"
                            aria-label="Year"
                            min=min_year.to_string()
                            max=max_year.to_string()
                            prop:value=move || picker.with(|p| p.year().to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                picker.maybe_update(|p| p.set_year_input(&value));
                            }
                        />
                        <button
                            class="bc-jump-year-btn"
                            aria-label="Next year"
                            disabled=move || picker.with(|p| p.year() >= max_year)
                            on:click=move |_| {
                                picker.maybe_update(JumpPicker::increment_year);
                            }
                        >
                            "+"
                        </button>
                    </div>

                    <div class="bc-jump-month-grid">
                        {MONTH_NAMES_SHORT
                            .iter()
                            .enumerate()
                            .map(|(idx, name)| {
                                let month0 = idx as u32;
                                view! {
                                    <button
                                        class="bc-jump-month-btn"
                                        class:bc-jump-selected=move || picker.with(|p| p.month0() == month0)
                                        on:click=move |_| {
                                            picker.maybe_update(|p| p.select_month(month0));
                                        }
                                    >
                                        {*name}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="bc-jump-calendar">
                        <div class="bc-jump-weekdays">
                            {weekday_header(week_start)
                                .into_iter()
                                .map(|name| view! { <div class="bc-jump-weekday">{name}</div> })
                                .collect_view()}
                        </div>
                        <div class="bc-jump-days">
                            {move || {
                                picker
                                    .with(|p| p.days(current_date, today(), week_start))
                                    .into_iter()
                                    .map(|day| view! {
                                        <button
                                            class="bc-jump-day"
                                            class:bc-jump-day-muted=!day.in_month
                                            class:bc-jump-day-selected=day.is_selected
                                            class:bc-jump-day-today=day.is_today
                                            on:click=move |_| select_day(day.date)
                                        >
                                            {day.date.day()}
                                        </button>
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
