use calendar_core::{CalendarConfig, ModalState, Submission, SubmissionKind, TimeSlot, ViewState};
use chrono::{Local, NaiveDate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::{BookingEvent, CalendarView, RescheduleBookingDto};
use thaw::*;

use super::booking_modal::BookingModalProps;
use super::{BookingModal, DayView, JumpToDateModal, MonthView, WeekView};
use crate::callbacks::BookingCallbacks;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[component]
pub fn BookingCalendar(
    #[prop(into)] bookings: Signal<Vec<BookingEvent>>,
    #[prop(optional)] callbacks: BookingCallbacks,
    #[prop(optional)] config: CalendarConfig,
    #[prop(optional)] initial_view: Option<CalendarView>,
    #[prop(optional)] initial_date: Option<NaiveDate>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let config = config.or_default();
    let state = RwSignal::new(ViewState::new(
        initial_date.unwrap_or_else(today),
        initial_view.unwrap_or(config.initial_view),
    ));
    let config = StoredValue::new(config);
    let callbacks = StoredValue::new(callbacks);

    let current_date = Signal::derive(move || state.with(|s| s.current_date));
    let active_view = Memo::new(move |_| state.with(|s| s.view));
    let modal = Memo::new(move |_| state.with(|s| s.modal.clone()));

    let on_slot_click = Callback::new(move |slot: TimeSlot| {
        state.update(|s| s.open_modal_for_slot(slot));
    });
    let on_booking_click = Callback::new(move |booking_id: String| {
        state.update(|s| s.open_modal_for_booking(booking_id));
    });
    let close_modal = move || state.update(|s| s.close_modal());

    let reschedule_submission = RwSignal::new(Submission::default());
    let can_reschedule = callbacks.with_value(|c| c.can_reschedule());
    let on_reschedule = can_reschedule.then(|| {
        Callback::new(move |(booking_id, dto): (String, RescheduleBookingDto)| {
            let Some(reschedule) = callbacks.with_value(|c| c.on_reschedule.clone()) else {
                return;
            };
            if let Err(e) = reschedule_submission
                .try_update(|s| s.begin(SubmissionKind::Reschedule))
                .unwrap_or(Ok(()))
            {
                leptos::logging::warn!("Ignoring drop of booking {}: {}", booking_id, e);
                return;
            }
            spawn_local(async move {
                let outcome = reschedule(booking_id.clone(), dto).await.map(|_| ());
                if let Err(e) = &outcome {
                    leptos::logging::error!("Failed to reschedule booking {}: {}", booking_id, e);
                }
                reschedule_submission.try_update(|s| s.finish(outcome));
            });
        })
    });

    let view_button = move |kind: CalendarView| {
        view! {
            <Button
                appearance=Signal::derive(move || {
                    if active_view.get() == kind {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Subtle
                    }
                })
                on_click=move |_| state.update(|s| s.set_view(kind))
            >
                {kind.label()}
            </Button>
        }
    };

    view! {
        <div class=format!("booking-calendar {}", class)>
            <div class="booking-calendar-header">
                <div class="booking-calendar-nav">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| state.update(|s| s.navigate_previous())
                    >
                        "←"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| state.update(|s| s.go_to_today(today()))
                    >
                        "Today"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| state.update(|s| s.navigate_next())
                    >
                        "→"
                    </Button>
                    <h2
                        class="current-date"
                        title="Jump to date"
                        on:click=move |_| state.update(|s| s.open_jump_picker())
                    >
                        {move || state.with(|s| s.title())}
                    </h2>
                </div>
                <div class="booking-calendar-view-switcher">
                    {CalendarView::ALL.into_iter().map(view_button).collect_view()}
                </div>
            </div>

            <div class="booking-calendar-body">
                {move || match active_view.get() {
                    CalendarView::Month => view! {
                        <MonthView
                            current_date=current_date
                            bookings=bookings
                            config=config
                            on_slot_click=on_slot_click
                            on_booking_click=on_booking_click
                        />
                    }.into_any(),
                    CalendarView::Week => view! {
                        <WeekView
                            current_date=current_date
                            bookings=bookings
                            config=config
                            on_slot_click=on_slot_click
                            on_booking_click=on_booking_click
                            on_reschedule=on_reschedule
                        />
                    }.into_any(),
                    CalendarView::Day => view! {
                        <DayView
                            current_date=current_date
                            bookings=bookings
                            config=config
                            on_slot_click=on_slot_click
                            on_booking_click=on_booking_click
                            on_reschedule=on_reschedule
                        />
                    }.into_any(),
                }}
            </div>

            {move || match modal.get() {
                ModalState::Closed => None,
                ModalState::Create { slot } => Some(
                    BookingModal(
                        BookingModalProps::builder()
                            .booking(None)
                            .slot(Some(slot))
                            .callbacks(callbacks)
                            .on_close(close_modal)
                            .build(),
                    )
                    .into_any(),
                ),
                ModalState::Edit { booking_id } => {
                    let booking = bookings
                        .with_untracked(|list| list.iter().find(|b| b.id == booking_id).cloned());
                    if booking.is_none() {
                        leptos::logging::warn!("Booking {} is no longer available", booking_id);
                    }
                    booking.map(|booking| {
                        BookingModal(
                            BookingModalProps::builder()
                                .booking(Some(booking))
                                .slot(None)
                                .callbacks(callbacks)
                                .on_close(close_modal)
                                .build(),
                        )
                        .into_any()
                    })
                }
                ModalState::JumpToDate => Some(view! {
                    <JumpToDateModal
                        current_date=state.with_untracked(|s| s.current_date)
                        config=config
                        on_close=close_modal
                        on_select=move |date: NaiveDate| state.update(|s| s.jump_to(date))
                    />
                }.into_any()),
            }}
        </div>
    }
}
