use calendar_core::badge::BadgeSize;
use calendar_core::{BookingForm, FormErrors, FormField, Submission, SubmissionKind, TimeSlot};
use futures::FutureExt;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::{AvailabilityRequest, BookingEvent, BookingStatus};
use thaw::*;

use crate::callbacks::{BookingCallbacks, CallbackResult};
use crate::components::{BookingStatusBadge, DeliveryStatusBadge, ErrorView};

#[component]
fn FieldError(errors: RwSignal<FormErrors>, field: FormField) -> impl IntoView {
    move || {
        errors.with(|e| {
            e.get(field)
                .map(|message| view! { <span class="bc-error-text">{message.to_string()}</span> })
        })
    }
}

fn discard_value<T: 'static>(request: CallbackResult<T>) -> CallbackResult<()> {
    async move { request.await.map(|_| ()) }.boxed_local()
}

#[component]
pub fn BookingModal(
    booking: Option<BookingEvent>,
    slot: Option<TimeSlot>,
    callbacks: StoredValue<BookingCallbacks>,
    on_close: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let initial = match (&booking, &slot) {
        (Some(booking), _) => BookingForm::for_booking(booking),
        (None, Some(slot)) => BookingForm::for_slot(slot),
        (None, None) => BookingForm::default(),
    };

    // Form state
    let title = RwSignal::new(initial.title);
    let client_name = RwSignal::new(initial.client_name);
    let client_email = RwSignal::new(initial.client_email);
    let client_phone = RwSignal::new(initial.client_phone);
    let meeting_reason = RwSignal::new(initial.meeting_reason);
    let start_time = RwSignal::new(initial.start_time);
    let end_time = RwSignal::new(initial.end_time);
    let location = RwSignal::new(initial.location);
    let description = RwSignal::new(initial.description);
    let status = RwSignal::new(initial.status);

    // UI state
    let errors = RwSignal::new(FormErrors::default());
    let submission = RwSignal::new(Submission::default());
    let availability_note = RwSignal::new(None::<String>);

    let is_edit = booking.is_some();
    let delivery_status = booking.as_ref().and_then(|b| b.delivery_status);
    let booking_id = StoredValue::new(booking.map(|b| b.id));
    let (can_delete, can_confirm, can_check) = callbacks.with_value(|c| {
        (
            is_edit && c.on_delete.is_some(),
            is_edit && c.on_send_confirmation.is_some(),
            c.on_check_availability.is_some(),
        )
    });

    let is_submitting = Memo::new(move |_| submission.with(Submission::is_in_flight));
    let error_message =
        Signal::derive(move || submission.with(|s| s.error_message().map(str::to_string)));

    let snapshot = move || BookingForm {
        title: title.get_untracked(),
        client_name: client_name.get_untracked(),
        client_email: client_email.get_untracked(),
        client_phone: client_phone.get_untracked(),
        meeting_reason: meeting_reason.get_untracked(),
        start_time: start_time.get_untracked(),
        end_time: end_time.get_untracked(),
        location: location.get_untracked(),
        description: description.get_untracked(),
        status: status.get_untracked(),
    };

    let begin = move |kind: SubmissionKind| match submission.try_update(|s| s.begin(kind)) {
        Some(Ok(())) => true,
        Some(Err(e)) => {
            leptos::logging::warn!("{}", e);
            false
        }
        None => false,
    };

    // Settles the request; the modal closes only on success when asked to.
    let run = move |request: Option<CallbackResult<()>>, close_on_success: bool| {
        let Some(request) = request else {
            submission.update(|s| s.finish(Ok(())));
            if close_on_success {
                on_close();
            }
            return;
        };
        spawn_local(async move {
            let outcome = request.await;
            let succeeded = outcome.is_ok();
            submission.try_update(|s| s.finish(outcome));
            // The modal may have been dismissed while the request was pending
            let failure = submission
                .try_with_untracked(|s| s.error_message().map(str::to_string))
                .flatten();
            if let Some(message) = failure {
                leptos::logging::error!("{}", message);
            }
            if succeeded && close_on_success {
                on_close();
            }
        });
    };

    let handle_submit = move || {
        let form = snapshot();
        if let Err(field_errors) = form.validate() {
            errors.set(field_errors);
            return;
        }
        errors.set(FormErrors::default());

        let kind = if is_edit { SubmissionKind::Update } else { SubmissionKind::Create };
        if !begin(kind) {
            return;
        }
        let request = match booking_id.get_value() {
            Some(id) => callbacks
                .with_value(|c| c.on_update.clone())
                .map(|update| discard_value(update(id, form.to_update_dto()))),
            None => callbacks
                .with_value(|c| c.on_create.clone())
                .map(|create| discard_value(create(form.to_create_dto()))),
        };
        run(request, true);
    };

    let handle_delete = move || {
        let Some(id) = booking_id.get_value() else {
            return;
        };
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Are you sure you want to delete this booking?")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed || !begin(SubmissionKind::Delete) {
            return;
        }
        let request = callbacks.with_value(|c| c.on_delete.clone()).map(|delete| delete(id));
        run(request, true);
    };

    let handle_send_confirmation = move || {
        let Some(id) = booking_id.get_value() else {
            return;
        };
        if !begin(SubmissionKind::SendConfirmation) {
            return;
        }
        let request = callbacks
            .with_value(|c| c.on_send_confirmation.clone())
            .map(|send| send(id));
        run(request, false);
    };

    let handle_check_availability = move || {
        let Some(check) = callbacks.with_value(|c| c.on_check_availability.clone()) else {
            return;
        };
        let request = AvailabilityRequest {
            start_time: start_time.get_untracked(),
            end_time: end_time.get_untracked(),
            exclude_booking_id: booking_id.get_value(),
        };
        spawn_local(async move {
            let note = match check(request).await {
                Ok(response) if response.is_available => "This time is available".to_string(),
                Ok(response) => {
                    let titles: Vec<&str> = response
                        .conflicting_bookings
                        .iter()
                        .map(|b| b.title.as_str())
                        .collect();
                    format!("Conflicts with: {}", titles.join(", "))
                }
                Err(e) => {
                    leptos::logging::error!("Failed to check availability: {}", e);
                    format!("Failed to check availability: {}", e)
                }
            };
            availability_note.set(Some(note));
        });
    };

    let datetime_input = move |field: FormField, value: RwSignal<String>| {
        view! {
            <input
                type="datetime-local"
                class="bc-input"
                class:bc-input-error=move || errors.with(|e| e.get(field).is_some())
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    availability_note.set(None);
                }
            />
            <FieldError errors=errors field=field />
        }
    };

    view! {
        <div class="bc-modal-overlay" on:click=move |_| on_close()>
            <div class="bc-modal" on:click=|ev| ev.stop_propagation()>
                <div class="bc-modal-header">
                    <h2>{if is_edit { "Edit Booking" } else { "Create Booking" }}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close()
                        class="bc-modal-close"
                    >
                        "×"
                    </Button>
                </div>

                <form class="bc-modal-body" on:submit=move |ev| {
                    ev.prevent_default();
                    handle_submit();
                }>
                    <ErrorView message=error_message />

                    <div class="bc-form-group">
                        <label>"Title *"</label>
                        <Input value=title class="bc-input" />
                        <FieldError errors=errors field=FormField::Title />
                    </div>

                    <div class="bc-form-row">
                        <div class="bc-form-group">
                            <label>"Client Name *"</label>
                            <Input value=client_name class="bc-input" />
                            <FieldError errors=errors field=FormField::ClientName />
                        </div>
                        <div class="bc-form-group">
                            <label>"Client Email *"</label>
                            <Input value=client_email input_type=InputType::Email class="bc-input" />
                            <FieldError errors=errors field=FormField::ClientEmail />
                        </div>
                    </div>

                    <div class="bc-form-row">
                        <div class="bc-form-group">
                            <label>"Client Phone"</label>
                            <Input value=client_phone input_type=InputType::Tel class="bc-input" />
                        </div>
                        <div class="bc-form-group">
                            <label>"Meeting Reason"</label>
                            <Input value=meeting_reason class="bc-input" />
                        </div>
                    </div>

                    <div class="bc-form-row">
                        <div class="bc-form-group">
                            <label>"Start Time *"</label>
                            {datetime_input(FormField::StartTime, start_time)}
                        </div>
                        <div class="bc-form-group">
                            <label>"End Time *"</label>
                            {datetime_input(FormField::EndTime, end_time)}
                        </div>
                    </div>

                    {can_check.then(|| view! {
                        <div class="bc-availability">
                            <Button
                                appearance=ButtonAppearance::Subtle
                                button_type=ButtonType::Button
                                on_click=move |_| handle_check_availability()
                            >
                                "Check Availability"
                            </Button>
                            {move || availability_note.get().map(|note| view! {
                                <span class="bc-availability-note">{note}</span>
                            })}
                        </div>
                    })}

                    <div class="bc-form-group">
                        <label>"Location"</label>
                        <Input value=location placeholder="Office, Zoom, etc." class="bc-input" />
                    </div>

                    <div class="bc-form-group">
                        <label>"Description"</label>
                        <Textarea value=description />
                    </div>

                    {is_edit.then(|| view! {
                        <div class="bc-form-group">
                            <label>"Status"</label>
                            <select
                                class="bc-input"
                                on:change=move |ev| {
                                    match event_target_value(&ev).parse::<BookingStatus>() {
                                        Ok(parsed) => status.set(parsed),
                                        Err(e) => leptos::logging::warn!("{}", e),
                                    }
                                }
                            >
                                {BookingStatus::ALL
                                    .into_iter()
                                    .map(|option| view! {
                                        <option
                                            value=option.as_str()
                                            selected=move || status.get() == option
                                        >
                                            {option.label()}
                                        </option>
                                    })
                                    .collect_view()}
                            </select>
                            <BookingStatusBadge status=status size=BadgeSize::Sm />
                            {delivery_status.map(|delivery| view! {
                                <DeliveryStatusBadge status=delivery size=BadgeSize::Sm />
                            })}
                        </div>
                    })}

                    <div class="bc-modal-footer">
                        <div class="bc-modal-actions-left">
                            {can_delete.then(|| view! {
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    class="bc-btn-danger"
                                    button_type=ButtonType::Button
                                    disabled=Signal::from(is_submitting)
                                    on_click=move |_| handle_delete()
                                >
                                    "Delete"
                                </Button>
                            })}
                            {can_confirm.then(|| view! {
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    button_type=ButtonType::Button
                                    disabled=Signal::from(is_submitting)
                                    on_click=move |_| handle_send_confirmation()
                                >
                                    "Send Confirmation"
                                </Button>
                            })}
                        </div>
                        <div class="bc-modal-actions-right">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                button_type=ButtonType::Button
                                disabled=Signal::from(is_submitting)
                                on_click=move |_| on_close()
                            >
                                "Cancel"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                button_type=ButtonType::Submit
                                disabled=Signal::from(is_submitting)
                                loading=is_submitting
                            >
                                {move || {
                                    if is_submitting.get() {
                                        "Saving..."
                                    } else if is_edit {
                                        "Update"
                                    } else {
                                        "Create"
                                    }
                                }}
                            </Button>
                        </div>
                    </div>
                </form>
            </div>
        </div>
    }
}
