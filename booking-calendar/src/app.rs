use calendar_core::{CalendarConfig, CalendarError};
use chrono::{Local, NaiveDateTime};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use shared_types::BookingEvent;
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::callbacks::BookingCallbacks;
use crate::demo;
use crate::views::BookingCalendar;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        // id=leptos lets cargo-leptos hot-reload the stylesheet
        <Stylesheet id="leptos" href="/pkg/booking-calendar.css"/>
        <Title text="Booking Calendar"/>

        <ConfigProvider>
            <Router>
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=DemoPage/>
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Runs `f` against the store, failing if the page has been torn down.
fn with_store<T>(
    bookings: RwSignal<Vec<BookingEvent>>,
    f: impl FnOnce(&mut Vec<BookingEvent>) -> Result<T, CalendarError>,
) -> Result<T, CalendarError> {
    bookings
        .try_update(f)
        .unwrap_or_else(|| Err(CalendarError::callback("booking store is no longer available")))
}

/// Hosts the calendar over an in-memory store, the way an embedding app would
/// over its own backend.
#[component]
fn DemoPage() -> impl IntoView {
    let started = now();
    let bookings = RwSignal::new(demo::mock_bookings(started.date(), started));

    let callbacks = BookingCallbacks::new()
        .on_create(move |dto| async move {
            with_store(bookings, |list| demo::create_booking(list, dto, now()))
        })
        .on_update(move |id, dto| async move {
            with_store(bookings, |list| demo::update_booking(list, &id, dto, now()))
        })
        .on_delete(move |id| async move {
            with_store(bookings, |list| demo::delete_booking(list, &id))
        })
        .on_reschedule(move |id, dto| async move {
            with_store(bookings, |list| demo::reschedule_booking(list, &id, dto, now()))
        })
        .on_check_availability(move |request| async move {
            bookings
                .try_with_untracked(|list| demo::availability(list, &request))
                .unwrap_or_else(|| {
                    Err(CalendarError::callback("booking store is no longer available"))
                })
        })
        .on_send_confirmation(move |id| async move {
            with_store(bookings, |list| demo::mark_confirmation_sent(list, &id, now()))?;
            leptos::logging::log!("Confirmation sent for booking {}", id);
            Ok(())
        });

    view! {
        <div class="bc-demo">
            <h1>"Booking Calendar"</h1>
            <BookingCalendar
                bookings=bookings
                callbacks=callbacks
                config=CalendarConfig::default()
            />
        </div>
    }
}
