//! Host callbacks the calendar delegates persistence to.
//!
//! The calendar never owns bookings. Every mutation is handed to the host as
//! an async callback; the host updates its own store and the bookings signal
//! it passed in. A missing callback disables the matching action in the UI.

use std::future::Future;
use std::sync::Arc;

use calendar_core::CalendarError;
use futures::future::{FutureExt, LocalBoxFuture};
use shared_types::{
    AvailabilityRequest, AvailabilityResponse, BookingEvent, CreateBookingDto,
    RescheduleBookingDto, UpdateBookingDto,
};

pub type CallbackResult<T> = LocalBoxFuture<'static, Result<T, CalendarError>>;

pub type CreateFn = Arc<dyn Fn(CreateBookingDto) -> CallbackResult<BookingEvent> + Send + Sync>;
pub type UpdateFn =
    Arc<dyn Fn(String, UpdateBookingDto) -> CallbackResult<BookingEvent> + Send + Sync>;
pub type DeleteFn = Arc<dyn Fn(String) -> CallbackResult<()> + Send + Sync>;
pub type RescheduleFn =
    Arc<dyn Fn(String, RescheduleBookingDto) -> CallbackResult<BookingEvent> + Send + Sync>;
pub type AvailabilityFn =
    Arc<dyn Fn(AvailabilityRequest) -> CallbackResult<AvailabilityResponse> + Send + Sync>;
pub type SendConfirmationFn = Arc<dyn Fn(String) -> CallbackResult<()> + Send + Sync>;

#[derive(Clone, Default)]
pub struct BookingCallbacks {
    pub on_create: Option<CreateFn>,
    pub on_update: Option<UpdateFn>,
    pub on_delete: Option<DeleteFn>,
    pub on_reschedule: Option<RescheduleFn>,
    pub on_check_availability: Option<AvailabilityFn>,
    pub on_send_confirmation: Option<SendConfirmationFn>,
}

impl BookingCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_create<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(CreateBookingDto) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<BookingEvent, CalendarError>> + 'static,
    {
        self.on_create = Some(Arc::new(move |dto| f(dto).boxed_local()));
        self
    }

    pub fn on_update<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(String, UpdateBookingDto) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<BookingEvent, CalendarError>> + 'static,
    {
        self.on_update = Some(Arc::new(move |id, dto| f(id, dto).boxed_local()));
        self
    }

    pub fn on_delete<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), CalendarError>> + 'static,
    {
        self.on_delete = Some(Arc::new(move |id| f(id).boxed_local()));
        self
    }

    pub fn on_reschedule<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(String, RescheduleBookingDto) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<BookingEvent, CalendarError>> + 'static,
    {
        self.on_reschedule = Some(Arc::new(move |id, dto| f(id, dto).boxed_local()));
        self
    }

    pub fn on_check_availability<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(AvailabilityRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<AvailabilityResponse, CalendarError>> + 'static,
    {
        self.on_check_availability = Some(Arc::new(move |req| f(req).boxed_local()));
        self
    }

    pub fn on_send_confirmation<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), CalendarError>> + 'static,
    {
        self.on_send_confirmation = Some(Arc::new(move |id| f(id).boxed_local()));
        self
    }

    pub fn can_reschedule(&self) -> bool {
        self.on_reschedule.is_some()
    }
}

impl std::fmt::Debug for BookingCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingCallbacks")
            .field("on_create", &self.on_create.is_some())
            .field("on_update", &self.on_update.is_some())
            .field("on_delete", &self.on_delete.is_some())
            .field("on_reschedule", &self.on_reschedule.is_some())
            .field("on_check_availability", &self.on_check_availability.is_some())
            .field("on_send_confirmation", &self.on_send_confirmation.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn builder_registers_only_given_callbacks() {
        let callbacks = BookingCallbacks::new()
            .on_delete(|_id| async { Ok(()) })
            .on_send_confirmation(|id| async move { Err(CalendarError::callback(format!("no mailer for {id}"))) });

        assert!(callbacks.on_create.is_none());
        assert!(!callbacks.can_reschedule());

        let delete = callbacks.on_delete.clone().unwrap();
        assert_eq!(block_on(delete("1".to_string())), Ok(()));

        let confirm = callbacks.on_send_confirmation.unwrap();
        assert_eq!(
            block_on(confirm("7".to_string())),
            Err(CalendarError::Callback("no mailer for 7".to_string()))
        );
    }
}
