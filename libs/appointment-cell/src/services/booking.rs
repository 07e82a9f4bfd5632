// libs/appointment-cell/src/services/booking.rs
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use shared_config::{AppConfig, BookingPolicy};
use shared_utils::time::local_timestamp;

use crate::models::{
    Appointment, AppointmentError, BookAppointmentRequest, BookingConfirmation,
    StrictBookingPayload,
};
use crate::services::store::AppointmentStore;

pub struct AppointmentBookingService {
    store: Arc<AppointmentStore>,
    policy: BookingPolicy,
}

impl AppointmentBookingService {
    pub fn new(config: &AppConfig, store: Arc<AppointmentStore>) -> Self {
        Self::with_policy(config.booking_policy, store)
    }

    pub fn with_policy(policy: BookingPolicy, store: Arc<AppointmentStore>) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> BookingPolicy {
        self.policy
    }

    /// Normalizes a raw payload according to the configured policy and books it.
    pub async fn book(&self, payload: Value) -> Result<BookingConfirmation, AppointmentError> {
        let request = self.normalize(payload)?;
        Ok(self.book_appointment(request).await)
    }

    pub fn normalize(&self, payload: Value) -> Result<BookAppointmentRequest, AppointmentError> {
        match self.policy {
            BookingPolicy::Strict => serde_json::from_value::<StrictBookingPayload>(payload)
                .map_err(|e| AppointmentError::ValidationError(e.to_string()))
                .and_then(StrictBookingPayload::into_request)
                .map_err(|e| {
                    warn!("Rejected booking payload: {}", e);
                    e
                }),
            BookingPolicy::Lenient => {
                let request = BookAppointmentRequest::from_loose(&payload);
                debug!("Lenient booking normalized to {:?}", request);
                Ok(request)
            }
        }
    }

    /// Stamps `booked_at` and stores the appointment at the head of the list.
    pub async fn book_appointment(&self, request: BookAppointmentRequest) -> BookingConfirmation {
        info!(
            "Booking received: {} for {} on {} at {}",
            request.patient_name, request.scan_type, request.appointment_date, request.appointment_time
        );

        let appointment = Appointment::from_request(request, local_timestamp());
        let seq = self.store.insert_front(appointment).await;

        let confirmation = BookingConfirmation::confirmed(seq);
        info!("Booking {} confirmed", confirmation.booking_id);

        confirmation
    }

    pub async fn list_appointments(&self) -> Vec<Appointment> {
        self.store.list_all().await
    }
}
