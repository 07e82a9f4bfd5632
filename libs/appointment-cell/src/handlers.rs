// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use tracing::instrument;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{Appointment, AvailabilityQuery, AvailabilityResponse, BookingConfirmation};
use crate::services::{AppointmentBookingService, AppointmentStore, AvailabilityService};

pub struct AppointmentHandlers {
    booking_service: AppointmentBookingService,
    availability_service: AvailabilityService,
}

impl AppointmentHandlers {
    pub fn new(config: &AppConfig, store: Arc<AppointmentStore>) -> Self {
        Self {
            booking_service: AppointmentBookingService::new(config, store),
            availability_service: AvailabilityService::new(),
        }
    }
}

// ==============================================================================
// VOICE TOOL ENDPOINTS
// ==============================================================================

#[instrument(skip(handlers))]
pub async fn check_availability(
    State(handlers): State<Arc<AppointmentHandlers>>,
    Query(query): Query<AvailabilityQuery>,
) -> Json<AvailabilityResponse> {
    Json(handlers.availability_service.check_availability(&query))
}

/// POST form; the JSON body is optional and its fields win over query params.
#[instrument(skip(handlers))]
pub async fn check_availability_json(
    State(handlers): State<Arc<AppointmentHandlers>>,
    Query(query): Query<AvailabilityQuery>,
    body: Option<Json<AvailabilityQuery>>,
) -> Json<AvailabilityResponse> {
    let query = match body {
        Some(Json(body)) => body.or(query),
        None => query,
    };

    Json(handlers.availability_service.check_availability(&query))
}

#[instrument(skip(handlers, payload))]
pub async fn book_appointment(
    State(handlers): State<Arc<AppointmentHandlers>>,
    Json(payload): Json<Value>,
) -> Result<Json<BookingConfirmation>, AppError> {
    let confirmation = handlers.booking_service.book(payload).await?;

    Ok(Json(confirmation))
}

// ==============================================================================
// TECHNICIAN DASHBOARD ENDPOINTS
// ==============================================================================

pub async fn list_appointments(
    State(handlers): State<Arc<AppointmentHandlers>>,
) -> Json<Vec<Appointment>> {
    Json(handlers.booking_service.list_appointments().await)
}
