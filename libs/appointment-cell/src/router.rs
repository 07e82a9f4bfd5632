// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use shared_config::AppConfig;

use crate::handlers::{self, AppointmentHandlers};
use crate::services::AppointmentStore;

pub fn appointment_routes(config: Arc<AppConfig>, store: Arc<AppointmentStore>) -> Router {
    let handlers = Arc::new(AppointmentHandlers::new(&config, store));

    Router::new()
        .route(
            "/check_availability",
            get(handlers::check_availability).post(handlers::check_availability_json),
        )
        .route("/book_appointment", post(handlers::book_appointment))
        .route("/appointments", get(handlers::list_appointments))
        .with_state(handlers)
}
