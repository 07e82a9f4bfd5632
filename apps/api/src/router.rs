use std::sync::Arc;

use axum::{
    Json, Router,
    routing::get,
};

use tower_http::cors::CorsLayer;

use appointment_cell::{appointment_routes, AppointmentStore};
use catalog_cell::catalog_routes;
use shared_config::AppConfig;
use shared_models::status::ServiceStatus;

pub fn create_router(state: Arc<AppConfig>, store: Arc<AppointmentStore>) -> Router {
    Router::new()
        .route("/", get(|| async { Json(ServiceStatus::operational()) }))
        .merge(catalog_routes(state.clone()))
        .merge(appointment_routes(state, store))
}

/// Local demo only: mirrors any origin and allows credentials.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::very_permissive()
}
