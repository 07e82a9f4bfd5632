use std::sync::Arc;

use axum::{extract::State, Json};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::Catalog;
use crate::services::CatalogService;

/// Scan types and prices, read fresh from the knowledge base.
pub async fn get_services(
    State(config): State<Arc<AppConfig>>,
) -> Result<Json<Catalog>, AppError> {
    let service = CatalogService::new(&config);

    let catalog = service.get_services().await?;

    Ok(Json(catalog))
}
