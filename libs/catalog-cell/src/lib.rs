// =====================================================================================
// CATALOG CELL - SCAN TYPES & PRICES
// =====================================================================================
//
// Serves the clinic's scan catalog straight from the external knowledge base
// file. The file is re-read on every request; nothing is cached.
//
// =====================================================================================

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{Catalog, CatalogError};
pub use router::catalog_routes;
pub use services::CatalogService;
