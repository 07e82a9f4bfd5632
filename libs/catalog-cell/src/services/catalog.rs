use std::io::ErrorKind;
use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::models::{Catalog, CatalogError};

pub struct CatalogService {
    path: PathBuf,
}

impl CatalogService {
    pub fn new(config: &AppConfig) -> Self {
        Self::from_path(config.catalog_path.clone())
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the catalog file and returns its `scans` array unchanged.
    pub async fn get_services(&self) -> Result<Catalog, CatalogError> {
        debug!("Loading catalog from {:?}", self.path);

        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            error!("Failed to read catalog {:?}: {}", self.path, e);
            match e.kind() {
                ErrorKind::NotFound => CatalogError::NotFound { path: self.path.clone() },
                _ => CatalogError::Unreadable {
                    path: self.path.clone(),
                    reason: e.to_string(),
                },
            }
        })?;

        let document: Value = serde_json::from_str(&raw).map_err(|e| {
            error!("Catalog {:?} is not valid JSON: {}", self.path, e);
            CatalogError::Malformed {
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })?;

        match document {
            Value::Object(mut map) => match map.remove("scans") {
                Some(Value::Array(scans)) => {
                    debug!("Catalog loaded with {} scan types", scans.len());
                    Ok(Catalog { scans })
                }
                _ => Err(CatalogError::MissingScans { path: self.path.clone() }),
            },
            _ => Err(CatalogError::MissingScans { path: self.path.clone() }),
        }
    }
}
