use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared_models::error::AppError;

/// The `scans` section of the knowledge base, entries passed through verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub scans: Vec<Value>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.scans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scans.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog file {path:?} not found")]
    NotFound { path: PathBuf },

    #[error("catalog file {path:?} could not be read: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    #[error("catalog file {path:?} is not valid JSON: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("catalog file {path:?} has no `scans` array")]
    MissingScans { path: PathBuf },
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::DataUnavailable(err.to_string())
    }
}
