use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{body::Body, http::Response};
use serde_json::{json, Value};
use tempfile::NamedTempFile;

use shared_config::{AppConfig, BookingPolicy};

pub struct TestConfig {
    pub catalog_path: PathBuf,
    pub booking_policy: BookingPolicy,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("does-not-exist.json"),
            booking_policy: BookingPolicy::Strict,
        }
    }
}

impl TestConfig {
    pub fn with_catalog(catalog: &CatalogFile) -> Self {
        Self {
            catalog_path: catalog.path(),
            ..Self::default()
        }
    }

    pub fn policy(mut self, policy: BookingPolicy) -> Self {
        self.booking_policy = policy;
        self
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            catalog_path: self.catalog_path.clone(),
            booking_policy: self.booking_policy,
            ..AppConfig::default()
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// A catalog document on disk that is removed when dropped.
pub struct CatalogFile {
    file: NamedTempFile,
}

impl CatalogFile {
    pub fn new(contents: &str) -> Self {
        let mut file = NamedTempFile::new().expect("create temp catalog");
        file.write_all(contents.as_bytes()).expect("write temp catalog");
        file.flush().expect("flush temp catalog");
        Self { file }
    }

    pub fn with_scans(scans: Value) -> Self {
        Self::new(&json!({ "scans": scans }).to_string())
    }

    pub fn sample() -> Self {
        Self::with_scans(sample_scans())
    }

    pub fn path(&self) -> PathBuf {
        self.file.path().to_path_buf()
    }

    /// Replaces the file contents in place.
    pub fn rewrite(&self, contents: &str) {
        std::fs::write(self.file.path(), contents).expect("rewrite temp catalog");
    }
}

pub fn sample_scans() -> Value {
    json!([
        { "name": "MRI", "price": 6500 },
        { "name": "CT Scan", "price": 3500 },
        { "name": "X-Ray", "price": 600 }
    ])
}

pub fn booking_payload(patient_name: &str, scan_type: &str) -> Value {
    json!({
        "patient_name": patient_name,
        "scan_type": scan_type,
        "date": "2024-06-01",
        "time": "10:00"
    })
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("response body is JSON")
}
