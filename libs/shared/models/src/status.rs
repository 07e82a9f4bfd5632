use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "Diagnostic Clinic AI Backend";

/// Liveness payload served at the API root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceStatus {
    pub status: String,
    pub service: String,
}

impl ServiceStatus {
    pub fn operational() -> Self {
        Self {
            status: "System Operational".to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}
