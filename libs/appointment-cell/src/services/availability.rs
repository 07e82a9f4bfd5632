// libs/appointment-cell/src/services/availability.rs
use tracing::debug;

use crate::models::{AvailabilityQuery, AvailabilityResponse, DEFAULT_DATE, DEFAULT_TIME};

/// Slot availability for the voice assistant.
///
/// Known simplification: every slot is reported available. Nothing is checked
/// against the appointment store, and past or unparsable dates are accepted.
pub struct AvailabilityService;

impl AvailabilityService {
    pub fn new() -> Self {
        Self
    }

    pub fn check_availability(&self, query: &AvailabilityQuery) -> AvailabilityResponse {
        let date = query.date.as_deref().unwrap_or(DEFAULT_DATE);
        let time = query.time.as_deref().unwrap_or(DEFAULT_TIME);

        debug!("Availability requested for {} at {}", date, time);

        AvailabilityResponse {
            available: true,
            message: format!("Slot at {} on {} is available.", time, date),
        }
    }
}

impl Default for AvailabilityService {
    fn default() -> Self {
        Self::new()
    }
}
