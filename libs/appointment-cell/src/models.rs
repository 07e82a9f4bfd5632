// libs/appointment-cell/src/models.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use shared_models::error::AppError;

pub const DEFAULT_STATUS: &str = "Pending";

// Substituted by the lenient booking policy when a field is missing.
pub const DEFAULT_PATIENT_NAME: &str = "Workflow Test";
pub const DEFAULT_SCAN_TYPE: &str = "MRI";
pub const DEFAULT_DATE: &str = "today";
pub const DEFAULT_TIME: &str = "any time";

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// One stored booking. Never mutated after insertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    pub patient_name: String,
    pub age: Option<String>,
    pub contact_number: Option<String>,
    pub scan_type: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub status: String,
    /// Server time of insertion, `YYYY-MM-DD HH:MM:SS`.
    pub booked_at: String,
}

impl Appointment {
    pub fn from_request(request: BookAppointmentRequest, booked_at: String) -> Self {
        Self {
            patient_name: request.patient_name,
            age: request.age,
            contact_number: request.contact_number,
            scan_type: request.scan_type,
            appointment_date: request.appointment_date,
            appointment_time: request.appointment_time,
            status: request.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            booked_at,
        }
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

/// Normalized booking request handed to the booking service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookAppointmentRequest {
    pub patient_name: String,
    pub age: Option<String>,
    pub contact_number: Option<String>,
    pub scan_type: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub status: Option<String>,
}

/// Typed booking payload accepted by the strict policy.
///
/// `date` and `time` are short forms of `appointment_date` and
/// `appointment_time`; the full names win when both are sent. Any `booked_at`
/// sent by the caller is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StrictBookingPayload {
    pub patient_name: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub age: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub contact_number: Option<String>,
    pub scan_type: String,
    #[serde(default)]
    pub appointment_date: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub appointment_time: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl StrictBookingPayload {
    pub fn into_request(self) -> Result<BookAppointmentRequest, AppointmentError> {
        let appointment_date = self.appointment_date.or(self.date).ok_or_else(|| {
            AppointmentError::ValidationError("missing field `appointment_date`".to_string())
        })?;
        let appointment_time = self.appointment_time.or(self.time).ok_or_else(|| {
            AppointmentError::ValidationError("missing field `appointment_time`".to_string())
        })?;

        Ok(BookAppointmentRequest {
            patient_name: self.patient_name,
            age: self.age,
            contact_number: self.contact_number,
            scan_type: self.scan_type,
            appointment_date,
            appointment_time,
            status: self.status,
        })
    }
}

impl BookAppointmentRequest {
    /// Builds a request from any JSON value, filling gaps with demo defaults.
    pub fn from_loose(payload: &Value) -> Self {
        let field = |keys: &[&str]| keys.iter().find_map(|key| loose_text(payload.get(*key)));

        Self {
            patient_name: field(&["patient_name"])
                .unwrap_or_else(|| DEFAULT_PATIENT_NAME.to_string()),
            age: field(&["age"]),
            contact_number: field(&["contact_number"]),
            scan_type: field(&["scan_type"]).unwrap_or_else(|| DEFAULT_SCAN_TYPE.to_string()),
            appointment_date: field(&["appointment_date", "date"])
                .unwrap_or_else(|| DEFAULT_DATE.to_string()),
            appointment_time: field(&["appointment_time", "time"])
                .unwrap_or_else(|| DEFAULT_TIME.to_string()),
            status: field(&["status"]),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvailabilityQuery {
    #[serde(default, deserialize_with = "text_or_number")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub time: Option<String>,
}

impl AvailabilityQuery {
    /// Fills missing fields from `fallback`.
    pub fn or(self, fallback: AvailabilityQuery) -> Self {
        Self {
            date: self.date.or(fallback.date),
            time: self.time.or(fallback.time),
        }
    }
}

// ==============================================================================
// RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub status: String,
    pub booking_id: String,
    pub message: String,
}

impl BookingConfirmation {
    pub fn confirmed(booking_seq: u64) -> Self {
        Self {
            status: "success".to_string(),
            booking_id: format!("bk_{}", booking_seq),
            message: "Booking Confirmed".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvailabilityResponse {
    pub available: bool,
    pub message: String,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AppointmentError {
    #[error("Invalid booking request: {0}")]
    ValidationError(String),
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::ValidationError(msg) => AppError::ValidationError(msg),
        }
    }
}

// ==============================================================================
// FIELD COERCION
// ==============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl From<TextOrNumber> for String {
    fn from(value: TextOrNumber) -> Self {
        match value {
            TextOrNumber::Text(s) => s,
            TextOrNumber::Integer(n) => n.to_string(),
            TextOrNumber::Unsigned(n) => n.to_string(),
            TextOrNumber::Float(n) => n.to_string(),
        }
    }
}

/// Accepts `"42"`, `42` or `null` for optional text fields.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TextOrNumber>::deserialize(deserializer)?.map(String::from))
}

fn loose_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strict(payload: Value) -> Result<BookAppointmentRequest, AppointmentError> {
        serde_json::from_value::<StrictBookingPayload>(payload)
            .map_err(|e| AppointmentError::ValidationError(e.to_string()))?
            .into_request()
    }

    #[test]
    fn test_strict_request_accepts_short_keys() {
        let request = strict(json!({
            "patient_name": "Asha",
            "scan_type": "MRI",
            "date": "2024-06-01",
            "time": "10:00"
        }))
        .unwrap();

        assert_eq!(request.appointment_date, "2024-06-01");
        assert_eq!(request.appointment_time, "10:00");
        assert_eq!(request.age, None);
        assert_eq!(request.contact_number, None);
    }

    #[test]
    fn test_strict_request_full_names_win_over_short_keys() {
        let request = strict(json!({
            "patient_name": "Asha",
            "scan_type": "MRI",
            "appointment_date": "2024-06-01",
            "date": "2024-06-02",
            "appointment_time": "10:00",
            "time": "11:00"
        }))
        .unwrap();

        assert_eq!(request.appointment_date, "2024-06-01");
        assert_eq!(request.appointment_time, "10:00");
    }

    #[test]
    fn test_strict_request_coerces_numbers() {
        let request = strict(json!({
            "patient_name": "Ravi",
            "age": 34,
            "contact_number": 18446744073709551615u64,
            "scan_type": "CT Scan",
            "appointment_date": "2024-06-02",
            "appointment_time": "15:30"
        }))
        .unwrap();

        assert_eq!(request.age.as_deref(), Some("34"));
        assert_eq!(request.contact_number.as_deref(), Some("18446744073709551615"));
    }

    #[test]
    fn test_strict_request_missing_field_fails() {
        let err = strict(json!({
            "patient_name": "Asha",
            "date": "2024-06-01",
            "time": "10:00"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("scan_type"));

        let err = strict(json!({
            "patient_name": "Asha",
            "scan_type": "MRI",
            "appointment_time": "10:00"
        }))
        .unwrap_err();
        assert_eq!(
            err,
            AppointmentError::ValidationError("missing field `appointment_date`".to_string())
        );

        let err = strict(json!({
            "patient_name": "Asha",
            "scan_type": "MRI",
            "date": "2024-06-01"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("appointment_time"));
    }

    #[test]
    fn test_loose_request_defaults() {
        let request = BookAppointmentRequest::from_loose(&json!({}));

        assert_eq!(request.patient_name, DEFAULT_PATIENT_NAME);
        assert_eq!(request.scan_type, DEFAULT_SCAN_TYPE);
        assert_eq!(request.appointment_date, DEFAULT_DATE);
        assert_eq!(request.appointment_time, DEFAULT_TIME);
        assert_eq!(request.age, None);
    }

    #[test]
    fn test_loose_request_keeps_supplied_values() {
        let request = BookAppointmentRequest::from_loose(&json!({
            "patient_name": "Meera",
            "age": 61,
            "scan_type": "",
            "date": "tomorrow",
            "appointment_time": "09:00",
            "status": "Confirmed"
        }));

        assert_eq!(request.patient_name, "Meera");
        assert_eq!(request.age.as_deref(), Some("61"));
        assert_eq!(request.scan_type, DEFAULT_SCAN_TYPE);
        assert_eq!(request.appointment_date, "tomorrow");
        assert_eq!(request.appointment_time, "09:00");
        assert_eq!(request.status.as_deref(), Some("Confirmed"));
    }

    #[test]
    fn test_loose_request_ignores_unknown_keys() {
        let request = BookAppointmentRequest::from_loose(&json!({
            "name": "Kiran",
            "phone": "9988776655"
        }));

        assert_eq!(request.patient_name, DEFAULT_PATIENT_NAME);
        assert_eq!(request.contact_number, None);
    }

    #[test]
    fn test_loose_request_from_non_object() {
        let request = BookAppointmentRequest::from_loose(&json!("book me an MRI"));
        assert_eq!(request.patient_name, DEFAULT_PATIENT_NAME);
    }

    #[test]
    fn test_confirmation_id_format() {
        let confirmation = BookingConfirmation::confirmed(7);
        assert_eq!(confirmation.booking_id, "bk_7");
        assert_eq!(confirmation.status, "success");
    }
}
