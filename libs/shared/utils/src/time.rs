use chrono::{DateTime, Local, NaiveDateTime};

/// Format used for server-stamped `booked_at` values.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local wall-clock time, second precision.
pub fn local_timestamp() -> String {
    format_timestamp(Local::now())
}

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).ok()
}
