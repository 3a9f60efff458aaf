use crate::config;
use chrono::{DateTime, Utc};

pub mod reddit;

/// Formats Unix seconds as an ISO 8601 UTC string, e.g. "2023-08-14T08:00:00Z".
/// A non-zero fraction is kept to the microsecond: "2023-08-14T08:00:00.500000Z".
pub fn format_utc_timestamp(seconds: f64) -> Option<String> {
    if !seconds.is_finite() {
        return None;
    }
    let micros = (seconds * 1_000_000.0).round_ties_even();
    if micros.abs() >= i64::MAX as f64 {
        return None;
    }
    let dt: DateTime<Utc> = DateTime::from_timestamp_micros(micros as i64)?;
    let format = if dt.timestamp_subsec_micros() == 0 {
        config::PUBLISH_DATE_FORMAT
    } else {
        config::PUBLISH_DATE_FORMAT_FRACTIONAL
    };
    Some(dt.format(format).to_string())
}
