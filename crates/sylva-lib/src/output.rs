//! JSON envelopes shared by every front end (Lambda, HTTP service, CLI).

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{FuelType, Zone};
use crate::stats::ZoneStats;

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2025-07-01T09:30:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current time formatted with [`iso_timestamp`].
pub fn now_timestamp() -> String {
    iso_timestamp(Utc::now())
}

/// Payload of a successful zones response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZonesData {
    pub zones: Vec<Zone>,
    #[serde(rename = "fuelTypes")]
    pub fuel_types: Vec<FuelType>,
    pub stats: ZoneStats,
}

/// Uniform response envelope.
///
/// Success: `{ success: true, timestamp, data }`.
/// Failure: `{ success: false, error, timestamp }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    pub timestamp: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Wrap a successful payload, stamped with the current time.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            error: None,
            timestamp: now_timestamp(),
            data: Some(data),
        }
    }

    /// Build an error envelope, stamped with the current time.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            timestamp: now_timestamp(),
            data: None,
        }
    }

    /// Override the timestamp (for reproducible output).
    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = iso_timestamp(at);
        self
    }
}

/// Minimal error body used when the health report itself cannot be produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn timestamp_has_millis_and_z_suffix() {
        assert_eq!(iso_timestamp(fixed_time()), "2025-07-01T09:30:00.000Z");
    }

    #[test]
    fn success_envelope_shape() {
        let envelope = ApiEnvelope::success(ZonesData::default()).with_timestamp(fixed_time());
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["timestamp"], "2025-07-01T09:30:00.000Z");
        assert!(json["data"]["zones"].is_array());
        assert!(json["data"]["fuelTypes"].is_array());
        assert_eq!(json["data"]["stats"]["totalZones"], 0);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn failure_envelope_shape() {
        let envelope = ApiEnvelope::<ZonesData>::failure("Supabase credentials not configured");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Supabase credentials not configured");
        assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
        assert!(json.get("data").is_none());
    }
}
