//! Static health report describing configuration presence.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::SupabaseSettings;
use crate::output::now_timestamp;

pub const SERVICE_NAME: &str = "SYLVA Operational Intelligence";
pub const SERVICE_VERSION: &str = "2.5.0";

/// Public endpoint map advertised by the health report.
pub const ENDPOINTS: [(&str, &str); 1] = [("get-fire-zones", "/api/get-fire-zones")];

/// Whether each Supabase setting is present. Values are never echoed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupabaseStatus {
    pub configured: bool,
    pub url: bool,
    pub key: bool,
}

impl From<&SupabaseSettings> for SupabaseStatus {
    fn from(settings: &SupabaseSettings) -> Self {
        Self {
            configured: settings.is_configured(),
            url: settings.has_url(),
            key: settings.has_key(),
        }
    }
}

/// Body of the health endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub service: String,
    pub version: String,
    pub supabase: SupabaseStatus,
    pub timestamp: String,
    pub endpoints: BTreeMap<String, String>,
}

impl HealthReport {
    pub fn from_settings(settings: &SupabaseSettings) -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            supabase: settings.into(),
            timestamp: now_timestamp(),
            endpoints: ENDPOINTS
                .iter()
                .map(|(name, path)| (name.to_string(), path.to_string()))
                .collect(),
        }
    }
}
