//! Typed rows returned by the Supabase REST endpoint.
//!
//! Only the columns the statistics depend on are named. Every other column is
//! kept in `extra` so the rows can be handed back to the front end unchanged.
//! Named columns are optional and accept `null`; absent ones stay absent on
//! the way out.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Distance used for a zone that has no `wui_distance_km` value.
pub const DEFAULT_WUI_DISTANCE_KM: f64 = 2.0;

/// Structure count used for a zone that has no `wui_structures_estimate` value.
pub const DEFAULT_STRUCTURES_ESTIMATE: f64 = 0.0;

/// Primary key or foreign key value. Tables use either integer or text keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

/// A fire-risk zone row joined with its primary fuel type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,

    /// Country or area name, compared verbatim against the region allow-list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Distance to the wildland-urban interface, in kilometres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wui_distance_km: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wui_structures_estimate: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_fuel_code: Option<RecordId>,

    /// Joined projection of the referenced fuel type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_types: Option<FuelTypeSummary>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Zone {
    pub fn new(zone_name: impl Into<String>) -> Self {
        Self {
            zone_name: Some(zone_name.into()),
            ..Self::default()
        }
    }

    /// Zone name, or an empty string for rows stored without one.
    pub fn name(&self) -> &str {
        self.zone_name.as_deref().unwrap_or_default()
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_distance(mut self, km: f64) -> Self {
        self.wui_distance_km = Some(km);
        self
    }

    pub fn with_structures(mut self, estimate: f64) -> Self {
        self.wui_structures_estimate = Some(estimate);
        self
    }

    /// WUI distance with the documented default applied.
    pub fn wui_distance(&self) -> f64 {
        self.wui_distance_km.unwrap_or(DEFAULT_WUI_DISTANCE_KM)
    }

    /// Structure estimate with the documented default applied.
    pub fn structures(&self) -> f64 {
        self.wui_structures_estimate
            .unwrap_or(DEFAULT_STRUCTURES_ESTIMATE)
    }
}

/// Fuel-type columns embedded in each zone row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelTypeSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_pod: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_wind: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_dfm: Option<f64>,
}

/// A fuel-type row.
///
/// The weighting coefficients are shown to the user but never computed on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_name: Option<String>,

    /// Validation indicator, passed through as stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_pod: Option<Value>,

    /// Wind weighting coefficient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_wind: Option<f64>,

    /// Dead fuel moisture weighting coefficient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_dfm: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FuelType {
    pub fn new(fuel_name: impl Into<String>) -> Self {
        Self {
            fuel_name: Some(fuel_name.into()),
            ..Self::default()
        }
    }
}
