//! Aggregate statistics over zone and fuel-type rows.
//!
//! Everything here is a read-only projection computed fresh for each request.
//! Empty inputs are valid and produce zeroed statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

use crate::models::{FuelType, Zone};

/// Regions reported in the per-country breakdown.
pub const NORTH_AFRICA_COUNTRIES: [&str; 5] = ["Morocco", "Algeria", "Tunisia", "Libya", "Egypt"];

/// Risk level derived from a zone's WUI distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskLevel {
    Critical,
    VeryHigh,
    High,
    Moderate,
}

/// Upper bounds (exclusive) of the first three risk buckets, in kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskThresholds {
    pub critical_below: f64,
    pub very_high_below: f64,
    pub high_below: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            critical_below: 1.5,
            very_high_below: 2.0,
            high_below: 2.5,
        }
    }
}

impl RiskThresholds {
    /// Classify a distance. First match wins; bounds are strict.
    pub fn classify(&self, distance_km: f64) -> RiskLevel {
        if distance_km < self.critical_below {
            RiskLevel::Critical
        } else if distance_km < self.very_high_below {
            RiskLevel::VeryHigh
        } else if distance_km < self.high_below {
            RiskLevel::High
        } else {
            RiskLevel::Moderate
        }
    }
}

/// Business constants driving the statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsRules {
    /// Region names counted in the breakdown. Matching is exact and case-sensitive.
    pub regions: Vec<String>,
    pub thresholds: RiskThresholds,
}

impl Default for StatsRules {
    fn default() -> Self {
        Self {
            regions: NORTH_AFRICA_COUNTRIES.iter().map(|s| s.to_string()).collect(),
            thresholds: RiskThresholds::default(),
        }
    }
}

impl StatsRules {
    pub fn includes_region(&self, region: &str) -> bool {
        self.regions.iter().any(|r| r == region)
    }
}

/// Zone counts per risk bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskDistribution {
    pub critical: usize,
    pub very_high: usize,
    pub high: usize,
    pub moderate: usize,
}

impl RiskDistribution {
    pub fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Critical => self.critical += 1,
            RiskLevel::VeryHigh => self.very_high += 1,
            RiskLevel::High => self.high += 1,
            RiskLevel::Moderate => self.moderate += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.very_high + self.high + self.moderate
    }
}

/// Derived summary returned alongside the raw rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStats {
    pub total_zones: usize,
    pub north_africa_zones: usize,
    pub north_africa_countries: BTreeMap<String, usize>,
    /// Written as a JSON integer whenever the sum is whole.
    #[serde(serialize_with = "serialize_count")]
    pub total_structures: f64,
    pub fuel_types_count: usize,
    pub risk_distribution: RiskDistribution,
}

impl ZoneStats {
    /// Compute statistics with the default rules.
    pub fn from_rows(zones: &[Zone], fuel_types: &[FuelType]) -> Self {
        compute_stats(zones, fuel_types, &StatsRules::default())
    }
}

// Largest magnitude below which every whole f64 maps exactly onto an i64.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

fn serialize_count<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < EXACT_INTEGER_LIMIT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Compute the aggregate statistics for one snapshot of rows.
pub fn compute_stats(zones: &[Zone], fuel_types: &[FuelType], rules: &StatsRules) -> ZoneStats {
    let mut stats = ZoneStats {
        total_zones: zones.len(),
        fuel_types_count: fuel_types.len(),
        ..ZoneStats::default()
    };

    for zone in zones {
        if let Some(region) = zone.region.as_deref() {
            if rules.includes_region(region) {
                stats.north_africa_zones += 1;
                *stats
                    .north_africa_countries
                    .entry(region.to_string())
                    .or_insert(0) += 1;
            }
        }

        stats.total_structures += zone.structures();
        stats
            .risk_distribution
            .record(rules.thresholds.classify(zone.wui_distance()));
    }

    stats
}
