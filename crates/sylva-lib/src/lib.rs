//! SYLVA library entry points.
//!
//! This crate holds everything the zones and health endpoints need: the
//! configuration struct, typed Supabase rows, the read-only query client, the
//! statistics engine and the response envelopes. Front ends (Lambdas, the HTTP
//! service, the CLI) should only depend on what is exported here instead of
//! reimplementing behavior.

pub mod config;
pub mod cors;
pub mod error;
pub mod health;
pub mod models;
pub mod output;
pub mod overview;
pub mod report;
pub mod stats;
pub mod supabase;

pub use config::{ApiKeys, SupabaseSettings, SylvaConfig};
pub use error::{Error, ErrorKind, Result};
pub use health::HealthReport;
pub use models::{FuelType, RecordId, Zone};
pub use output::{ApiEnvelope, ErrorBody, ZonesData};
pub use overview::{zone_overview, zone_overview_with};
pub use report::{stage_latest_report, StageOutcome};
pub use stats::{compute_stats, RiskDistribution, RiskLevel, StatsRules, ZoneStats};
pub use supabase::{SupabaseClient, ZoneSnapshot};
