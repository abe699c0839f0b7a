//! Plain-text rendering for CLI output.

use std::fmt::Write as _;

use serde::Serialize;
use sylva_lib::{StageOutcome, SylvaConfig, ZoneStats};

/// One line of the `check-config` report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigCheck {
    pub name: &'static str,
    pub status: &'static str,
}

/// Presence of every configured credential. Values are never included.
pub fn config_checks(config: &SylvaConfig) -> Vec<ConfigCheck> {
    let presence = |set: bool| if set { "configured" } else { "missing" };
    let provider = |placeholder: bool| if placeholder { "placeholder" } else { "configured" };

    vec![
        ConfigCheck {
            name: "SUPABASE_URL",
            status: presence(config.supabase.has_url()),
        },
        ConfigCheck {
            name: "SUPABASE_SERVICE_ROLE_KEY",
            status: presence(config.supabase.has_key()),
        },
        ConfigCheck {
            name: "OPENWEATHER_API_KEY",
            status: provider(config.api_keys.openweather.is_placeholder()),
        },
        ConfigCheck {
            name: "SENTINEL_CLIENT_ID/SECRET",
            status: provider(config.api_keys.sentinel.is_placeholder()),
        },
    ]
}

pub fn render_config_checks(checks: &[ConfigCheck]) -> String {
    let width = checks.iter().map(|c| c.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for check in checks {
        let _ = writeln!(out, "{:<width$}  {}", check.name, check.status, width = width);
    }
    out
}

pub fn render_stats(stats: &ZoneStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Zones:              {}", stats.total_zones);
    let _ = writeln!(out, "North Africa zones: {}", stats.north_africa_zones);
    for (country, count) in &stats.north_africa_countries {
        let _ = writeln!(out, "  - {}: {}", country, count);
    }
    let _ = writeln!(out, "Structures:         {}", stats.total_structures);
    let _ = writeln!(out, "Fuel types:         {}", stats.fuel_types_count);
    let risk = &stats.risk_distribution;
    let _ = writeln!(
        out,
        "Risk:               critical={} very-high={} high={} moderate={}",
        risk.critical, risk.very_high, risk.high, risk.moderate
    );
    out
}

pub fn render_stage_outcome(outcome: &StageOutcome) -> String {
    match outcome {
        StageOutcome::Copied {
            source,
            destination,
        } => format!(
            "Copied {} to {}",
            source.display(),
            destination.display()
        ),
        StageOutcome::NoReports => "No reports found; nothing staged".to_string(),
        StageOutcome::MissingReportsDir { path } => {
            format!("Reports directory {} not found; nothing staged", path.display())
        }
    }
}
