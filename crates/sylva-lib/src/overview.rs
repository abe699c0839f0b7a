//! The zones query: fetch both row sets, then compute statistics.

use tracing::info;

use crate::config::SylvaConfig;
use crate::error::Result;
use crate::output::ZonesData;
use crate::stats::{compute_stats, StatsRules};
use crate::supabase::SupabaseClient;

/// Run the zones query using the configured Supabase settings.
///
/// Missing credentials fail before any network call. Either read failing
/// fails the whole operation; rows already fetched are discarded.
pub async fn zone_overview(config: &SylvaConfig) -> Result<ZonesData> {
    let client = SupabaseClient::from_settings(&config.supabase)?;
    zone_overview_with(&client, &config.stats).await
}

/// Run the zones query with an existing client.
pub async fn zone_overview_with(client: &SupabaseClient, rules: &StatsRules) -> Result<ZonesData> {
    let snapshot = client.fetch_snapshot().await?;
    let stats = compute_stats(&snapshot.zones, &snapshot.fuel_types, rules);

    info!(
        zones = stats.total_zones,
        fuel_types = stats.fuel_types_count,
        north_africa_zones = stats.north_africa_zones,
        "zone statistics computed"
    );

    Ok(ZonesData {
        zones: snapshot.zones,
        fuel_types: snapshot.fuel_types,
        stats,
    })
}
