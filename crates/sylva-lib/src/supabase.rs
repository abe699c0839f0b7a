//! Read-only client for the Supabase REST (PostgREST) endpoint.
//!
//! The client issues exactly the two reads the zones endpoint needs, one after
//! the other. It never retries and sets no timeout of its own; cancellation is
//! left to whoever drives the future.

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::SupabaseSettings;
use crate::error::{Error, Result};
use crate::models::{FuelType, Zone};

pub const ZONES_TABLE: &str = "fire_zones";
pub const FUEL_TYPES_TABLE: &str = "fuel_types";

/// Zone columns plus the joined fuel-type projection.
pub const ZONES_SELECT: &str =
    "*,fuel_types!fire_zones_primary_fuel_code_fkey(fuel_name,validation_pod,weight_wind,weight_dfm)";
pub const ZONES_ORDER: &str = "zone_name.asc";
pub const FUEL_TYPES_SELECT: &str = "*";
pub const FUEL_TYPES_ORDER: &str = "fuel_name.asc";

const REST_PATH: &str = "rest/v1";

/// Rows fetched for one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneSnapshot {
    pub zones: Vec<Zone>,
    pub fuel_types: Vec<FuelType>,
}

/// Thin wrapper over `reqwest` that knows the table layout.
#[derive(Clone)]
pub struct SupabaseClient {
    http: Client,
    rest_base: Url,
    service_key: String,
}

impl SupabaseClient {
    /// Build a client from configuration.
    ///
    /// Fails with [`Error::MissingCredentials`] when the URL or key is absent,
    /// before any connection is attempted.
    pub fn from_settings(settings: &SupabaseSettings) -> Result<Self> {
        let (url, key) = match (
            settings.url.as_deref(),
            settings.service_role_key.as_deref(),
        ) {
            (Some(url), Some(key)) => (url, key),
            _ => return Err(Error::MissingCredentials),
        };
        Self::with_http_client(build_http_client()?, url, key)
    }

    /// Build a client around an existing `reqwest::Client`.
    pub fn with_http_client(http: Client, url: &str, service_key: &str) -> Result<Self> {
        let base = format!("{}/{}/", url.trim_end_matches('/'), REST_PATH);
        let rest_base = Url::parse(&base).map_err(|e| Error::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            http,
            rest_base,
            service_key: service_key.to_string(),
        })
    }

    /// Fetch every zone with its fuel-type projection, ordered by name.
    pub async fn fetch_zones(&self) -> Result<Vec<Zone>> {
        self.select(ZONES_TABLE, ZONES_SELECT, ZONES_ORDER).await
    }

    /// Fetch every fuel type, ordered by display name.
    pub async fn fetch_fuel_types(&self) -> Result<Vec<FuelType>> {
        self.select(FUEL_TYPES_TABLE, FUEL_TYPES_SELECT, FUEL_TYPES_ORDER)
            .await
    }

    /// Fetch zones, then fuel types. A failed zone read skips the second query.
    pub async fn fetch_snapshot(&self) -> Result<ZoneSnapshot> {
        let zones = self.fetch_zones().await?;
        let fuel_types = self.fetch_fuel_types().await?;
        Ok(ZoneSnapshot { zones, fuel_types })
    }

    fn table_url(&self, table: &str) -> Result<Url> {
        self.rest_base.join(table).map_err(|e| Error::InvalidUrl {
            url: self.rest_base.to_string(),
            message: e.to_string(),
        })
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &'static str,
        columns: &str,
        order: &str,
    ) -> Result<Vec<T>> {
        let url = self.table_url(table)?;
        debug!(table, order, "querying supabase");

        let response = self
            .http
            .get(url)
            .query(&[("select", columns), ("order", order)])
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = upstream_message(status, &body);
            warn!(table, status = status.as_u16(), error = %message, "supabase query failed");
            return Err(Error::Upstream {
                table,
                status: status.as_u16(),
                message,
            });
        }

        // PostgREST answers `null` for some empty selects.
        let rows: Option<Vec<T>> = response.json().await?;
        let rows = rows.unwrap_or_default();
        debug!(table, rows = rows.len(), "supabase query complete");
        Ok(rows)
    }
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("rest_base", &self.rest_base.as_str())
            .finish_non_exhaustive()
    }
}

fn build_http_client() -> Result<Client> {
    Client::builder()
        .user_agent(user_agent())
        .build()
        .map_err(Error::from)
}

fn user_agent() -> String {
    format!("sylva-lib/{}", env!("CARGO_PKG_VERSION"))
}

/// PostgREST error body.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: Option<String>,
}

/// Extract the store's message, falling back to the raw body or status text.
fn upstream_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<PostgrestError>(body)
        .ok()
        .and_then(|e| e.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            } else {
                trimmed.to_string()
            }
        })
}
