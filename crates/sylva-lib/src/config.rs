//! Process configuration.
//!
//! [`SylvaConfig`] is built once at start-up, either from the process
//! environment ([`SylvaConfig::from_env`]) or from an arbitrary lookup function
//! ([`SylvaConfig::from_lookup`]) so tests never have to touch global
//! environment state. Business logic receives it by reference.
//!
//! # Environment Variables
//!
//! - `SUPABASE_URL`: base URL of the Supabase project
//! - `SUPABASE_SERVICE_ROLE_KEY`: service role key used for reads
//! - `OPENWEATHER_API_KEY`: weather provider key
//! - `SENTINEL_CLIENT_ID` / `SENTINEL_CLIENT_SECRET`: satellite imagery credentials

use std::fmt;

use crate::stats::StatsRules;

pub const SUPABASE_URL_ENV: &str = "SUPABASE_URL";
pub const SUPABASE_KEY_ENV: &str = "SUPABASE_SERVICE_ROLE_KEY";
pub const OPENWEATHER_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const SENTINEL_CLIENT_ID_ENV: &str = "SENTINEL_CLIENT_ID";
pub const SENTINEL_CLIENT_SECRET_ENV: &str = "SENTINEL_CLIENT_SECRET";

const OPENWEATHER_KEY_PLACEHOLDER: &str = "YOUR_API_KEY";
const SENTINEL_CLIENT_ID_PLACEHOLDER: &str = "YOUR_CLIENT_ID";
const SENTINEL_CLIENT_SECRET_PLACEHOLDER: &str = "YOUR_CLIENT_SECRET";
const OPENWEATHER_UNITS: &str = "metric";

/// Top-level configuration shared by every entry point.
#[derive(Debug, Clone, Default)]
pub struct SylvaConfig {
    pub supabase: SupabaseSettings,
    pub api_keys: ApiKeys,
    pub stats: StatsRules,
}

impl SylvaConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from a variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Self {
            supabase: SupabaseSettings {
                url: get(SUPABASE_URL_ENV),
                service_role_key: get(SUPABASE_KEY_ENV),
            },
            api_keys: ApiKeys {
                openweather: OpenWeatherKeys {
                    key: get(OPENWEATHER_KEY_ENV)
                        .unwrap_or_else(|| OPENWEATHER_KEY_PLACEHOLDER.to_string()),
                    units: OPENWEATHER_UNITS.to_string(),
                },
                sentinel: SentinelKeys {
                    client_id: get(SENTINEL_CLIENT_ID_ENV)
                        .unwrap_or_else(|| SENTINEL_CLIENT_ID_PLACEHOLDER.to_string()),
                    client_secret: get(SENTINEL_CLIENT_SECRET_ENV)
                        .unwrap_or_else(|| SENTINEL_CLIENT_SECRET_PLACEHOLDER.to_string()),
                },
            },
            stats: StatsRules::default(),
        }
    }

    /// Replace the Supabase settings, keeping everything else.
    pub fn with_supabase(mut self, url: impl Into<String>, key: impl Into<String>) -> Self {
        self.supabase = SupabaseSettings {
            url: Some(url.into()),
            service_role_key: Some(key.into()),
        };
        self
    }
}

/// Connection settings for the Supabase REST endpoint.
#[derive(Clone, Default)]
pub struct SupabaseSettings {
    pub url: Option<String>,
    pub service_role_key: Option<String>,
}

impl SupabaseSettings {
    pub fn has_url(&self) -> bool {
        self.url.is_some()
    }

    pub fn has_key(&self) -> bool {
        self.service_role_key.is_some()
    }

    /// Both the URL and the key are present.
    pub fn is_configured(&self) -> bool {
        self.has_url() && self.has_key()
    }
}

impl fmt::Debug for SupabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseSettings")
            .field("url", &self.url)
            .field("service_role_key", &redacted(self.service_role_key.as_deref()))
            .finish()
    }
}

/// Third-party provider credentials, keyed by provider.
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    pub openweather: OpenWeatherKeys,
    pub sentinel: SentinelKeys,
}

#[derive(Clone)]
pub struct OpenWeatherKeys {
    pub key: String,
    pub units: String,
}

impl OpenWeatherKeys {
    /// True when the key is still the shipped placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.key == OPENWEATHER_KEY_PLACEHOLDER
    }
}

impl Default for OpenWeatherKeys {
    fn default() -> Self {
        Self {
            key: OPENWEATHER_KEY_PLACEHOLDER.to_string(),
            units: OPENWEATHER_UNITS.to_string(),
        }
    }
}

impl fmt::Debug for OpenWeatherKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherKeys")
            .field("key", &redacted(Some(&self.key)))
            .field("units", &self.units)
            .finish()
    }
}

#[derive(Clone)]
pub struct SentinelKeys {
    pub client_id: String,
    pub client_secret: String,
}

impl SentinelKeys {
    /// True when either credential is still the shipped placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.client_id == SENTINEL_CLIENT_ID_PLACEHOLDER
            || self.client_secret == SENTINEL_CLIENT_SECRET_PLACEHOLDER
    }
}

impl Default for SentinelKeys {
    fn default() -> Self {
        Self {
            client_id: SENTINEL_CLIENT_ID_PLACEHOLDER.to_string(),
            client_secret: SENTINEL_CLIENT_SECRET_PLACEHOLDER.to_string(),
        }
    }
}

impl fmt::Debug for SentinelKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentinelKeys")
            .field("client_id", &self.client_id)
            .field("client_secret", &redacted(Some(&self.client_secret)))
            .finish()
    }
}

fn redacted(value: Option<&str>) -> &'static str {
    match value {
        Some(_) => "<redacted>",
        None => "<unset>",
    }
}
