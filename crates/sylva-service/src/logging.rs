//! Structured logging for the HTTP service.
//!
//! # Environment Variables
//!
//! - `LOG_FORMAT`: `json` (default) or `text`
//! - `RUST_LOG`: log level filter (default: `info`)
//! - `SERVICE_NAME`: service name recorded at start-up (optional)

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON structured logging, for production.
    #[default]
    Json,
    /// Human-readable text logging, for development.
    Text,
}

impl LogFormat {
    /// Parse a format name. `text` and `pretty` select [`LogFormat::Text`];
    /// anything else is JSON.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => LogFormat::Text,
            _ => LogFormat::Json,
        }
    }
}

/// Configuration for the logging system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Filter used when `RUST_LOG` is unset, e.g. `info` or `sylva_lib=debug`.
    pub level: String,
    pub service: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Json,
            level: "info".to_string(),
            service: None,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            format: lookup("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or(defaults.format),
            level: lookup("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.level),
            service: lookup("SERVICE_NAME").filter(|v| !v.trim().is_empty()),
        }
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Configured service name, or this crate's name.
    pub fn service_name(&self) -> &str {
        self.service.as_deref().unwrap_or(env!("CARGO_PKG_NAME"))
    }
}

/// Install the global tracing subscriber.
///
/// A second call is a no-op.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    let _ = match config.format {
        LogFormat::Text => registry.with(fmt::layer().pretty()).try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("TEXT"), LogFormat::Text);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Text);
        assert_eq!(LogFormat::parse("unknown"), LogFormat::Json);
    }

    #[test]
    fn config_from_lookup() {
        let config = LoggingConfig::from_lookup(|name| match name {
            "LOG_FORMAT" => Some("text".to_string()),
            "RUST_LOG" => Some("debug".to_string()),
            "SERVICE_NAME" => Some("sylva-eu".to_string()),
            _ => None,
        });
        assert_eq!(config.format, LogFormat::Text);
        assert_eq!(config.level, "debug");
        assert_eq!(config.service_name(), "sylva-eu");
    }

    #[test]
    fn service_name_defaults_to_crate() {
        assert_eq!(LoggingConfig::default().service_name(), "sylva-service");
        assert_eq!(
            LoggingConfig::default().with_service("edge").service_name(),
            "edge"
        );
    }

    #[test]
    fn config_defaults_when_unset() {
        assert_eq!(LoggingConfig::from_lookup(|_| None), LoggingConfig::default());
    }
}
