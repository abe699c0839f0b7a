//! Application state for the HTTP service.

use std::sync::Arc;

use sylva_lib::SylvaConfig;

/// Shared application state for all axum handlers.
///
/// Cheap to clone. Holds only configuration; rows are fetched per request.
#[derive(Clone)]
pub struct AppState {
    config: Arc<SylvaConfig>,
}

impl AppState {
    pub fn new(config: SylvaConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::new(SylvaConfig::from_env())
    }

    pub fn config(&self) -> &SylvaConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("supabase_configured", &self.config.supabase.is_configured())
            .finish()
    }
}
