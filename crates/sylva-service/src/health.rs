//! Health endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use sylva_lib::cors::HEALTH_HEADERS;
use sylva_lib::{ErrorBody, HealthReport};

use crate::response::with_headers;
use crate::state::AppState;

/// Configuration health report. Accepts any method and never contacts Supabase.
pub async fn sylva_health(State(state): State<AppState>) -> Response {
    let report = HealthReport::from_settings(&state.config().supabase);
    match serde_json::to_string_pretty(&report) {
        Ok(body) => with_headers(StatusCode::OK, &HEALTH_HEADERS, body),
        Err(e) => {
            error!(error = %e, "failed to encode health report");
            let body = serde_json::to_string(&ErrorBody::new(e.to_string()))
                .unwrap_or_else(|_| r#"{"error":"internal error"}"#.to_string());
            with_headers(StatusCode::INTERNAL_SERVER_ERROR, &HEALTH_HEADERS, body)
        }
    }
}

/// Liveness probe body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveStatus {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl LiveStatus {
    pub fn alive() -> Self {
        Self {
            status: "ok".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Liveness probe. Does not depend on configuration.
pub async fn health_live() -> impl IntoResponse {
    (StatusCode::OK, Json(LiveStatus::alive()))
}
