//! Zones endpoint.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::Response;
use axum::Extension;
use tracing::{error, info};

use sylva_lib::cors::ZONES_HEADERS;
use sylva_lib::{zone_overview, ApiEnvelope, ZonesData};

use crate::middleware::RequestId;
use crate::response::with_headers;
use crate::state::AppState;

/// Handle any method on the zones routes.
///
/// `OPTIONS` answers `204` without touching Supabase. Every other method runs
/// the zones query and returns `200` or a `500` error envelope.
pub async fn get_fire_zones(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    method: Method,
) -> Response {
    if method == Method::OPTIONS {
        return with_headers(StatusCode::NO_CONTENT, &ZONES_HEADERS, Body::empty());
    }

    match zone_overview(state.config()).await {
        Ok(data) => {
            info!(
                request_id = %request_id,
                zones = data.stats.total_zones,
                "zones request completed"
            );
            match serde_json::to_string(&ApiEnvelope::success(data)) {
                Ok(body) => with_headers(StatusCode::OK, &ZONES_HEADERS, body),
                Err(e) => failure(format!("failed to encode response: {}", e)),
            }
        }
        Err(e) => {
            error!(
                request_id = %request_id,
                kind = %e.kind(),
                error = %e,
                "zones request failed"
            );
            failure(e.to_string())
        }
    }
}

fn failure(message: String) -> Response {
    let body = serde_json::to_string(&ApiEnvelope::<ZonesData>::failure(message))
        .unwrap_or_else(|_| r#"{"success":false,"error":"internal error"}"#.to_string());
    with_headers(StatusCode::INTERNAL_SERVER_ERROR, &ZONES_HEADERS, body)
}
