//! SYLVA HTTP service.
//!
//! Serves the same endpoints as the Lambda functions from a long-running axum
//! process, for local development and container deployments.
//!
//! # Endpoints
//!
//! - `/zones`, `/api/get-fire-zones`: zones, fuel types and statistics (any method; `OPTIONS` is a pre-flight)
//! - `/health`, `/api/sylva-health`: configuration health report
//! - `GET /health/live`: liveness probe
//!
//! Handlers stay thin: all behaviour lives in `sylva-lib`.

pub mod health;
pub mod logging;
pub mod middleware;
mod response;
mod state;
pub mod zones;

use axum::routing::{any, get};
use axum::Router;
use tower_http::trace::TraceLayer;

pub use health::{health_live, sylva_health, LiveStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use middleware::{extract_or_generate_request_id, RequestId, REQUEST_ID_HEADER};
pub use state::AppState;
pub use zones::get_fire_zones;

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/zones", any(get_fire_zones))
        .route("/api/get-fire-zones", any(get_fire_zones))
        .route("/health", any(sylva_health))
        .route("/api/sylva-health", any(sylva_health))
        .route("/health/live", get(health_live))
        .layer(axum::middleware::from_fn(middleware::request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
