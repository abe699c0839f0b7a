//! SYLVA HTTP service binary.
//!
//! # Configuration
//!
//! - `SUPABASE_URL`, `SUPABASE_SERVICE_ROLE_KEY`: data store credentials
//! - `SERVICE_PORT`: HTTP port (default: 8080)
//! - `LOG_FORMAT`, `RUST_LOG`, `SERVICE_NAME`: see [`sylva_service::logging`]

use std::env;
use std::net::SocketAddr;

use tracing::info;

use sylva_service::{init_logging, router, AppState, LoggingConfig};

const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging = LoggingConfig::from_env();
    init_logging(&logging);

    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let state = AppState::from_env();
    info!(
        service = logging.service_name(),
        port,
        supabase_configured = state.config().supabase.is_configured(),
        "starting sylva service"
    );

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
