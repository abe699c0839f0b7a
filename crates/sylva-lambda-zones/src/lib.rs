//! AWS Lambda function for the `get-fire-zones` endpoint.
//!
//! Answers browser pre-flight probes with `204 No Content`; every other
//! request reads zones and fuel types from Supabase and returns them with the
//! derived statistics. Failures of any kind become a `500` error envelope.

use http::StatusCode;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use sylva_lambda_shared::{get_runtime, init_runtime, init_tracing, ProxyRequest, ProxyResponse};
use sylva_lib::cors::ZONES_HEADERS;
use sylva_lib::{zone_overview, ApiEnvelope, SylvaConfig, ZonesData};

/// Entry point used by the Lambda runtime.
pub async fn run() -> Result<(), Error> {
    init_tracing();

    let _runtime = init_runtime(SylvaConfig::from_env());

    lambda_runtime::run(service_fn(handler)).await
}

/// Lambda handler invoked per request.
pub async fn handler(event: LambdaEvent<Value>) -> Result<ProxyResponse, Error> {
    let request_id = event.context.request_id.clone();

    let request: ProxyRequest = match serde_json::from_value(event.payload) {
        Ok(req) => req,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "failed to parse request");
            return Ok(error_response(format!("Invalid request: {}", e)));
        }
    };

    Ok(respond(get_runtime().config(), &request, &request_id).await)
}

/// Core handler logic separated for reuse in tests.
pub async fn respond(config: &SylvaConfig, request: &ProxyRequest, request_id: &str) -> ProxyResponse {
    if request.is_preflight() {
        info!(request_id = %request_id, "answering pre-flight request");
        return ProxyResponse::no_content(&ZONES_HEADERS);
    }

    info!(
        request_id = %request_id,
        method = %request.method(),
        path = ?request.path,
        "handling zones request"
    );

    match zone_overview(config).await {
        Ok(data) => {
            info!(
                request_id = %request_id,
                zones = data.stats.total_zones,
                fuel_types = data.stats.fuel_types_count,
                "zones request completed"
            );
            success_response(data)
        }
        Err(e) => {
            error!(
                request_id = %request_id,
                kind = %e.kind(),
                error = %e,
                "zones request failed"
            );
            error_response(e.to_string())
        }
    }
}

fn success_response(data: ZonesData) -> ProxyResponse {
    match ProxyResponse::json(StatusCode::OK, &ZONES_HEADERS, &ApiEnvelope::success(data)) {
        Ok(response) => response,
        Err(e) => error_response(format!("failed to encode response: {}", e)),
    }
}

fn error_response(message: String) -> ProxyResponse {
    let envelope = ApiEnvelope::<ZonesData>::failure(message);
    // The error envelope only holds strings and a bool.
    let body = serde_json::to_string(&envelope).unwrap_or_else(|_| {
        r#"{"success":false,"error":"internal error"}"#.to_string()
    });
    ProxyResponse::new(StatusCode::INTERNAL_SERVER_ERROR, &ZONES_HEADERS, body)
}
