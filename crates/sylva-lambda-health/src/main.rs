//! AWS Lambda function for the `sylva-health` endpoint.
//!
//! Reports which Supabase settings are present. It never contacts Supabase,
//! so a `200` here says nothing about connectivity.

use http::StatusCode;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use sylva_lambda_shared::{get_runtime, init_runtime, init_tracing, ProxyResponse};
use sylva_lib::cors::HEALTH_HEADERS;
use sylva_lib::{ErrorBody, HealthReport, SupabaseSettings, SylvaConfig};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let _runtime = init_runtime(SylvaConfig::from_env());

    lambda_runtime::run(service_fn(handler)).await
}

async fn handler(event: LambdaEvent<Value>) -> Result<ProxyResponse, Error> {
    let request_id = event.context.request_id.clone();
    Ok(health_response(&get_runtime().config().supabase, &request_id))
}

/// Build the health response for the given settings. Any method is accepted.
fn health_response(settings: &SupabaseSettings, request_id: &str) -> ProxyResponse {
    let report = HealthReport::from_settings(settings);

    info!(
        request_id = %request_id,
        configured = report.supabase.configured,
        "health check"
    );

    match ProxyResponse::pretty_json(StatusCode::OK, &HEALTH_HEADERS, &report) {
        Ok(response) => response,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "failed to encode health report");
            let body = serde_json::to_string(&ErrorBody::new(e.to_string()))
                .unwrap_or_else(|_| r#"{"error":"internal error"}"#.to_string());
            ProxyResponse::new(StatusCode::INTERNAL_SERVER_ERROR, &HEALTH_HEADERS, body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sylva_lambda_shared::test_utils::{configured, mock_request_id, unconfigured};

    fn body(response: &ProxyResponse) -> Value {
        serde_json::from_str(&response.body).unwrap()
    }

    #[test]
    fn configured_settings_report_true() {
        let config = configured("https://project.supabase.co");
        let response = health_response(&config.supabase, &mock_request_id("ok"));

        assert_eq!(response.status_code, 200);
        assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert!(response.header("Cache-Control").is_none());

        let json = body(&response);
        assert_eq!(json["service"], "SYLVA Operational Intelligence");
        assert_eq!(json["version"], "2.5.0");
        assert_eq!(json["supabase"]["configured"], true);
        assert_eq!(json["supabase"]["url"], true);
        assert_eq!(json["supabase"]["key"], true);
        assert_eq!(json["endpoints"]["get-fire-zones"], "/api/get-fire-zones");
        assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn missing_settings_still_return_200() {
        let response = health_response(&unconfigured().supabase, &mock_request_id("none"));
        assert_eq!(response.status_code, 200);
        assert_eq!(body(&response)["supabase"]["configured"], false);
    }

    #[test]
    fn body_is_indented_and_hides_values() {
        let config = configured("https://hidden-project.supabase.co");
        let response = health_response(&config.supabase, &mock_request_id("pretty"));
        assert!(response.body.contains("\n  \"service\""));
        assert!(!response.body.contains("hidden-project"));
        assert!(!response.body.contains(sylva_lambda_shared::test_utils::TEST_SERVICE_KEY));
    }

    #[tokio::test]
    async fn handler_uses_runtime_configuration() {
        let _ = init_runtime(unconfigured());
        let event = LambdaEvent::new(serde_json::json!({}), lambda_runtime::Context::default());
        let response = handler(event).await.unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(body(&response)["supabase"]["key"], false);
    }
}
