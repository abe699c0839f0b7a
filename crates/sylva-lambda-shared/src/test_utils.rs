//! Test utilities for Lambda handler testing.
//!
//! # Usage
//!
//! ```ignore
//! use sylva_lambda_shared::test_utils::{configured, get_event, mock_request_id};
//!
//! let config = configured("http://127.0.0.1:9999");
//! let payload = get_event("/api/get-fire-zones");
//! let request_id = mock_request_id("zones-1");
//! ```

use http::Method;
use serde_json::{json, Value};

use sylva_lib::SylvaConfig;

/// Service key used by fixture configurations.
pub const TEST_SERVICE_KEY: &str = "test-service-role-key";

/// Configuration pointing Supabase at `url` with [`TEST_SERVICE_KEY`].
pub fn configured(url: &str) -> SylvaConfig {
    SylvaConfig::default().with_supabase(url, TEST_SERVICE_KEY)
}

/// Configuration with no Supabase credentials at all.
pub fn unconfigured() -> SylvaConfig {
    SylvaConfig::default()
}

/// REST API proxy event for `method` on `path`.
pub fn proxy_event(method: Method, path: &str) -> Value {
    json!({
        "httpMethod": method.as_str(),
        "path": path,
        "headers": {"origin": "https://sylva.netlify.app"},
        "requestContext": {"requestId": "fixture-request"}
    })
}

pub fn get_event(path: &str) -> Value {
    proxy_event(Method::GET, path)
}

pub fn options_event(path: &str) -> Value {
    proxy_event(Method::OPTIONS, path)
}

/// Request id for tests that call a handler's inner function directly.
pub fn mock_request_id(suffix: &str) -> String {
    format!("test-request-{}", suffix)
}
