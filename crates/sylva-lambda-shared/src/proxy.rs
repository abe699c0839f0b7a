//! API Gateway proxy event shapes.
//!
//! Both REST (`httpMethod`) and HTTP API (`requestContext.http.method`)
//! payloads are accepted; only the method, path and request id are read.

use std::collections::BTreeMap;

use http::{Method, StatusCode};
use serde::{Deserialize, Serialize};

/// Incoming proxy event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_context: Option<RequestContext>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpContext>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpContext {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

impl ProxyRequest {
    /// Build a request for the given method, as a REST proxy event.
    pub fn with_method(method: Method) -> Self {
        Self {
            http_method: Some(method.as_str().to_string()),
            ..Self::default()
        }
    }

    /// The HTTP method. Events without one are treated as `GET`.
    pub fn method(&self) -> Method {
        let raw = self.http_method.as_deref().or_else(|| {
            self.request_context
                .as_ref()
                .and_then(|ctx| ctx.http.as_ref())
                .and_then(|http| http.method.as_deref())
        });

        raw.and_then(|m| Method::from_bytes(m.to_ascii_uppercase().as_bytes()).ok())
            .unwrap_or(Method::GET)
    }

    /// Browser pre-flight probe.
    pub fn is_preflight(&self) -> bool {
        self.method() == Method::OPTIONS
    }
}

/// Outgoing proxy response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ProxyResponse {
    /// Create a response with the given status, headers and raw body.
    pub fn new(status: StatusCode, headers: &[(&str, &str)], body: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            headers: headers
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            body: body.into(),
        }
    }

    /// Empty-bodied `204 No Content`.
    pub fn no_content(headers: &[(&str, &str)]) -> Self {
        Self::new(StatusCode::NO_CONTENT, headers, String::new())
    }

    /// Serialize `value` as the body.
    pub fn json<T: Serialize>(
        status: StatusCode,
        headers: &[(&str, &str)],
        value: &T,
    ) -> serde_json::Result<Self> {
        Ok(Self::new(status, headers, serde_json::to_string(value)?))
    }

    /// Serialize `value` as an indented body.
    pub fn pretty_json<T: Serialize>(
        status: StatusCode,
        headers: &[(&str, &str)],
        value: &T,
    ) -> serde_json::Result<Self> {
        Ok(Self::new(status, headers, serde_json::to_string_pretty(value)?))
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_rest_api_method() {
        let request: ProxyRequest =
            serde_json::from_value(json!({"httpMethod": "OPTIONS", "path": "/api/get-fire-zones"}))
                .unwrap();
        assert!(request.is_preflight());
        assert_eq!(request.path.as_deref(), Some("/api/get-fire-zones"));
    }

    #[test]
    fn reads_http_api_method() {
        let request: ProxyRequest = serde_json::from_value(json!({
            "requestContext": {"requestId": "abc", "http": {"method": "options", "path": "/zones"}}
        }))
        .unwrap();
        assert_eq!(request.method(), Method::OPTIONS);
    }

    #[test]
    fn missing_method_defaults_to_get() {
        let request: ProxyRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.method(), Method::GET);
        assert!(!request.is_preflight());
    }

    #[test]
    fn response_serializes_in_proxy_format() {
        let response = ProxyResponse::json(
            StatusCode::OK,
            &[("Content-Type", "application/json")],
            &json!({"ok": true}),
        )
        .unwrap();
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["headers"]["Content-Type"], "application/json");
        assert_eq!(value["body"], "{\"ok\":true}");
    }

    #[test]
    fn no_content_has_empty_body() {
        let response = ProxyResponse::no_content(&[("Access-Control-Allow-Origin", "*")]);
        assert_eq!(response.status_code, 204);
        assert!(response.body.is_empty());
        assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
    }
}
