//! Fixed response header sets.
//!
//! Both endpoints allow any origin. The zones endpoint also answers browser
//! pre-flight requests and lets shared caches keep responses for five minutes.

pub const ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");
pub const CONTENT_TYPE_JSON: (&str, &str) = ("Content-Type", "application/json");
pub const ALLOW_HEADERS: (&str, &str) = ("Access-Control-Allow-Headers", "Content-Type");
pub const ALLOW_METHODS: (&str, &str) = ("Access-Control-Allow-Methods", "GET, OPTIONS");
pub const CACHE_CONTROL: (&str, &str) = ("Cache-Control", "public, max-age=300");

/// Headers attached to every zones response, pre-flight included.
pub const ZONES_HEADERS: [(&str, &str); 5] = [
    ALLOW_ORIGIN,
    ALLOW_HEADERS,
    ALLOW_METHODS,
    CONTENT_TYPE_JSON,
    CACHE_CONTROL,
];

/// Headers attached to every health response.
pub const HEALTH_HEADERS: [(&str, &str); 2] = [ALLOW_ORIGIN, CONTENT_TYPE_JSON];
