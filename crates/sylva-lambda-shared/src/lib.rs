//! Shared infrastructure for SYLVA AWS Lambda functions.
//!
//! This crate provides common functionality used across all Lambda handlers:
//!
//! - [`LambdaRuntime`]: Configuration loaded once at cold start
//! - [`init_tracing`] / [`LambdaTracing`]: JSON tracing for CloudWatch Logs
//! - [`ProxyRequest`] / [`ProxyResponse`]: API Gateway proxy event shapes
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides configuration fixtures and event
//! builders for Lambda handler testing. Enable the `test-utils` feature to
//! access it from dependent crates.

mod proxy;
mod runtime;
mod tracing_init;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use proxy::{ProxyRequest, ProxyResponse};
pub use runtime::{get_runtime, init_runtime, LambdaRuntime};
pub use tracing_init::{init_tracing, init_tracing_with, LambdaTracing};
