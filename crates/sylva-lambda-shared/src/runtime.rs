//! Lambda runtime state shared across invocations.
//!
//! Configuration is read once at cold start and reused by every invocation in
//! the same execution environment. Nothing else is cached: each invocation
//! fetches fresh rows.

use std::sync::OnceLock;
use std::time::Instant;

use tracing::info;

use sylva_lib::SylvaConfig;

static RUNTIME: OnceLock<LambdaRuntime> = OnceLock::new();

/// Initialized Lambda runtime holding the process configuration.
#[derive(Debug)]
pub struct LambdaRuntime {
    config: SylvaConfig,
}

impl LambdaRuntime {
    /// Access the configuration read at cold start.
    pub fn config(&self) -> &SylvaConfig {
        &self.config
    }
}

/// Initialize the runtime with `config`.
///
/// Later calls return the runtime created by the first one and ignore their
/// argument.
pub fn init_runtime(config: SylvaConfig) -> &'static LambdaRuntime {
    RUNTIME.get_or_init(|| {
        let start = Instant::now();
        let runtime = LambdaRuntime { config };

        info!(
            supabase_configured = runtime.config.supabase.is_configured(),
            supabase_url = runtime.config.supabase.has_url(),
            supabase_key = runtime.config.supabase.has_key(),
            init_ms = start.elapsed().as_millis(),
            "Lambda runtime initialization complete"
        );

        runtime
    })
}

/// Get the initialized runtime.
///
/// # Panics
///
/// Panics if `init_runtime` has not been called.
pub fn get_runtime() -> &'static LambdaRuntime {
    match RUNTIME.get() {
        Some(runtime) => runtime,
        None => panic!("Lambda runtime not initialized. Call init_runtime() first."),
    }
}
