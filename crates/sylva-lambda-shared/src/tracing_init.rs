//! JSON tracing for the SYLVA Lambda functions.
//!
//! Events are flattened one JSON object per line so CloudWatch Logs Insights
//! can query fields directly.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directives (takes precedence)
//! - `AWS_LAMBDA_LOG_LEVEL`: level from the function's logging controls
//! - `AWS_LAMBDA_FUNCTION_NAME` / `AWS_LAMBDA_FUNCTION_VERSION`: recorded once at start-up

use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Settings for the Lambda tracing subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaTracing {
    /// Filter directives, e.g. `info` or `sylva_lib=debug,info`.
    pub filter: String,
    pub function_name: Option<String>,
    pub function_version: Option<String>,
}

impl Default for LambdaTracing {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            function_name: None,
            function_version: None,
        }
    }
}

impl LambdaTracing {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let filter = present("RUST_LOG")
            .or_else(|| present("AWS_LAMBDA_LOG_LEVEL").map(|level| lambda_level(&level)))
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        Self {
            filter,
            function_name: present("AWS_LAMBDA_FUNCTION_NAME"),
            function_version: present("AWS_LAMBDA_FUNCTION_VERSION"),
        }
    }

    /// Parsed filter. Invalid directives fall back to `info`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }

    /// Whether `filter` parses as given.
    pub fn filter_is_valid(&self) -> bool {
        EnvFilter::try_new(&self.filter).is_ok()
    }
}

/// Map a Lambda logging-controls level onto a tracing directive.
/// `FATAL` has no tracing counterpart and maps to `error`.
fn lambda_level(level: &str) -> String {
    match level.trim().to_ascii_lowercase().as_str() {
        "fatal" => "error".to_string(),
        other => other.to_string(),
    }
}

/// Initialize tracing from the process environment.
///
/// Call once at the start of the Lambda `main`, before `lambda_runtime::run()`.
///
/// # Example
///
/// ```no_run
/// use sylva_lambda_shared::init_tracing;
///
/// #[tokio::main]
/// async fn main() -> Result<(), lambda_runtime::Error> {
///     init_tracing();
///     Ok(())
/// }
/// ```
pub fn init_tracing() {
    init_tracing_with(&LambdaTracing::from_env());
}

/// Install the JSON subscriber described by `settings`.
///
/// A second call is a no-op.
pub fn init_tracing_with(settings: &LambdaTracing) {
    // CloudWatch already stamps thread and invocation metadata.
    let json = fmt::layer()
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_span_list(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let installed = tracing_subscriber::registry()
        .with(settings.env_filter())
        .with(json)
        .try_init()
        .is_ok();

    if installed {
        info!(
            function = settings.function_name.as_deref().unwrap_or("local"),
            version = settings.function_version.as_deref().unwrap_or("$LATEST"),
            filter = %settings.filter,
            filter_valid = settings.filter_is_valid(),
            "tracing initialized"
        );
    }
}
