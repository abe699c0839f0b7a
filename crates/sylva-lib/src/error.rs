use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the SYLVA library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Supabase URL or service key is missing from the configuration.
    #[error("Supabase credentials not configured")]
    MissingCredentials,

    /// The data store answered a read with an error payload.
    ///
    /// `message` is the store's own message, passed through unmodified.
    #[error("{message}")]
    Upstream {
        table: &'static str,
        status: u16,
        message: String,
    },

    /// Raised when the configured Supabase URL cannot be used as a base URL.
    #[error("invalid Supabase URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    /// Raised when the report staging target cannot be resolved.
    #[error("report staging path {path} has no parent directory")]
    InvalidStagingPath { path: PathBuf },

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Wrapper for JSON encoding and decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Coarse error category used for logging and response mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required credential is absent; no network call was attempted.
    Configuration,
    /// The backing store rejected a read.
    Upstream,
    /// Anything else: transport, decoding, filesystem.
    Unexpected,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::Upstream => "upstream",
            ErrorKind::Unexpected => "unexpected",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    /// Classify the error into one of the three reporting categories.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingCredentials | Error::InvalidUrl { .. } => ErrorKind::Configuration,
            Error::Upstream { .. } => ErrorKind::Upstream,
            _ => ErrorKind::Unexpected,
        }
    }
}
