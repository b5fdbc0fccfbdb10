//! Error types for fisl-crawler
//!
//! Two families of errors live here:
//! - [`Error`], the crate-wide error for configuration, serialization and I/O
//!   problems that end a run
//! - [`FetchError`], the per-page failure returned by a fetcher, which the
//!   crawler logs and skips

use thiserror::Error;

/// Result type alias for fisl-crawler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for fisl-crawler
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "base_url")
        key: Option<String>,
    },

    /// Output format name is not one of the supported formats
    #[error("unsupported output format '{0}' (available formats: csv, json)")]
    UnsupportedFormat(String),

    /// CSV output needs at least one record to write
    #[error("no records to write: CSV output requires at least one record")]
    EmptyTable,

    /// Extraction pattern failed to compile or lacks a required capture group
    #[error("invalid extraction pattern: {0}")]
    InvalidPattern(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be built
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Shorthand for a [`Error::Config`] tied to a configuration key
    pub fn config(key: &str, message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            key: Some(key.to_string()),
        }
    }
}

/// Why a single proposal page could not be retrieved
///
/// Fetch failures never abort a crawl. The crawler logs them and moves on to
/// the next identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// HTTP 401
    #[error("not authorized")]
    Unauthorized,

    /// HTTP 404
    #[error("page not found")]
    NotFound,

    /// HTTP 503
    #[error("service unavailable")]
    Unavailable,

    /// Any other non-success HTTP status
    #[error("unknown error (HTTP {status})")]
    Unknown {
        /// Status code returned by the server
        status: u16,
    },

    /// Connection, DNS, protocol or body-read failure
    #[error("network error: {0}")]
    Network(String),
}

impl FetchError {
    /// Map a non-success HTTP status to its failure category
    ///
    /// Returns `None` for 2xx statuses, which are not failures.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 => Some(Self::Unauthorized),
            404 => Some(Self::NotFound),
            503 => Some(Self::Unavailable),
            status => Some(Self::Unknown { status }),
        }
    }

    /// Stable, machine-readable name of the failure category
    pub fn category(&self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::NotFound => "not-found",
            Self::Unavailable => "unavailable",
            Self::Unknown { .. } => "unknown",
            Self::Network(_) => "network-error",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => {
                Self::from_status(status.as_u16()).unwrap_or(Self::Network(err.to_string()))
            }
            None => Self::Network(err.to_string()),
        }
    }
}
