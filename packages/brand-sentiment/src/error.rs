//! Typed errors for the sentiment pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`). The taxonomy separates
//! per-item failures, which the batch contains and logs, from configuration
//! failures, which abort a batch before any entity is processed.

use std::time::Duration;

use thiserror::Error;

/// Fetch failure for one entity. Never fatal to a batch.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Credentials rejected by the search backend
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Backend throttled the request
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Non-success response from the backend
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Backend job finished without results
    #[error("search run failed: {0}")]
    RunFailed(String),

    /// Network-level failure
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Fetch did not finish within the configured budget
    #[error("fetch for '{query}' timed out after {timeout:?}")]
    Timeout { query: String, timeout: Duration },
}

impl From<apify_client::ApifyError> for TransportError {
    fn from(err: apify_client::ApifyError) -> Self {
        use apify_client::ApifyError;

        if err.is_unauthorized() {
            return Self::Unauthorized(err.to_string());
        }
        if err.is_rate_limited() {
            return Self::RateLimited(err.to_string());
        }
        match err {
            ApifyError::Api { status, message } => Self::Api { status, message },
            ApifyError::RunFailed(status) => Self::RunFailed(status),
            ApifyError::Http(e) => Self::Http(Box::new(e)),
        }
    }
}

/// Scoring failure for one post. The post is dropped, the entity continues.
#[derive(Debug, Error)]
pub enum ClassificationError {
    /// The scorer itself failed
    #[error("scorer failed: {0}")]
    Scorer(String),

    /// Scorer returned NaN or infinity
    #[error("scorer returned a non-finite score")]
    NonFinite,

    /// Scorer returned a value outside [-1.0, 1.0]
    #[error("score {0} outside [-1.0, 1.0]")]
    OutOfRange(f64),
}

/// Missing or invalid configuration. Fatal: aborts the batch up front.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Required credential was absent or empty
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    /// A setting failed validation
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors from reading the entity table or writing the result table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Entity column not present in the header row
    #[error("column '{0}' not found in input table")]
    MissingColumn(String),

    /// Result rows do not line up with the input rows
    #[error("expected {expected} result rows, got {actual}")]
    RowMismatch { expected: usize, actual: usize },
}

/// Result type alias for fetch operations.
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Result type alias for classification.
pub type ClassificationResult<T> = std::result::Result<T, ClassificationError>;

/// Result type alias for table I/O.
pub type TableResult<T> = std::result::Result<T, TableError>;
