use thiserror::Error;

/// Errors returned by the Apify REST API client.
#[derive(Debug, Error)]
pub enum ApifyError {
    /// Transport-level failure (connect, TLS, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the API.
    #[error("Apify API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The actor run finished in a terminal non-success state.
    #[error("actor run ended with status {0}")]
    RunFailed(String),
}

impl ApifyError {
    /// HTTP status code, when the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::RunFailed(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}

pub type Result<T> = std::result::Result<T, ApifyError>;
