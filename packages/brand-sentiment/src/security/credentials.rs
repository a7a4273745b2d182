//! Search backend credentials.
//!
//! The token is held in a `secrecy::SecretString` so it never shows up in
//! logs or debug output.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

use crate::error::ConfigurationError;

/// Credentials for the post search backend.
///
/// Passed explicitly to the fetcher at batch start; nothing is read from
/// process-wide state.
#[derive(Clone)]
pub struct SearchCredentials {
    /// API token (secret)
    pub api_token: SecretString,

    /// API base URL override
    pub base_url: Option<String>,
}

impl SearchCredentials {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: SecretString::from(api_token.into()),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// The raw token, for building the backend client.
    pub fn token(&self) -> &str {
        self.api_token.expose_secret()
    }

    /// Reject blank tokens before any request is made.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.token().trim().is_empty() {
            return Err(ConfigurationError::MissingCredential("search API token"));
        }
        if let Some(url) = &self.base_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigurationError::Invalid {
                    field: "base_url",
                    reason: format!("'{}' is not an http(s) URL", url),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for SearchCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchCredentials")
            .field("api_token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}
