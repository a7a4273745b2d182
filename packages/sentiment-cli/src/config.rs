use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use brand_sentiment::{BatchConfig, ConfigurationError, SearchCredentials};
use dotenvy::dotenv;

/// Run configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: SearchCredentials,
    pub batch: BatchConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let api_token = env::var("APIFY_API_TOKEN")
            .map_err(|_| ConfigurationError::MissingCredential("APIFY_API_TOKEN"))?;
        let mut credentials = SearchCredentials::new(api_token);
        if let Ok(base_url) = env::var("APIFY_BASE_URL") {
            credentials = credentials.with_base_url(base_url);
        }

        let defaults = BatchConfig::default();
        let batch = BatchConfig::new()
            .with_limit(
                parse_var("SENTIMENT_FETCH_LIMIT")?.unwrap_or(defaults.limit),
            )
            .with_concurrency(
                parse_var("SENTIMENT_CONCURRENCY")?.unwrap_or(defaults.concurrency),
            )
            .with_fetch_timeout(
                parse_var("SENTIMENT_FETCH_TIMEOUT_SECS")?
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.fetch_timeout),
            );

        Ok(Self { credentials, batch })
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        limit: Option<usize>,
        concurrency: Option<usize>,
        timeout_secs: Option<u64>,
    ) -> Self {
        if let Some(limit) = limit {
            self.batch.limit = limit;
        }
        if let Some(concurrency) = concurrency {
            self.batch.concurrency = concurrency;
        }
        if let Some(secs) = timeout_secs {
            self.batch.fetch_timeout = Duration::from_secs(secs);
        }
        self
    }
}

fn parse_var<T>(name: &'static str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} must be a valid number", name)),
        Err(_) => Ok(None),
    }
}
