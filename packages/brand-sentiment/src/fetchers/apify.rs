//! X/Twitter fetcher: wraps Apify search and outputs uniform RawPost records.

use std::sync::Arc;

use apify_client::{ApifyClient, XPost};
use async_trait::async_trait;
use tracing::info;

use crate::error::{ConfigurationError, TransportResult};
use crate::security::SearchCredentials;
use crate::traits::fetcher::PostFetcher;
use crate::types::RawPost;

/// Upper bound on posts requested per entity.
pub const MAX_POSTS_PER_QUERY: usize = 200;

pub struct ApifyFetcher {
    apify: Arc<ApifyClient>,
}

impl ApifyFetcher {
    pub fn new(apify: Arc<ApifyClient>) -> Self {
        Self { apify }
    }

    /// Build a client from credentials, failing fast on a blank token.
    pub fn from_credentials(credentials: &SearchCredentials) -> Result<Self, ConfigurationError> {
        credentials.validate()?;

        let mut client = ApifyClient::new(credentials.token().to_string());
        if let Some(base_url) = &credentials.base_url {
            client = client.with_base_url(base_url.clone());
        }
        Ok(Self::new(Arc::new(client)))
    }
}

/// Convert scraped posts to raw posts, skipping those without any text.
pub(crate) fn to_raw_posts(posts: &[XPost]) -> Vec<RawPost> {
    posts
        .iter()
        .filter_map(|p| {
            let text = p.content().filter(|c| !c.trim().is_empty())?;
            Some(RawPost::new(text).with_reposts(p.retweets()))
        })
        .collect()
}

#[async_trait]
impl PostFetcher for ApifyFetcher {
    async fn fetch(&self, query: &str, limit: usize) -> TransportResult<Vec<RawPost>> {
        let limit = limit.min(MAX_POSTS_PER_QUERY) as u32;

        info!(query = %query, limit = limit, "Searching X/Twitter posts via Apify");

        let tweets = self.apify.search_x_posts(query, limit).await?;
        let posts = to_raw_posts(&tweets);

        info!(
            query = %query,
            total_scraped = tweets.len(),
            posts_kept = posts.len(),
            "X/Twitter search complete"
        );

        Ok(posts)
    }

    fn name(&self) -> &str {
        "apify-x"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tweets(json: &str) -> Vec<XPost> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_to_raw_posts_maps_text_and_retweets() {
        let scraped = tweets(
            r#"[
                {"fullText": "love the new acme phone", "retweetCount": 12},
                {"text": "acme support is slow"},
                {"text": "   "},
                {"retweetCount": 3}
            ]"#,
        );

        let posts = to_raw_posts(&scraped);
        assert_eq!(
            posts,
            vec![
                RawPost::new("love the new acme phone").with_reposts(12),
                RawPost::new("acme support is slow"),
            ]
        );
    }

    #[test]
    fn test_blank_token_is_configuration_error() {
        let result = ApifyFetcher::from_credentials(&SearchCredentials::new(""));
        assert!(matches!(
            result,
            Err(ConfigurationError::MissingCredential(_))
        ));
    }

    #[test]
    fn test_valid_credentials_build_fetcher() {
        let fetcher = ApifyFetcher::from_credentials(
            &SearchCredentials::new("apify_api_token").with_base_url("http://127.0.0.1:9"),
        )
        .unwrap();
        assert_eq!(fetcher.name(), "apify-x");
    }
}
