//! Testing utilities including mock collaborators.
//!
//! These are useful for driving the pipeline without network calls or a
//! real scoring model.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::error::{ClassificationError, ClassificationResult, TransportError, TransportResult};
use crate::traits::{fetcher::PostFetcher, scorer::PolarityScorer};
use crate::types::RawPost;

/// Mock fetcher with canned posts per query.
///
/// Unknown queries return no posts. Queries marked as failing return a
/// `TransportError`; queries with a delay sleep before answering.
#[derive(Default, Clone)]
pub struct MockFetcher {
    posts: Arc<RwLock<HashMap<String, Vec<RawPost>>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    delays: Arc<RwLock<HashMap<String, Duration>>>,
    calls: Arc<RwLock<Vec<(String, usize)>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts returned for `query`, in this order.
    pub fn with_posts(self, query: impl Into<String>, posts: Vec<RawPost>) -> Self {
        self.posts.write().unwrap().insert(query.into(), posts);
        self
    }

    /// Make `query` fail with a transport error.
    pub fn failing_on(self, query: impl Into<String>) -> Self {
        self.failing.write().unwrap().insert(query.into());
        self
    }

    /// Make `query` take `delay` before answering.
    pub fn with_delay(self, query: impl Into<String>, delay: Duration) -> Self {
        self.delays.write().unwrap().insert(query.into(), delay);
        self
    }

    /// Recorded `(query, limit)` calls, in call order.
    pub fn calls(&self) -> Vec<(String, usize)> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl PostFetcher for MockFetcher {
    async fn fetch(&self, query: &str, limit: usize) -> TransportResult<Vec<RawPost>> {
        self.calls
            .write()
            .unwrap()
            .push((query.to_string(), limit));

        let delay = self.delays.read().unwrap().get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.read().unwrap().contains(query) {
            return Err(TransportError::Api {
                status: 503,
                message: format!("mock failure for '{}'", query),
            });
        }

        let posts: Vec<RawPost> = self
            .posts
            .read()
            .unwrap()
            .get(query)
            .map(|p| p.iter().take(limit).cloned().collect())
            .unwrap_or_default();
        Ok(posts)
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Mock scorer with canned scores keyed by normalized text.
///
/// Texts without a canned score get the default score (0.0 unless changed).
#[derive(Default, Clone)]
pub struct MockScorer {
    scores: Arc<RwLock<HashMap<String, f64>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    default_score: f64,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score returned for exactly this normalized text.
    pub fn with_score(self, text: impl Into<String>, score: f64) -> Self {
        self.scores.write().unwrap().insert(text.into(), score);
        self
    }

    /// Score returned for texts without a canned score.
    pub fn with_default_score(mut self, score: f64) -> Self {
        self.default_score = score;
        self
    }

    /// Make scoring this normalized text fail.
    pub fn failing_on(self, text: impl Into<String>) -> Self {
        self.failing.write().unwrap().insert(text.into());
        self
    }

    /// Normalized texts seen, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

impl PolarityScorer for MockScorer {
    fn score(&self, text: &str) -> ClassificationResult<f64> {
        self.calls.write().unwrap().push(text.to_string());

        if self.failing.read().unwrap().contains(text) {
            return Err(ClassificationError::Scorer(format!(
                "mock failure for '{}'",
                text
            )));
        }

        Ok(self
            .scores
            .read()
            .unwrap()
            .get(text)
            .copied()
            .unwrap_or(self.default_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_fetcher_respects_limit() {
        let mock = MockFetcher::new().with_posts(
            "acme",
            (0..10).map(|i| RawPost::new(format!("post {}", i))).collect(),
        );

        let posts = mock.fetch("acme", 3).await.unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].text, "post 0");
        assert_eq!(mock.calls(), vec![("acme".to_string(), 3)]);
    }

    #[tokio::test]
    async fn test_mock_fetcher_unknown_and_failing() {
        let mock = MockFetcher::new().failing_on("down");

        assert!(mock.fetch("nobody", 10).await.unwrap().is_empty());
        assert!(mock.fetch("down", 10).await.is_err());
        assert_eq!(mock.call_count(), 2);
    }

    #[test]
    fn test_mock_scorer_default_and_failure() {
        let mock = MockScorer::new()
            .with_score("good", 0.5)
            .with_default_score(-0.1)
            .failing_on("boom");

        assert_eq!(mock.score("good").unwrap(), 0.5);
        assert_eq!(mock.score("whatever").unwrap(), -0.1);
        assert!(mock.score("boom").is_err());
        assert_eq!(mock.calls().len(), 3);
    }
}
