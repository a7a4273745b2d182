//! Batch runner: fetch -> classify -> deduplicate -> aggregate, per entity.

use std::time::Duration;

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::aggregate::aggregate;
use crate::classify::SentimentClassifier;
use crate::dedup::deduplicate;
use crate::error::{ConfigurationError, TransportError};
use crate::traits::{fetcher::PostFetcher, scorer::PolarityScorer};
use crate::types::{BatchResult, EntitySummary, RawPost};

/// Configuration for a batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Posts requested per entity
    pub limit: usize,

    /// Entities processed at the same time
    pub concurrency: usize,

    /// Budget for a single fetch; exceeding it counts as a fetch failure
    pub fetch_timeout: Duration,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            limit: 200,
            concurrency: 4,
            fetch_timeout: Duration::from_secs(120),
        }
    }
}

impl BatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.limit == 0 {
            return Err(ConfigurationError::Invalid {
                field: "limit",
                reason: "must be at least 1".into(),
            });
        }
        if self.concurrency == 0 {
            return Err(ConfigurationError::Invalid {
                field: "concurrency",
                reason: "must be at least 1".into(),
            });
        }
        if self.fetch_timeout.is_zero() {
            return Err(ConfigurationError::Invalid {
                field: "fetch_timeout",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

/// Counters for one entity's pass through the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntityStats {
    pub fetched: usize,
    pub classified: usize,
    pub classification_failures: usize,
    pub duplicates_dropped: usize,
    pub fetch_failed: bool,
}

/// Drives the per-entity pipeline over an ordered list of entities.
///
/// Entities are independent, so they run through a bounded worker pool;
/// results are put back into input order before the batch result is built.
/// Per-post and per-entity failures are logged and contained: the result
/// always has exactly one summary per input entity.
pub struct BatchRunner<F, S> {
    fetcher: F,
    classifier: SentimentClassifier<S>,
    config: BatchConfig,
}

impl<F, S> BatchRunner<F, S>
where
    F: PostFetcher,
    S: PolarityScorer,
{
    /// Create a runner, rejecting invalid configuration up front.
    pub fn new(fetcher: F, scorer: S, config: BatchConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self {
            fetcher,
            classifier: SentimentClassifier::new(scorer),
            config,
        })
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Score every entity, returning summaries in input order.
    pub async fn run<E: AsRef<str>>(&self, entities: &[E]) -> BatchResult {
        info!(
            entities = entities.len(),
            fetcher = self.fetcher.name(),
            limit = self.config.limit,
            concurrency = self.config.concurrency,
            "Starting sentiment batch"
        );

        let mut indexed: Vec<(usize, EntitySummary)> = stream::iter(entities.iter().enumerate())
            .map(|(index, entity)| async move {
                let (summary, _) = self.run_entity(entity.as_ref()).await;
                (index, summary)
            })
            .buffer_unordered(self.config.concurrency)
            .collect::<Vec<_>>()
            .await;

        indexed.sort_by_key(|(index, _)| *index);
        let result = BatchResult::new(indexed.into_iter().map(|(_, s)| s).collect());

        let totals = result.totals();
        info!(
            entities = totals.entities,
            silent_entities = totals.silent_entities,
            mentions = totals.mentions,
            "Sentiment batch complete"
        );

        result
    }

    /// Run the pipeline for a single entity.
    pub async fn run_entity(&self, entity: &str) -> (EntitySummary, EntityStats) {
        let mut stats = EntityStats::default();

        let raw_posts = match self.fetch(entity).await {
            Ok(posts) => posts,
            Err(e) => {
                warn!(entity = %entity, error = %e, "Fetch failed, scoring entity as zero mentions");
                stats.fetch_failed = true;
                Vec::new()
            }
        };
        stats.fetched = raw_posts.len();

        let mut classified = Vec::with_capacity(raw_posts.len());
        for raw in raw_posts {
            match self.classifier.classify_post(&raw) {
                Ok(post) => classified.push((raw, post)),
                Err(e) => {
                    warn!(entity = %entity, error = %e, "Skipping post that failed classification");
                    stats.classification_failures += 1;
                }
            }
        }

        stats.classified = classified.len();
        let retained = deduplicate(classified);
        stats.duplicates_dropped = stats.classified - retained.len();

        let summary = aggregate(entity, &retained);

        info!(
            entity = %entity,
            fetched = stats.fetched,
            classified = stats.classified,
            classification_failures = stats.classification_failures,
            duplicates_dropped = stats.duplicates_dropped,
            fetch_failed = stats.fetch_failed,
            mentions = summary.mention_count,
            positive = summary.positive_pct,
            negative = summary.negative_pct,
            neutral = summary.neutral_pct,
            avg_score = summary.avg_score,
            "Entity scored"
        );

        (summary, stats)
    }

    async fn fetch(&self, entity: &str) -> Result<Vec<RawPost>, TransportError> {
        let timeout = self.config.fetch_timeout;
        match tokio::time::timeout(timeout, self.fetcher.fetch(entity, self.config.limit)).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout {
                query: entity.to_string(),
                timeout,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockFetcher, MockScorer};

    #[test]
    fn test_config_validation() {
        assert!(BatchConfig::default().validate().is_ok());
        assert!(matches!(
            BatchConfig::new().with_limit(0).validate(),
            Err(ConfigurationError::Invalid { field: "limit", .. })
        ));
        assert!(matches!(
            BatchConfig::new().with_concurrency(0).validate(),
            Err(ConfigurationError::Invalid { field: "concurrency", .. })
        ));
        assert!(matches!(
            BatchConfig::new()
                .with_fetch_timeout(Duration::ZERO)
                .validate(),
            Err(ConfigurationError::Invalid { field: "fetch_timeout", .. })
        ));
    }

    #[test]
    fn test_runner_rejects_bad_config() {
        let result = BatchRunner::new(
            MockFetcher::new(),
            MockScorer::new(),
            BatchConfig::new().with_limit(0),
        );
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_entity_stats() {
        let fetcher = MockFetcher::new().with_posts(
            "acme",
            vec![
                RawPost::new("good"),
                RawPost::new("good").with_reposts(5),
                RawPost::new("broken"),
                RawPost::new("meh"),
            ],
        );
        let scorer = MockScorer::new()
            .with_score("good", 0.5)
            .failing_on("broken");
        let runner = BatchRunner::new(fetcher, scorer, BatchConfig::default()).unwrap();

        let (summary, stats) = runner.run_entity("acme").await;

        assert_eq!(stats.fetched, 4);
        assert_eq!(stats.classified, 3);
        assert_eq!(stats.classification_failures, 1);
        assert_eq!(stats.duplicates_dropped, 1);
        assert!(!stats.fetch_failed);
        assert_eq!(summary.mention_count, 2);
        assert_eq!(summary.concatenated_text, "good;meh");
    }

    #[tokio::test]
    async fn test_limit_passed_to_fetcher() {
        let fetcher = MockFetcher::new();
        let runner = BatchRunner::new(
            fetcher.clone(),
            MockScorer::new(),
            BatchConfig::new().with_limit(25),
        )
        .unwrap();

        runner.run(&["acme"]).await;
        assert_eq!(fetcher.calls(), vec![("acme".to_string(), 25)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_timeout_counts_as_failure() {
        let fetcher = MockFetcher::new()
            .with_posts("slow", vec![RawPost::new("good")])
            .with_delay("slow", Duration::from_secs(30));
        let runner = BatchRunner::new(
            fetcher,
            MockScorer::new().with_score("good", 0.5),
            BatchConfig::new().with_fetch_timeout(Duration::from_secs(5)),
        )
        .unwrap();

        let (summary, stats) = runner.run_entity("slow").await;
        assert!(stats.fetch_failed);
        assert_eq!(summary, EntitySummary::empty("slow"));
    }
}
