//! Polarity scoring and label mapping.

use tracing::debug;

use crate::error::{ClassificationError, ClassificationResult};
use crate::normalize::normalize;
use crate::traits::scorer::PolarityScorer;
use crate::types::{ClassifiedPost, RawPost, SentimentLabel};

/// Scores normalized text and maps the score onto a label.
pub struct SentimentClassifier<S> {
    scorer: S,
}

impl<S: PolarityScorer> SentimentClassifier<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Normalize, score, validate and label a piece of text.
    ///
    /// Labels follow the score's sign exactly: `> 0` positive, `== 0`
    /// neutral, `< 0` negative.
    pub fn classify(&self, text: &str) -> ClassificationResult<(SentimentLabel, f64)> {
        let cleaned = normalize(text);
        let score = self.scorer.score(&cleaned)?;

        if !score.is_finite() {
            return Err(ClassificationError::NonFinite);
        }
        if !(-1.0..=1.0).contains(&score) {
            return Err(ClassificationError::OutOfRange(score));
        }

        Ok((SentimentLabel::from_score(score), score))
    }

    /// Classify a fetched post, keeping its original text.
    pub fn classify_post(&self, post: &RawPost) -> ClassificationResult<ClassifiedPost> {
        let (label, score) = self.classify(&post.text)?;
        debug!(label = %label, score, reposts = post.repost_count, "Classified post");

        Ok(ClassifiedPost {
            text: post.text.clone(),
            label,
            score,
        })
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }
}
