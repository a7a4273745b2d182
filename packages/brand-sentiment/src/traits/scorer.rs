//! Polarity-scoring collaborator.

use crate::error::ClassificationResult;

/// Continuous sentiment score for already-normalized text.
///
/// Expected to be deterministic and side-effect free, returning a value in
/// [-1.0, 1.0]. The classifier validates the range, so implementations may
/// report garbage and let the post be dropped.
pub trait PolarityScorer: Send + Sync {
    fn score(&self, text: &str) -> ClassificationResult<f64>;
}

impl<T: PolarityScorer + ?Sized> PolarityScorer for std::sync::Arc<T> {
    fn score(&self, text: &str) -> ClassificationResult<f64> {
        (**self).score(text)
    }
}
