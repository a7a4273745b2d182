//! Records flowing through the pipeline.
//!
//! raw post -> classified post -> entity summary -> batch result.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A post as handed over by the fetch collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPost {
    /// Original post text, untouched
    pub text: String,

    /// How many times the content has been reposted
    pub repost_count: u64,
}

impl RawPost {
    /// Create an original (never reposted) post.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            repost_count: 0,
        }
    }

    /// Set the repost count.
    pub fn with_reposts(mut self, repost_count: u64) -> Self {
        self.repost_count = repost_count;
        self
    }

    pub fn is_reposted(&self) -> bool {
        self.repost_count > 0
    }
}

/// Three-way polarity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Map a polarity score onto a label by sign alone.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Self::Positive
        } else if score == 0.0 {
            Self::Neutral
        } else {
            Self::Negative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A post after scoring.
///
/// Equality is structural over all three fields; the deduplicator relies on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedPost {
    /// Original fetched text (not the normalized form)
    pub text: String,
    pub label: SentimentLabel,
    /// Polarity in [-1.0, 1.0]
    pub score: f64,
}

/// Per-entity statistics, one output row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySummary {
    pub entity: String,
    pub mention_count: usize,
    pub positive_pct: f64,
    pub negative_pct: f64,
    pub neutral_pct: f64,
    pub avg_score: f64,
    pub concatenated_text: String,
}

impl EntitySummary {
    /// All-zero summary for an entity with no usable posts.
    pub fn empty(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            mention_count: 0,
            positive_pct: 0.0,
            negative_pct: 0.0,
            neutral_pct: 0.0,
            avg_score: 0.0,
            concatenated_text: String::new(),
        }
    }

    pub fn has_mentions(&self) -> bool {
        self.mention_count > 0
    }
}

/// Ordered summaries, one per input entity, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchResult {
    summaries: Vec<EntitySummary>,
}

/// Roll-up counts over a whole batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchTotals {
    pub entities: usize,
    pub silent_entities: usize,
    pub mentions: usize,
}

impl BatchResult {
    pub fn new(summaries: Vec<EntitySummary>) -> Self {
        Self { summaries }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EntitySummary> {
        self.summaries.iter()
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    pub fn summaries(&self) -> &[EntitySummary] {
        &self.summaries
    }

    pub fn into_summaries(self) -> Vec<EntitySummary> {
        self.summaries
    }

    pub fn totals(&self) -> BatchTotals {
        self.summaries
            .iter()
            .fold(BatchTotals::default(), |mut totals, summary| {
                totals.entities += 1;
                totals.mentions += summary.mention_count;
                if !summary.has_mentions() {
                    totals.silent_entities += 1;
                }
                totals
            })
    }
}

impl<'a> IntoIterator for &'a BatchResult {
    type Item = &'a EntitySummary;
    type IntoIter = std::slice::Iter<'a, EntitySummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.summaries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_thresholds_are_exact() {
        assert_eq!(SentimentLabel::from_score(0.3), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(f64::MIN_POSITIVE), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.1), SentimentLabel::Negative);
    }

    #[test]
    fn test_classified_post_equality_is_structural() {
        let a = ClassifiedPost {
            text: "good".into(),
            label: SentimentLabel::Positive,
            score: 0.5,
        };
        let mut b = a.clone();
        assert_eq!(a, b);

        b.score = 0.4;
        assert_ne!(a, b);
    }

    #[test]
    fn test_totals() {
        let mut busy = EntitySummary::empty("acme");
        busy.mention_count = 7;
        let result = BatchResult::new(vec![busy, EntitySummary::empty("globex")]);

        let totals = result.totals();
        assert_eq!(totals.entities, 2);
        assert_eq!(totals.silent_entities, 1);
        assert_eq!(totals.mentions, 7);
    }

    #[test]
    fn test_batch_result_serializes_as_array() {
        let result = BatchResult::new(vec![EntitySummary::empty("acme")]);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["entity"], "acme");
        assert_eq!(json[0]["mention_count"], 0);
    }
}
