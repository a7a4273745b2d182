//! Per-entity statistics.

use crate::types::{ClassifiedPost, EntitySummary, SentimentLabel};

/// Delimiter placed between post texts in `concatenated_text`.
pub const TEXT_DELIMITER: &str = ";";

/// Reduce one entity's deduplicated posts into an [`EntitySummary`].
///
/// Positive and negative shares are counted directly; the neutral share is
/// the complement, so rounding error lands in the neutral bucket. Shares are
/// rounded to two decimals, the average score is left unrounded.
pub fn aggregate(entity: &str, posts: &[ClassifiedPost]) -> EntitySummary {
    let mention_count = posts.len();
    if mention_count == 0 {
        return EntitySummary::empty(entity);
    }

    let positive = count_label(posts, SentimentLabel::Positive);
    let negative = count_label(posts, SentimentLabel::Negative);
    let total = mention_count as f64;

    let positive_pct = round2(100.0 * positive as f64 / total);
    let negative_pct = round2(100.0 * negative as f64 / total);
    let neutral_pct = round2(100.0 * (mention_count - positive - negative) as f64 / total);

    let avg_score = posts.iter().map(|p| p.score).sum::<f64>() / total;

    let concatenated_text = posts
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join(TEXT_DELIMITER);

    EntitySummary {
        entity: entity.to_string(),
        mention_count,
        positive_pct,
        negative_pct,
        neutral_pct,
        avg_score,
        concatenated_text,
    }
}

fn count_label(posts: &[ClassifiedPost], label: SentimentLabel) -> usize {
    posts.iter().filter(|p| p.label == label).count()
}

/// Round to two decimal places, ties to even on the exact binary value.
///
/// Float formatting is correctly rounded, so 3.125 becomes 3.12 where
/// scaling by 100 and calling `round` would give 3.13.
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn post(text: &str, score: f64) -> ClassifiedPost {
        ClassifiedPost {
            text: text.to_string(),
            label: SentimentLabel::from_score(score),
            score,
        }
    }

    #[test]
    fn test_empty_is_all_zero() {
        let summary = aggregate("acme", &[]);
        assert_eq!(summary.entity, "acme");
        assert_eq!(summary.mention_count, 0);
        assert_eq!(summary.positive_pct, 0.0);
        assert_eq!(summary.negative_pct, 0.0);
        assert_eq!(summary.neutral_pct, 0.0);
        assert_eq!(summary.avg_score, 0.0);
        assert_eq!(summary.concatenated_text, "");
    }

    #[test]
    fn test_two_positive_one_negative() {
        let posts = vec![post("good", 0.5), post("good", 0.5), post("bad", -0.2)];
        let summary = aggregate("acme", &posts);

        assert_eq!(summary.mention_count, 3);
        assert_eq!(summary.positive_pct, 66.67);
        assert_eq!(summary.negative_pct, 33.33);
        assert_eq!(summary.neutral_pct, 0.0);
        assert!((summary.avg_score - 0.2667).abs() < 1e-4);
        assert_eq!(summary.concatenated_text, "good;good;bad");
    }

    #[test]
    fn test_neutral_is_complement() {
        let posts = vec![post("a", 0.2), post("b", -0.4), post("c", 0.0)];
        let summary = aggregate("acme", &posts);

        assert_eq!(summary.positive_pct, 33.33);
        assert_eq!(summary.negative_pct, 33.33);
        assert_eq!(summary.neutral_pct, 33.33);
        assert!((summary.avg_score - (-0.2 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_average_unrounded() {
        let posts = vec![post("a", 0.1), post("b", 0.2), post("c", 0.25)];
        let summary = aggregate("acme", &posts);
        assert_eq!(summary.avg_score, (0.1 + 0.2 + 0.25) / 3.0);
    }

    #[test]
    fn test_exact_ties_round_to_even() {
        let mut posts = vec![post("up", 0.5), post("down", -0.5)];
        posts.extend((0..30).map(|_| post("flat", 0.0)));
        let summary = aggregate("acme", &posts);

        assert_eq!(summary.mention_count, 32);
        assert_eq!(summary.positive_pct, 3.12);
        assert_eq!(summary.negative_pct, 3.12);
        assert_eq!(summary.neutral_pct, 93.75);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.625), 0.62);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(200.0 / 3.0), 66.67);
        assert_eq!(round2(100.0 / 3.0), 33.33);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_idempotent() {
        let posts = vec![post("x", 0.9), post("y", -0.9), post("z", 0.0)];
        assert_eq!(aggregate("acme", &posts), aggregate("acme", &posts));
    }

    proptest! {
        #[test]
        fn prop_shares_sum_to_hundred(scores in prop::collection::vec(
            prop_oneof![Just(0.0f64), -1.0f64..=1.0],
            1..300,
        )) {
            let posts: Vec<_> = scores.iter().map(|s| post("p", *s)).collect();
            let summary = aggregate("acme", &posts);

            let sum = summary.positive_pct + summary.negative_pct + summary.neutral_pct;
            prop_assert!((sum - 100.0).abs() <= 0.01 + 1e-9, "sum was {}", sum);
            prop_assert_eq!(summary.mention_count, posts.len());
            prop_assert!(summary.avg_score.abs() <= 1.0 + 1e-9);
        }
    }
}
