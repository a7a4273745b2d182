//! # Opinion Lexicon
//!
//! Rule-based polarity scorer for short social posts.

use std::collections::HashMap;

use crate::error::ClassificationResult;
use crate::traits::scorer::PolarityScorer;

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("love", 0.5),
    ("loved", 0.7),
    ("like", 0.2),
    ("nice", 0.6),
    ("happy", 0.8),
    ("glad", 0.5),
    ("fantastic", 0.4),
    ("wonderful", 1.0),
    ("perfect", 1.0),
    ("brilliant", 0.9),
    ("impressive", 1.0),
    ("fast", 0.2),
    ("reliable", 0.6),
    ("helpful", 0.5),
    ("recommend", 0.5),
    ("win", 0.8),
    ("winning", 0.5),
    ("success", 0.3),
    ("successful", 0.75),
    ("strong", 0.4),
    ("growth", 0.4),
    ("profit", 0.5),
    ("innovative", 0.5),
    ("easy", 0.4),
    ("beautiful", 0.85),
    ("cool", 0.35),
    ("fun", 0.3),
    ("thanks", 0.2),
    ("thank", 0.2),
    ("positive", 0.2),
    ("new", 0.14),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("poor", -0.4),
    ("hate", -0.8),
    ("hated", -0.9),
    ("sad", -0.5),
    ("angry", -0.5),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("broken", -0.4),
    ("slow", -0.3),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.3),
    ("problem", -0.3),
    ("issue", -0.2),
    ("bug", -0.3),
    ("scam", -0.9),
    ("fraud", -0.9),
    ("loss", -0.4),
    ("lawsuit", -0.5),
    ("crash", -0.6),
    ("decline", -0.4),
    ("weak", -0.375),
    ("expensive", -0.5),
    ("annoying", -0.8),
    ("useless", -0.5),
    ("ugly", -0.7),
    ("wrong", -0.5),
    ("negative", -0.3),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "nothing", "cannot", "cant", "dont",
    "doesnt", "didnt", "isnt", "arent", "wasnt", "werent", "wont", "wouldnt", "shouldnt",
    "couldnt", "hardly", "barely",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("super", 1.3),
    ("so", 1.2),
    ("totally", 1.3),
    ("absolutely", 1.5),
    ("incredibly", 1.5),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("kinda", 0.7),
];

/// Lexicon-based polarity scorer.
///
/// Expects normalized text (ASCII words separated by single spaces):
/// 1. Look up each lowercased word
/// 2. A negation flips and halves the next sentiment word
/// 3. An intensifier scales the next sentiment word
/// 4. Score is the mean of matched words, clamped to [-1, 1]; no match is 0.0
pub struct LexiconScorer {
    words: HashMap<String, f64>,
    negations: Vec<String>,
    intensifiers: HashMap<String, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        let words = POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS)
            .map(|(w, s)| (w.to_string(), *s))
            .collect();

        Self {
            words,
            negations: NEGATIONS.iter().map(|w| w.to_string()).collect(),
            intensifiers: INTENSIFIERS
                .iter()
                .map(|(w, m)| (w.to_string(), *m))
                .collect(),
        }
    }

    /// Add or override a word's polarity.
    pub fn with_word(mut self, word: &str, polarity: f64) -> Self {
        self.words
            .insert(word.to_lowercase(), polarity.clamp(-1.0, 1.0));
        self
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Mean polarity of the sentiment words in `text`.
    pub fn polarity(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut matched = 0usize;

        let mut negate_next = false;
        let mut intensity = 1.0;

        for word in text.split_whitespace() {
            let word = word.to_lowercase();

            if self.negations.contains(&word) {
                negate_next = true;
                continue;
            }

            if let Some(mult) = self.intensifiers.get(&word) {
                intensity = *mult;
                continue;
            }

            if let Some(score) = self.words.get(&word) {
                let mut score = *score * intensity;
                if negate_next {
                    score = -score * 0.5;
                    negate_next = false;
                }
                intensity = 1.0;

                total += score;
                matched += 1;
            }
        }

        if matched == 0 {
            return 0.0;
        }
        (total / matched as f64).clamp(-1.0, 1.0)
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> ClassificationResult<f64> {
        Ok(self.polarity(text))
    }
}
