//! Polarity scorer implementations.
//!
//! - `LexiconScorer` - rule-based word lexicon, the default for CLI runs
//! - `MockScorer` (in [`crate::testing`]) - canned scores for tests

mod lexicon;

pub use lexicon::LexiconScorer;
