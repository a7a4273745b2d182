//! Brand Sentiment Scoring
//!
//! Scores how a list of named entities (companies, products, people) is
//! talked about on social media. For each entity the library fetches recent
//! posts, cleans and scores them, drops repost noise and reduces the rest to
//! one summary row.
//!
//! # Pipeline
//!
//! ```text
//! raw posts -> normalize -> classify -> deduplicate -> aggregate -> summary row
//! ```
//!
//! Each entity runs independently; the batch always yields exactly one
//! summary per input entity, in input order. Fetch and scoring failures are
//! contained per entity / per post. Only configuration problems abort a run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use brand_sentiment::{ApifyFetcher, BatchConfig, BatchRunner, LexiconScorer, SearchCredentials};
//!
//! let fetcher = ApifyFetcher::from_credentials(&SearchCredentials::new(token))?;
//! let runner = BatchRunner::new(fetcher, LexiconScorer::new(), BatchConfig::default())?;
//!
//! let result = runner.run(&["Acme Corp", "Globex"]).await;
//! for summary in &result {
//!     println!("{}: {} mentions", summary.entity, summary.mention_count);
//! }
//! ```
//!
//! # Modules
//!
//! - [`normalize`] - text cleaning before scoring
//! - [`classify`] - polarity scoring and label mapping
//! - [`dedup`] - repost deduplication
//! - [`aggregate`] - per-entity statistics
//! - [`batch`] - batch runner and its configuration
//! - [`traits`] - fetch and scoring collaborator seams
//! - [`fetchers`] / [`scorers`] - collaborator implementations
//! - [`table`] - CSV/JSON table adapter
//! - [`testing`] - mock collaborators

pub mod aggregate;
pub mod batch;
pub mod classify;
pub mod dedup;
pub mod error;
pub mod fetchers;
pub mod normalize;
pub mod scorers;
pub mod security;
pub mod table;
pub mod testing;
pub mod traits;
pub mod types;

pub use aggregate::aggregate;
pub use batch::{BatchConfig, BatchRunner, EntityStats};
pub use classify::SentimentClassifier;
pub use dedup::deduplicate;
pub use error::{ClassificationError, ConfigurationError, TableError, TransportError};
pub use fetchers::ApifyFetcher;
pub use normalize::normalize;
pub use scorers::LexiconScorer;
pub use security::SearchCredentials;
pub use table::EntityTable;
pub use testing::{MockFetcher, MockScorer};
pub use traits::{fetcher::PostFetcher, scorer::PolarityScorer};
pub use types::{BatchResult, BatchTotals, ClassifiedPost, EntitySummary, RawPost, SentimentLabel};
