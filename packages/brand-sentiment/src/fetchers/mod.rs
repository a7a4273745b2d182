//! Fetch collaborator implementations.
//!
//! - `ApifyFetcher` - X/Twitter search via the Apify tweet scraper
//! - `MockFetcher` (in [`crate::testing`]) - canned posts for tests

mod apify;

pub use apify::{ApifyFetcher, MAX_POSTS_PER_QUERY};
