use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input for the apidojo/tweet-scraper actor.
#[derive(Debug, Clone, Serialize)]
pub struct TweetSearchInput {
    #[serde(rename = "searchTerms")]
    pub search_terms: Vec<String>,
    #[serde(rename = "maxItems")]
    pub max_items: u32,
    pub sort: String,
}

impl TweetSearchInput {
    pub fn new(query: &str, limit: u32) -> Self {
        Self {
            search_terms: vec![query.to_string()],
            max_items: limit,
            sort: "Latest".to_string(),
        }
    }
}

/// Author block attached to a scraped X post.
#[derive(Debug, Clone, Deserialize)]
pub struct XAuthor {
    #[serde(rename = "userName")]
    pub user_name: Option<String>,
    pub name: Option<String>,
}

/// A single X/Twitter post from the Apify dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct XPost {
    pub id: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "fullText")]
    pub full_text: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "retweetCount")]
    pub retweet_count: Option<i64>,
    #[serde(rename = "likeCount")]
    pub like_count: Option<i64>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    pub lang: Option<String>,
    pub author: Option<XAuthor>,
}

impl XPost {
    /// Post body, preferring the untruncated text.
    pub fn content(&self) -> Option<&str> {
        self.full_text
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(self.text.as_deref())
    }

    /// Retweet count, with missing or negative values read as zero.
    pub fn retweets(&self) -> u64 {
        self.retweet_count.unwrap_or(0).max(0) as u64
    }
}

/// Wrapper for Apify API responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Apify actor run metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct RunData {
    pub id: String,
    pub status: String,
    #[serde(rename = "defaultDatasetId")]
    pub default_dataset_id: String,
    #[serde(rename = "startedAt")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(rename = "finishedAt")]
    pub finished_at: Option<DateTime<Utc>>,
}
