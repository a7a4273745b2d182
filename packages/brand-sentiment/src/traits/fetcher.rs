//! Fetch collaborator: search posts mentioning an entity.

use async_trait::async_trait;

use crate::error::TransportResult;
use crate::types::RawPost;

/// Source of posts for an entity query.
///
/// Implementations own their connection/session lifecycle. Every failure is
/// reported as a `TransportError`; the batch runner treats it as zero posts.
#[async_trait]
pub trait PostFetcher: Send + Sync {
    /// Fetch up to `limit` recent posts matching `query`, in fetch order.
    async fn fetch(&self, query: &str, limit: usize) -> TransportResult<Vec<RawPost>>;

    /// Short name used in logs.
    fn name(&self) -> &str;
}

#[async_trait]
impl<T: PostFetcher + ?Sized> PostFetcher for std::sync::Arc<T> {
    async fn fetch(&self, query: &str, limit: usize) -> TransportResult<Vec<RawPost>> {
        (**self).fetch(query, limit).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
