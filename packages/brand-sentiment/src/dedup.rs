//! Repost deduplication.

use crate::types::{ClassifiedPost, RawPost};

/// Drop reposted content that repeats an already-retained classified post.
///
/// Walks the pairs in fetch order:
/// - `repost_count == 0`: always kept, even if it collides with an earlier post.
/// - `repost_count > 0`: kept only when no structurally equal post has been
///   kept before it.
///
/// Retained posts keep their fetch order.
pub fn deduplicate<I>(posts: I) -> Vec<ClassifiedPost>
where
    I: IntoIterator<Item = (RawPost, ClassifiedPost)>,
{
    let mut retained: Vec<ClassifiedPost> = Vec::new();

    for (raw, classified) in posts {
        if raw.is_reposted() && retained.contains(&classified) {
            tracing::debug!(reposts = raw.repost_count, "Dropping duplicate repost");
            continue;
        }
        retained.push(classified);
    }

    retained
}
