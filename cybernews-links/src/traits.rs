use crate::types::{FeedItem, Result};
use async_trait::async_trait;

/// Something that can turn a feed URL into its current entries.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch and parse the feed, returning entries in document order.
    async fn pull(&self, url: &str) -> Result<Vec<FeedItem>>;
}
