use crate::traits::FeedSource;
use crate::types::{CollectorError, FeedItem, FetchConfig, Result};
use crate::{FeedParser, Fetcher};
use async_trait::async_trait;
use tracing::{info, warn};

/// Feed source backed by HTTP fetching and `feed-rs` parsing.
pub struct RssFeedSource {
    fetcher: Fetcher,
}

impl RssFeedSource {
    pub fn new(fetch_config: FetchConfig) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(fetch_config)?,
        })
    }
}

#[async_trait]
impl FeedSource for RssFeedSource {
    async fn pull(&self, url: &str) -> Result<Vec<FeedItem>> {
        info!("Pulling RSS feed: {}", url);

        let content = self.fetcher.fetch_feed(url).await?;

        if !FeedParser::is_valid_feed_content(&content) {
            warn!("Response from {} does not look like a feed", url);
            return Err(CollectorError::Parse(format!(
                "Response from {} is not an RSS/Atom document",
                url
            )));
        }

        let items = FeedParser::parse_feed(&content)?;
        info!("Pulled {} entries from {}", items.len(), url);
        Ok(items)
    }
}
