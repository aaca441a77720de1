use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_max_feed_size_mb")]
    pub max_feed_size_mb: usize,
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

fn default_user_agent() -> String {
    "CyberNews-Links/1.0".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_max_feed_size_mb() -> usize {
    10
}

fn default_follow_redirects() -> bool {
    true
}

fn default_max_redirects() -> usize {
    5
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout_seconds(),
            max_feed_size_mb: default_max_feed_size_mb(),
            follow_redirects: default_follow_redirects(),
            max_redirects: default_max_redirects(),
        }
    }
}

/// One entry as handed over by a feed source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    /// Empty when the entry carries no link at all.
    pub link: String,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl FeedItem {
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            published_at: None,
            updated_at: None,
        }
    }

    pub fn published(mut self, at: DateTime<Utc>) -> Self {
        self.published_at = Some(at);
        self
    }

    pub fn updated(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = Some(at);
        self
    }

    /// Calendar date of the entry: published first, updated as fallback.
    pub fn entry_date(&self) -> Option<NaiveDate> {
        self.published_at
            .or(self.updated_at)
            .map(|dt| dt.date_naive())
    }
}

/// Per-feed outcome of one collection run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedSummary {
    pub feed_url: String,
    pub added: usize,
    pub skipped_undated: usize,
    pub skipped_stale: usize,
    pub skipped_duplicate: usize,
    pub skipped_no_link: usize,
    pub reached_cap: bool,
    pub error: Option<String>,
}

impl FeedSummary {
    pub fn new(feed_url: impl Into<String>) -> Self {
        Self {
            feed_url: feed_url.into(),
            ..Default::default()
        }
    }

    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Links gathered in a run, in feed order then discovery order.
#[derive(Debug, Clone, Default)]
pub struct CollectOutcome {
    pub links: Vec<String>,
    pub feeds: Vec<FeedSummary>,
}

#[derive(Debug, thiserror::Error)]
pub enum CollectorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Feed size exceeds limit: {size_mb}MB")]
    FeedTooLarge { size_mb: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("General error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, CollectorError>;
