#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use cybernews_links::{CollectorConfig, CollectorError, FeedItem, FeedSource, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Noon UTC on the given day, `days_back` days before `today`.
pub fn days_ago(today: NaiveDate, days_back: i64) -> DateTime<Utc> {
    (today - chrono::Duration::days(days_back))
        .and_hms_opt(12, 0, 0)
        .unwrap()
        .and_utc()
}

/// In-memory feed source: fixed entries per URL, or a canned failure.
#[derive(Default)]
pub struct StaticFeedSource {
    feeds: HashMap<String, std::result::Result<Vec<FeedItem>, String>>,
}

impl StaticFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(mut self, url: &str, items: Vec<FeedItem>) -> Self {
        self.feeds.insert(url.to_string(), Ok(items));
        self
    }

    pub fn with_failure(mut self, url: &str, message: &str) -> Self {
        self.feeds.insert(url.to_string(), Err(message.to_string()));
        self
    }
}

#[async_trait]
impl FeedSource for StaticFeedSource {
    async fn pull(&self, url: &str) -> Result<Vec<FeedItem>> {
        match self.feeds.get(url) {
            Some(Ok(items)) => Ok(items.clone()),
            Some(Err(message)) => Err(CollectorError::General(message.clone())),
            None => Ok(Vec::new()),
        }
    }
}

pub fn config_for(dir: &Path, feeds: &[&str]) -> CollectorConfig {
    CollectorConfig {
        feeds: feeds.iter().map(|f| f.to_string()).collect(),
        output_dir: dir.to_path_buf(),
        ..CollectorConfig::default()
    }
}

pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
