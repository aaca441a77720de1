//! Collector configuration.

use crate::rss_utils::url::is_valid_rss_url;
use crate::types::{CollectorError, FetchConfig, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Upper bound for `window_days`, roughly ten years.
pub const MAX_WINDOW_DAYS: i64 = 3650;

/// Everything one collection run needs to know.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectorConfig {
    /// Feed URLs, processed in this order.
    #[serde(default = "default_feeds")]
    pub feeds: Vec<String>,
    /// Directory holding the weekly link files.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Most links a single feed may contribute per run.
    #[serde(default = "default_max_items_per_feed")]
    pub max_items_per_feed: usize,
    /// Number of weekly files kept after a write.
    #[serde(default = "default_keep_weeks")]
    pub keep_weeks: usize,
    /// Length of the trailing window in days, both ends inclusive.
    #[serde(default = "default_window_days")]
    pub window_days: i64,
    #[serde(default)]
    pub fetch: FetchConfig,
}

fn default_feeds() -> Vec<String> {
    vec![
        "https://feeds.feedburner.com/TheHackersNews".to_string(),
        "https://www.bleepingcomputer.com/feed/".to_string(),
        "https://www.securityweek.com/feed".to_string(),
    ]
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("daily_news")
}

fn default_max_items_per_feed() -> usize {
    10
}

fn default_keep_weeks() -> usize {
    1
}

fn default_window_days() -> i64 {
    7
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            feeds: default_feeds(),
            output_dir: default_output_dir(),
            max_items_per_feed: default_max_items_per_feed(),
            keep_weeks: default_keep_weeks(),
            window_days: default_window_days(),
            fetch: FetchConfig::default(),
        }
    }
}

impl CollectorConfig {
    /// Load from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CollectorError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| CollectorError::Config(format!("invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.feeds.is_empty() {
            return Err(CollectorError::Config("no feeds configured".to_string()));
        }
        if let Some(feed) = self.feeds.iter().find(|f| !is_valid_rss_url(f)) {
            return Err(CollectorError::Config(format!(
                "invalid feed URL {}: expected an http(s) URL",
                feed
            )));
        }
        if self.max_items_per_feed == 0 {
            return Err(CollectorError::Config(
                "max_items_per_feed must be positive".to_string(),
            ));
        }
        if self.keep_weeks == 0 {
            return Err(CollectorError::Config("keep_weeks must be positive".to_string()));
        }
        if !(0..=MAX_WINDOW_DAYS).contains(&self.window_days) {
            return Err(CollectorError::Config(format!(
                "window_days must be between 0 and {}",
                MAX_WINDOW_DAYS
            )));
        }
        Ok(())
    }
}
