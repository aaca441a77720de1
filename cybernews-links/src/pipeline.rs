use crate::config::CollectorConfig;
use crate::rss_utils::{time, url::feed_name};
use crate::sources::RssFeedSource;
use crate::traits::FeedSource;
use crate::types::{CollectOutcome, FeedItem, FeedSummary, Result};
use crate::{history, writer};
use chrono::{Local, NaiveDate};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// Fetch, filter, dedup, write, prune: one pass over the configured feeds.
pub struct LinkPipeline {
    config: CollectorConfig,
    source: Box<dyn FeedSource>,
}

impl LinkPipeline {
    /// Pipeline reading feeds over HTTP.
    pub fn new(config: CollectorConfig) -> Result<Self> {
        let source = RssFeedSource::new(config.fetch.clone())?;
        Ok(Self::with_source(config, Box::new(source)))
    }

    pub fn with_source(config: CollectorConfig, source: Box<dyn FeedSource>) -> Self {
        Self { config, source }
    }

    /// Run once against the local calendar date.
    pub async fn run(&self) -> Result<Option<PathBuf>> {
        self.run_on(Local::now().date_naive()).await
    }

    /// Run once as if `today` were the current date. Returns the weekly file
    /// written, or `None` when no new links turned up.
    pub async fn run_on(&self, today: NaiveDate) -> Result<Option<PathBuf>> {
        banner(&format!(
            "Fetching Cybersecurity News Links (Last {} Days)",
            self.config.window_days
        ));

        let mut known = history::load(&self.config.output_dir)?;
        let outcome = self.collect(today, &mut known).await;

        let written = writer::write(
            &self.config.output_dir,
            today,
            &outcome.links,
            self.config.keep_weeks,
        )?;

        match &written {
            Some(path) => {
                banner(&format!("Created new weekly file: {}", path.display()));
                info!("Total new links this week: {}", outcome.links.len());
            }
            None => banner("No new links found this week! No file created."),
        }

        let failed = outcome.feeds.iter().filter(|f| f.failed()).count();
        if failed > 0 {
            warn!("{}/{} feeds could not be read", failed, outcome.feeds.len());
        }

        Ok(written)
    }

    /// Gather new links from every feed in order. `known` is extended with each
    /// accepted link so later feeds cannot repeat it.
    pub async fn collect(&self, today: NaiveDate, known: &mut HashSet<String>) -> CollectOutcome {
        let mut outcome = CollectOutcome::default();

        for url in &self.config.feeds {
            let name = feed_name(url);
            info!("--- Processing feed: {} ---", name);

            let mut summary = FeedSummary::new(url.as_str());
            match self.source.pull(url).await {
                Ok(items) => {
                    self.accept_items(&items, today, known, &mut outcome.links, &mut summary);
                }
                Err(e) => {
                    error!("Failed to read feed {}: {}", url, e);
                    summary.error = Some(e.to_string());
                }
            }

            info!(
                "Feed summary: {} new links added from {}",
                summary.added, name
            );
            outcome.feeds.push(summary);
        }

        outcome
    }

    fn accept_items(
        &self,
        items: &[FeedItem],
        today: NaiveDate,
        known: &mut HashSet<String>,
        links: &mut Vec<String>,
        summary: &mut FeedSummary,
    ) {
        let cap = self.config.max_items_per_feed;

        for item in items {
            let Some(date) = item.entry_date() else {
                info!("  [!] Skipped: No published/updated date");
                summary.skipped_undated += 1;
                continue;
            };

            if !time::within_window(date, today, self.config.window_days) {
                debug!("  [-] Skipped (old): {} ({})", item.link, date);
                summary.skipped_stale += 1;
                continue;
            }

            if item.link.is_empty() {
                info!("  [-] Skipped: entry dated {} has no link", date);
                summary.skipped_no_link += 1;
                continue;
            }

            if known.contains(&item.link) {
                info!("  [-] Skipped duplicate: {}", item.link);
                summary.skipped_duplicate += 1;
                continue;
            }

            known.insert(item.link.clone());
            links.push(item.link.clone());
            summary.added += 1;
            info!("  [+] Added: {}", item.link);

            if summary.added >= cap {
                info!("  [!] Reached max items per feed ({})", cap);
                summary.reached_cap = true;
                break;
            }
        }
    }
}

fn banner(msg: &str) {
    let rule = "=".repeat(80);
    info!("{}", rule);
    info!("{}", msg);
    info!("{}", rule);
}
