use anyhow::Context;
use clap::Parser;
use cybernews_links::{CollectorConfig, LinkPipeline};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Collect last week's cybersecurity news links into a dated file.
#[derive(Debug, Parser)]
#[command(name = "cybernews-links", version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the weekly link files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Most links taken from a single feed
    #[arg(long)]
    max_items_per_feed: Option<usize>,

    /// Weekly files kept after writing
    #[arg(long)]
    keep_weeks: Option<usize>,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<CollectorConfig> {
        let mut config = match &self.config {
            Some(path) => CollectorConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => CollectorConfig::default(),
        };

        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(max) = self.max_items_per_feed {
            config.max_items_per_feed = max;
        }
        if let Some(keep) = self.keep_weeks {
            config.keep_weeks = keep;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().into_config()?;
    info!(
        "Collecting from {} feeds into {}",
        config.feeds.len(),
        config.output_dir.display()
    );

    let pipeline = LinkPipeline::new(config).context("building feed client")?;
    match pipeline.run().await {
        Ok(Some(path)) => info!("Weekly file: {}", path.display()),
        Ok(None) => info!("Nothing new to record"),
        Err(e) => {
            error!("Run aborted: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
