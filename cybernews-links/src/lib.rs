pub mod types;
pub mod config;
pub mod traits;
pub mod fetcher;
pub mod parser;
pub mod sources;
pub mod weekly_file;
pub mod history;
pub mod retention;
pub mod writer;
pub mod pipeline;
pub mod rss_utils;

pub use types::*;
pub use config::CollectorConfig;
pub use traits::FeedSource;
pub use fetcher::Fetcher;
pub use parser::FeedParser;
pub use sources::RssFeedSource;
pub use pipeline::LinkPipeline;
