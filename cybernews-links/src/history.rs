//! Link history rebuilt from the weekly files already on disk.

use crate::types::Result;
use crate::weekly_file;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Every link recorded in any weekly file under `dir`.
pub fn load(dir: &Path) -> Result<HashSet<String>> {
    let mut links = HashSet::new();

    for file in weekly_file::list(dir)? {
        let content = fs::read_to_string(&file.path)?;
        let before = links.len();
        links.extend(
            content
                .lines()
                .map(str::trim_end)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
        debug!(
            "Read {} new links from {}",
            links.len() - before,
            file.path.display()
        );
    }

    info!(
        "Found {} total historical links across previous files",
        links.len()
    );
    Ok(links)
}
