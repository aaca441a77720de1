//! Persists a run's new links as the weekly file for a date.

use crate::retention;
use crate::types::Result;
use crate::weekly_file;
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write `links` to the weekly file for `date` and prune to `keep` files.
///
/// Nothing touches the filesystem when `links` is empty. If the file for
/// `date` already exists (a second run on the same day) the links are
/// appended so earlier ones stay in the history.
pub fn write(dir: &Path, date: NaiveDate, links: &[String], keep: usize) -> Result<Option<PathBuf>> {
    if links.is_empty() {
        return Ok(None);
    }

    fs::create_dir_all(dir)?;
    let path = weekly_file::file_path(dir, date);

    if path.exists() {
        let mut file = OpenOptions::new().append(true).open(&path)?;
        write!(file, "\n{}", links.join("\n"))?;
        info!("Appended {} links to existing file {}", links.len(), path.display());
    } else {
        fs::write(&path, links.join("\n"))?;
        info!("Wrote {} links to {}", links.len(), path.display());
    }

    retention::prune(dir, keep)?;
    Ok(Some(path))
}
