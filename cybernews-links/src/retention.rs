//! Keeps only the most recent weekly files.

use crate::types::Result;
use crate::weekly_file;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Delete all but the `keep` most recently dated weekly files in `dir`.
///
/// Files sharing a date keep their directory listing order. Returns the
/// deleted paths, oldest last.
pub fn prune(dir: &Path, keep: usize) -> Result<Vec<PathBuf>> {
    let mut files = weekly_file::list(dir)?;
    if files.len() <= keep {
        info!("No cleanup needed. Total weekly files: {}", files.len());
        return Ok(Vec::new());
    }

    files.sort_by(|a, b| b.date.cmp(&a.date));

    let mut deleted = Vec::with_capacity(files.len() - keep);
    for old in files.into_iter().skip(keep) {
        fs::remove_file(&old.path)?;
        info!("Deleted old file: {}", old.path.display());
        deleted.push(old.path);
    }

    info!("Cleanup complete. Kept {} most recent files", keep);
    Ok(deleted)
}
