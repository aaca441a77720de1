//! Naming and discovery of the dated weekly link files.

use crate::types::Result;
use chrono::NaiveDate;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub const FILE_PREFIX: &str = "cybernews_links_week_";
pub const FILE_EXTENSION: &str = "txt";
const DATE_FORMAT: &str = "%Y-%m-%d";

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^cybernews_links_week_(\d{4}-\d{2}-\d{2})\.txt$").unwrap());

/// A weekly file found on disk together with the date in its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyFile {
    pub path: PathBuf,
    pub date: NaiveDate,
}

/// File name for the weekly file of `date`, e.g. `cybernews_links_week_2024-01-15.txt`.
pub fn file_name(date: NaiveDate) -> String {
    format!("{}{}.{}", FILE_PREFIX, date.format(DATE_FORMAT), FILE_EXTENSION)
}

pub fn file_path(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(file_name(date))
}

/// Date embedded in a weekly file name. `None` for names outside the pattern,
/// including ones like `..._2024-13-45.txt` that are shaped right but not a real date.
pub fn parse_date(name: &str) -> Option<NaiveDate> {
    let captures = NAME_PATTERN.captures(name)?;
    NaiveDate::parse_from_str(captures.get(1)?.as_str(), DATE_FORMAT).ok()
}

/// Weekly files in `dir`, in directory listing order.
///
/// A missing directory yields an empty list.
pub fn list(dir: &Path) -> Result<Vec<WeeklyFile>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(date) = name.to_str().and_then(parse_date) else {
            continue;
        };
        if !entry.file_type()?.is_file() {
            continue;
        }
        files.push(WeeklyFile {
            path: entry.path(),
            date,
        });
    }
    Ok(files)
}
