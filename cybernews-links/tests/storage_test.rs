mod common;

use common::{date, init_tracing, read_lines};
use cybernews_links::{history, retention, weekly_file, writer};
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_weekly_file_naming() {
    let day = date(2024, 1, 15);
    assert_eq!(weekly_file::file_name(day), "cybernews_links_week_2024-01-15.txt");
    assert_eq!(weekly_file::parse_date("cybernews_links_week_2024-01-15.txt"), Some(day));

    assert_eq!(weekly_file::parse_date("cybernews_links_week_2024-13-45.txt"), None);
    assert_eq!(weekly_file::parse_date("cybernews_links_week_2024-01-15.txt.bak"), None);
    assert_eq!(weekly_file::parse_date("other_2024-01-15.txt"), None);
    assert_eq!(weekly_file::parse_date("cybernews_links_week_24-01-15.txt"), None);
}

#[test]
fn test_history_missing_directory_is_empty() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();

    let links = history::load(&temp_dir.path().join("does-not-exist")).unwrap();
    assert!(links.is_empty());
}

#[test]
fn test_history_is_union_of_weekly_files() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    fs::write(
        dir.join("cybernews_links_week_2024-01-01.txt"),
        "https://a.example/1\nhttps://a.example/2  \n",
    )
    .unwrap();
    fs::write(
        dir.join("cybernews_links_week_2024-01-08.txt"),
        "https://a.example/2\r\nhttps://b.example/3",
    )
    .unwrap();
    fs::write(dir.join("notes.txt"), "https://ignored.example/x").unwrap();
    fs::create_dir(dir.join("cybernews_links_week_2024-01-09.txt")).unwrap();

    let links = history::load(dir).unwrap();
    let expected: HashSet<String> = ["https://a.example/1", "https://a.example/2", "https://b.example/3"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(links, expected);
}

#[test]
fn test_prune_keeps_most_recent() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    for day in ["2024-01-08", "2023-12-25", "2024-01-15", "2024-01-01"] {
        fs::write(dir.join(format!("cybernews_links_week_{}.txt", day)), "x").unwrap();
    }
    fs::write(dir.join("unrelated.txt"), "x").unwrap();

    let deleted = retention::prune(dir, 2).unwrap();
    assert_eq!(deleted.len(), 2);

    let remaining: HashSet<_> = weekly_file::list(dir).unwrap().into_iter().map(|f| f.date).collect();
    let expected: HashSet<_> = [date(2024, 1, 15), date(2024, 1, 8)].into_iter().collect();
    assert_eq!(remaining, expected);
    assert_eq!(
        deleted.last().unwrap().file_name().unwrap(),
        "cybernews_links_week_2023-12-25.txt"
    );
    assert!(dir.join("unrelated.txt").exists());
}

#[test]
fn test_prune_noop_when_within_limit() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    fs::write(dir.join("cybernews_links_week_2024-01-01.txt"), "x").unwrap();
    fs::write(dir.join("cybernews_links_week_2024-01-08.txt"), "x").unwrap();

    assert!(retention::prune(dir, 2).unwrap().is_empty());
    assert!(retention::prune(dir, 5).unwrap().is_empty());
    assert_eq!(weekly_file::list(dir).unwrap().len(), 2);
}

#[test]
fn test_prune_deletes_exactly_excess_files() {
    init_tracing();
    for keep in 1..=6 {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        for day in 1..=4 {
            fs::write(dir.join(format!("cybernews_links_week_2024-02-0{}.txt", day)), "x").unwrap();
        }

        let deleted = retention::prune(dir, keep).unwrap();
        assert_eq!(deleted.len(), 4usize.saturating_sub(keep));

        let oldest_kept = weekly_file::list(dir).unwrap().into_iter().map(|f| f.date).min();
        if let Some(oldest_kept) = oldest_kept {
            for path in &deleted {
                let name = path.file_name().unwrap().to_str().unwrap();
                assert!(weekly_file::parse_date(name).unwrap() < oldest_kept);
            }
        }
    }
}

#[test]
fn test_write_skips_empty_links() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("out");

    let written = writer::write(&dir, date(2024, 1, 15), &[], 1).unwrap();
    assert!(written.is_none());
    assert!(!dir.exists());
}

#[test]
fn test_write_creates_directory_and_file() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("nested").join("out");
    let links = vec!["https://a.example/1".to_string(), "https://a.example/2".to_string()];

    let path = writer::write(&dir, date(2024, 1, 15), &links, 1).unwrap().unwrap();
    assert_eq!(path, dir.join("cybernews_links_week_2024-01-15.txt"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "https://a.example/1\nhttps://a.example/2");
}

#[test]
fn test_write_then_prune_scenario() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(dir.join("cybernews_links_week_2024-01-01.txt"), "https://old.example/1").unwrap();
    fs::write(dir.join("cybernews_links_week_2024-01-08.txt"), "https://old.example/2").unwrap();

    let links = vec!["https://new.example/1".to_string()];
    writer::write(dir, date(2024, 1, 15), &links, 1).unwrap();

    let names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec!["cybernews_links_week_2024-01-15.txt".to_string()]);
}

#[test]
fn test_same_day_write_appends() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    let day = date(2024, 1, 15);

    writer::write(dir, day, &["https://a.example/1".to_string()], 1).unwrap();
    let path = writer::write(dir, day, &["https://a.example/2".to_string()], 1)
        .unwrap()
        .unwrap();

    assert_eq!(read_lines(&path), vec!["https://a.example/1", "https://a.example/2"]);
    assert_eq!(history::load(dir).unwrap().len(), 2);
}
