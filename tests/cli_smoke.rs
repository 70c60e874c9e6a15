use assert_cmd::prelude::*;
use chrono::{DateTime, TimeZone, Utc};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) {
    assert!(Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn init_git_repo(dir: &Path) {
    git(dir, &["init"]);
    git(dir, &["config", "core.autocrlf", "false"]);
    git(dir, &["config", "user.email", "you@example.com"]);
    git(dir, &["config", "user.name", "Your Name"]);
}

fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

/// Commits a file with a fixed author name and author date.
fn commit_as(dir: &Path, name: &str, author: &str, when: DateTime<Utc>) {
    let date = format!("{} +0000", when.timestamp());
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = File::create(&path).unwrap();
    f.write_all(format!("{author} {date}\n").as_bytes()).unwrap();
    f.sync_all().unwrap();
    git(dir, &["add", "."]);
    assert!(Command::new("git")
        .args(["commit", "-m", &format!("add {name}")])
        .env("GIT_AUTHOR_NAME", author)
        .env("GIT_AUTHOR_EMAIL", format!("{author}@example.com"))
        .env("GIT_AUTHOR_DATE", &date)
        .env("GIT_COMMITTER_DATE", &date)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn sample_repo(dir: &Path) {
    init_git_repo(dir);
    commit_as(dir, "old.txt", "ancient", utc(2019, 12, 31, 12));
    commit_as(dir, "a1.txt", "alice", utc(2020, 1, 5, 10));
    commit_as(dir, "a2.txt", "alice", utc(2020, 2, 10, 10));
    commit_as(dir, "a3.txt", "alice", utc(2020, 2, 11, 10));
    commit_as(dir, "b1.txt", "bob", utc(2020, 2, 12, 10));
    // first second of March belongs to March
    commit_as(dir, "c1.txt", "carol", utc(2020, 3, 1, 0));
    commit_as(dir, "new.txt", "future", utc(2020, 4, 1, 0));
}

fn export_json(dir: &Path, extra: &[&str]) -> serde_json::Value {
    let mut cmd = Command::cargo_bin("gchart").unwrap();
    cmd.current_dir(dir)
        .arg("--repo")
        .arg(dir)
        .args(["--start", "202001", "--end", "202003", "--quiet"])
        .args(extra)
        .args(["export", "--json"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn export_json_buckets_commits_by_month() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    sample_repo(dir.path());

    let v = export_json(dir.path(), &[]);
    let counts: Vec<u64> = v["months"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["commit_count"].as_u64().unwrap())
        .collect();
    assert_eq!(counts, vec![1, 3, 1]);
    assert_eq!(v["total_commits"].as_u64(), Some(5));
    assert_eq!(v["excluded_commits"].as_u64(), Some(2));
    assert_eq!(v["buckets"][1]["authors"]["alice"].as_u64(), Some(2));
    assert_eq!(v["buckets"][1]["authors"]["bob"].as_u64(), Some(1));
}

#[test]
fn threshold_groups_small_authors() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    sample_repo(dir.path());

    let v = export_json(dir.path(), &["--threshold", "2"]);
    let entries = v["authors"]["entries"].as_array().unwrap();
    let others = entries.iter().find(|e| e["grouped"] == true).unwrap();
    assert_eq!(others["name"], "others");
    assert_eq!(others["commits"].as_u64(), Some(2));
    assert_eq!(v["authors"]["grouped_authors"].as_u64(), Some(2));
    assert_eq!(v["authors"]["total_authors"].as_u64(), Some(3));

    let v = export_json(dir.path(), &["--threshold", "0"]);
    let entries = v["authors"]["entries"].as_array().unwrap();
    assert!(entries.iter().all(|e| e["grouped"] == false));
    assert_eq!(entries.len(), 3);
}

#[test]
fn chart_writes_html_page() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    sample_repo(dir.path());
    let output = dir.path().join("report.html");

    let mut cmd = Command::cargo_bin("gchart").unwrap();
    cmd.current_dir(dir.path())
        .arg("--repo")
        .arg(dir.path())
        .args(["--start", "202001", "--end", "202003"])
        .arg("chart")
        .arg("--output")
        .arg(&output);
    cmd.assert().success();

    let page = fs::read_to_string(&output).unwrap();
    assert!(page.contains("Git commits per month (5 in total)"));
    assert!(page.contains(r#"["Jan-20","Feb-20","Mar-20"]"#));
}

#[test]
fn summary_prints_months() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    sample_repo(dir.path());

    let mut cmd = Command::cargo_bin("gchart").unwrap();
    cmd.current_dir(dir.path())
        .arg("--repo")
        .arg(dir.path())
        .args(["--start", "202001", "--end", "202003", "summary"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Jan-20"));
    assert!(text.contains("Mar-20"));
    assert!(text.contains("alice"));
}

#[test]
fn invalid_range_fails_without_output() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    sample_repo(dir.path());
    let output = dir.path().join("never.html");

    let mut cmd = Command::cargo_bin("gchart").unwrap();
    cmd.current_dir(dir.path())
        .arg("--repo")
        .arg(dir.path())
        .args(["--start", "202003", "--end", "202001"])
        .arg("chart")
        .arg("--output")
        .arg(&output);
    cmd.assert().failure();
    assert!(!output.exists());
}

#[test]
fn malformed_start_token_fails() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("gchart").unwrap();
    cmd.current_dir(dir.path())
        .args(["--start", "2020-1", "summary"]);
    let out = cmd.assert().failure().get_output().stderr.clone();
    assert!(String::from_utf8_lossy(&out).contains("Invalid date format"));
}
