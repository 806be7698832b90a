//! CLI integration tests for journaltxt
//!
//! These tests run the real binaries against journal files in a temporary
//! directory and inspect the generated posts.

use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a command instance for the journaltxt binary
fn journaltxt_cmd(home: &Path) -> assert_cmd::Command {
    command(assert_cmd::cargo::cargo_bin!("journaltxt"), home)
}

/// Get a command instance for the `jo` alias
fn jo_cmd(home: &Path) -> assert_cmd::Command {
    command(assert_cmd::cargo::cargo_bin!("jo"), home)
}

/// Isolates the command from any user configuration
fn command(bin: impl AsRef<Path>, home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(bin.as_ref());
    cmd.env_remove("JOURNALTXT_CONFIG")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .current_dir(home);
    cmd
}

fn data_file(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
}

/// Copies a fixture journal into the temp directory
fn setup_journal(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::copy(data_file(name), &path).unwrap();
    path
}

fn posts_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".md"))
        .collect();
    names.sort();
    names
}

/// Parses the YAML front matter of a generated post
fn front_matter(path: &Path) -> serde_yaml::Mapping {
    let content = fs::read_to_string(path).unwrap();
    let header = content.split("---\n").nth(1).unwrap();
    serde_yaml::from_str(header).unwrap()
}

fn title_of(path: &Path) -> String {
    front_matter(path)["title"].as_str().unwrap().to_string()
}

// =============================================================================
// Build Tests
// =============================================================================

#[test]
fn test_build_journal_fixture() {
    let dir = TempDir::new().unwrap();
    setup_journal(&dir, "journal.txt");
    let out = dir.path().join("_posts");

    journaltxt_cmd(dir.path())
        .args(["-o", "_posts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Writing entry 1/5 >Day 1 - Wed, 19 Jul<"))
        .stdout(predicate::str::contains("Writing entry 5/5"))
        .stdout(predicate::str::contains("\"posts\"").not());

    assert_eq!(
        posts_in(&out),
        vec![
            "2017-07-19-journal.md",
            "2017-07-20-journal.md",
            "2017-07-21-journal.md",
            "2017-07-22-journal.md",
            "2017-07-23-journal.md",
        ]
    );
}

#[test]
fn test_name_derived_from_file() {
    let dir = TempDir::new().unwrap();
    let journal = setup_journal(&dir, "vienna.txt");

    journaltxt_cmd(dir.path()).arg(&journal).assert().success();

    let first = dir.path().join("2017-07-17-vienna.md");
    assert!(first.is_file());
    assert_eq!(title_of(&first), "vienna - Day 1 - Mon, 17 Jul");
    assert!(dir.path().join("2017-07-19-vienna.md").is_file());
}

#[test]
fn test_explicit_name_and_no_date() {
    let dir = TempDir::new().unwrap();
    let journal = setup_journal(&dir, "vienna.txt");

    journaltxt_cmd(dir.path())
        .arg(&journal)
        .args(["--name", "Vienna", "--no-date", "-o", "out"])
        .assert()
        .success();

    let out = dir.path().join("out");
    assert_eq!(posts_in(&out).len(), 3);
    assert_eq!(title_of(&out.join("2017-07-18-vienna.md")), "Vienna - Day 2");
}

#[test]
fn test_post_layout() {
    let dir = TempDir::new().unwrap();
    let journal = setup_journal(&dir, "journal.txt");

    journaltxt_cmd(dir.path()).arg(&journal).assert().success();

    let post = dir.path().join("2017-07-20-journal.md");
    let content = fs::read_to_string(&post).unwrap();

    assert!(content.starts_with("---\n# Journal.TXT entry 2/5 - auto-built on "));
    assert!(content.ends_with("---\n\nBreakfast at the station.\nLong walk along the river.\n\n"));

    let meta = front_matter(&post);
    assert_eq!(meta["author"].as_str(), Some("Gerald"));
    assert_eq!(meta["title"].as_str(), Some("Day 2 - Thu, 20 Jul"));
    assert!(meta.get("day").is_none());
    assert!(meta.get("year").is_none());
}

#[test]
fn test_preserves_custom_metadata() {
    let dir = TempDir::new().unwrap();
    let journal = setup_journal(&dir, "journal.txt");

    journaltxt_cmd(dir.path()).arg(&journal).assert().success();

    let meta = front_matter(&dir.path().join("2017-07-21-journal.md"));
    let tags: Vec<_> = meta["tags"]
        .as_sequence()
        .unwrap()
        .iter()
        .filter_map(|t| t.as_str())
        .collect();
    assert_eq!(tags, vec!["museums", "rain"]);
}

#[test]
fn test_multiple_files() {
    let dir = TempDir::new().unwrap();
    setup_journal(&dir, "journal.txt");
    setup_journal(&dir, "vienna.txt");

    journaltxt_cmd(dir.path())
        .args(["journal.txt", "vienna.txt", "-o", "site"])
        .assert()
        .success();

    assert_eq!(posts_in(&dir.path().join("site")).len(), 8);
}

#[test]
fn test_creates_nested_output_directory() {
    let dir = TempDir::new().unwrap();
    setup_journal(&dir, "journal.txt");

    journaltxt_cmd(dir.path())
        .args(["-o", "nested/output/dir"])
        .assert()
        .success();

    assert!(dir.path().join("nested/output/dir").is_dir());
}

#[test]
fn test_jo_alias() {
    let dir = TempDir::new().unwrap();
    setup_journal(&dir, "journal.txt");

    jo_cmd(dir.path()).assert().success();

    assert_eq!(posts_in(dir.path()).len(), 5);
}

#[test]
fn test_json_format() {
    let dir = TempDir::new().unwrap();
    setup_journal(&dir, "vienna.txt");

    let output = journaltxt_cmd(dir.path())
        .args(["vienna.txt", "--format", "json", "-n", "Vienna"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let posts = json["posts"].as_array().unwrap();

    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0]["title"], "Vienna - Day 1 - Mon, 17 Jul");
    assert_eq!(posts[2]["date"], "2017-07-19");
    assert_eq!(posts[2]["total"], 3);
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_config_file_sets_defaults() {
    let dir = TempDir::new().unwrap();
    setup_journal(&dir, "journal.txt");
    let config = dir.path().join("journaltxt.toml");
    fs::write(&config, "[build]\noutput = \"from-config\"\ndate = false\n").unwrap();

    journaltxt_cmd(dir.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let post = dir.path().join("from-config").join("2017-07-19-journal.md");
    assert_eq!(title_of(&post), "Day 1");
}

#[test]
fn test_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    setup_journal(&dir, "journal.txt");
    let config = dir.path().join("journaltxt.toml");
    fs::write(&config, "[build]\noutput = \"from-config\"\ndate = false\n").unwrap();

    journaltxt_cmd(dir.path())
        .env("JOURNALTXT_CONFIG", &config)
        .args(["--date", "-o", "from-flag"])
        .assert()
        .success();

    let post = dir.path().join("from-flag").join("2017-07-19-journal.md");
    assert_eq!(title_of(&post), "Day 1 - Wed, 19 Jul");
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    setup_journal(&dir, "journal.txt");

    journaltxt_cmd(dir.path())
        .args(["--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    journaltxt_cmd(dir.path())
        .arg("missing.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: File not found: missing.txt"));
}

#[test]
fn test_invalid_entry_reports_ordinal() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("bad.txt"),
        "---\nyear: 2017\nmonth: 2\nday: 28\n---\nOk.\n---\nday: 30\n---\nNope.\n",
    )
    .unwrap();

    journaltxt_cmd(dir.path())
        .arg("bad.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry 2: invalid date (2017-2-30)"));

    assert!(posts_in(dir.path()).is_empty());
}

#[test]
fn test_invalid_yaml_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("bad.txt"),
        "---\nyear: 2017\nmonth: 7\nday: [invalid yaml structure\n---\nContent.\n",
    )
    .unwrap();

    journaltxt_cmd(dir.path())
        .arg("bad.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid YAML in entry 1"));
}

#[test]
fn test_empty_journal_writes_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("journal.txt"), "").unwrap();

    journaltxt_cmd(dir.path()).assert().success();

    assert!(posts_in(dir.path()).is_empty());
}

// =============================================================================
// Misc Tests
// =============================================================================

#[test]
fn test_verbose_prints_banner() {
    let dir = TempDir::new().unwrap();
    setup_journal(&dir, "journal.txt");

    journaltxt_cmd(dir.path())
        .arg("-v")
        .assert()
        .success()
        .stderr(predicate::str::contains("[verbose] journaltxt/"))
        .stderr(predicate::str::contains("[verbose:parse] Parsed 5 entries"));
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();

    journaltxt_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
