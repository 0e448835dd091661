//! Tests for error handling, exit codes, and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_error_empty_idea() {
    let mut cmd = Command::cargo_bin("ideaforge").unwrap();
    cmd.args(["generate", ""]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid input"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_error_whitespace_idea() {
    let mut cmd = Command::cargo_bin("ideaforge").unwrap();
    cmd.args(["new", "   ", "--yes"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_error_project_exists_suggests_force() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("taken")).unwrap();

    let mut cmd = Command::cargo_bin("ideaforge").unwrap();
    cmd.current_dir(temp.path())
        .args(["new", "notes app", "--out", "taken", "--yes"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"))
        .stderr(predicate::str::contains("--out"));
}

#[test]
fn test_error_force_overwrites_existing_project() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("taken")).unwrap();
    std::fs::write(temp.path().join("taken/stale.txt"), "old").unwrap();

    let mut cmd = Command::cargo_bin("ideaforge").unwrap();
    cmd.current_dir(temp.path())
        .args(["new", "notes app", "--out", "taken", "--yes", "--force"]);

    cmd.assert().success();

    let project = temp.path().join("taken");
    assert!(project.join("package.json").exists());
    assert!(!project.join("stale.txt").exists());
}

#[test]
fn test_error_declined_confirmation_cancels() {
    let temp = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("ideaforge").unwrap();
    cmd.current_dir(temp.path())
        .args(["new", "notes app", "--out", "declined"])
        .write_stdin("n\n");

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Operation cancelled"));

    assert!(!temp.path().join("declined").exists());
}

#[test]
fn test_error_missing_config_file() {
    let mut cmd = Command::cargo_bin("ideaforge").unwrap();
    cmd.args(["--config", "/nonexistent/ideaforge.toml", "rules"]);

    cmd.assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_error_unknown_config_key() {
    let mut cmd = Command::cargo_bin("ideaforge").unwrap();
    cmd.args(["config", "get", "no.such.key"]);

    cmd.assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_error_invalid_shell_is_a_parse_error() {
    let mut cmd = Command::cargo_bin("ideaforge").unwrap();
    cmd.args(["completions", "tcsh"]);

    cmd.assert().failure().code(2);
}
