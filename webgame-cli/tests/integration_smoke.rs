//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

/// Nothing listens on port 1, so any query fails to connect.
const UNREACHABLE_DB: &str = "mysql://root@127.0.0.1:1/WebGame";

fn webgame() -> Command {
    let mut cmd = Command::cargo_bin("webgame").unwrap();
    // Keep the developer's own settings out of the way
    cmd.env_remove("DATABASE_URL").env_remove("WEBGAME_BIND");
    cmd
}

// === Help Tests ===

#[test]
fn test_top_level_help() {
    webgame()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("games"));
}

#[test]
fn test_serve_help() {
    webgame()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"));
}

#[test]
fn test_games_insert_help() {
    webgame()
        .arg("games")
        .arg("insert")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--price"));
}

// === Games Command Tests ===

#[test]
fn test_games_without_database_url() {
    let dir = tempfile::tempdir().unwrap();

    // No .env in the working directory and no ~/.webgame/config.toml
    webgame()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .arg("games")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_empty_user_key_fails_before_connecting() {
    webgame()
        .arg("games")
        .arg("--database-url")
        .arg(UNREACHABLE_DB)
        .arg("user-level")
        .arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("user key can not be null"));
}

#[test]
fn test_unreachable_database_fails() {
    webgame()
        .arg("games")
        .arg("--database-url")
        .arg(UNREACHABLE_DB)
        .arg("get")
        .arg("5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("database error"));
}

#[test]
fn test_bad_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("webgame.toml");
    std::fs::write(&path, "[server]\nbind_addr = 12").unwrap();

    webgame()
        .arg("serve")
        .arg("--config")
        .arg(&path)
        .arg("--in-memory")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
