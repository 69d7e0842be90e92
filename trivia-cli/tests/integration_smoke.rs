//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--in-memory"));
}

#[test]
fn test_serve_requires_database_url() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.env_remove("DATABASE_URL").arg("serve");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--database-url"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("trivia"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("--version");

    cmd.assert().success();
}
