//! End-to-end integration tests for the linksec CLI.
//!
//! These tests run the actual compiled binary with a clean working directory
//! for each test.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a fresh linksec command running in an isolated temp directory.
fn linksec_cmd(tempdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("linksec").unwrap();
    cmd.current_dir(tempdir.path());
    cmd
}

fn is_hex_secret(content: &str) -> bool {
    content.len() == 64 && content.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}

#[test]
fn test_no_args_writes_default_secret_file() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("crypto_data")).unwrap();

    linksec_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Saved LinkSecretFile to ./crypto_data/link_secret.txt",
        ));

    let content = fs::read_to_string(temp.path().join("crypto_data/link_secret.txt")).unwrap();
    assert!(is_hex_secret(&content), "expected 64 hex chars, got: {content:?}");
}

#[test]
fn test_missing_directory_fails_with_diagnostic() {
    let temp = TempDir::new().unwrap();
    // no crypto_data directory

    linksec_cmd(&temp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write"));

    assert!(
        !temp.path().join("crypto_data").exists(),
        "the directory must not be created"
    );
}

#[test]
fn test_custom_dir_and_file_name() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("keys")).unwrap();

    linksec_cmd(&temp)
        .arg("--dir")
        .arg("keys")
        .arg("--file")
        .arg("out.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved LinkSecretFile to"));

    let content = fs::read_to_string(temp.path().join("keys/out.txt")).unwrap();
    assert!(is_hex_secret(&content));
}

#[test]
fn test_rerun_overwrites_with_fresh_secret() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("crypto_data")).unwrap();
    let secret_path = temp.path().join("crypto_data/link_secret.txt");

    linksec_cmd(&temp).assert().success();
    let first = fs::read_to_string(&secret_path).unwrap();

    linksec_cmd(&temp).assert().success();
    let second = fs::read_to_string(&secret_path).unwrap();

    assert!(is_hex_secret(&second));
    assert_ne!(first, second, "each run must generate a new secret");
}
