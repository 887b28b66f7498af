//! Binary-level tests that never reach a real clipboard.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// `copy` with colours off and config pointed into `dir`.
fn copy_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("copy").unwrap();
    cmd.env("NO_COLOR", "1")
        .env("COPY_CONFIG", dir.join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_describes_usage() {
    let temp = TempDir::new().unwrap();
    copy_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Copy file contents or stdin to clipboard"))
        .stdout(predicate::str::contains("--force"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn piped_binary_is_blocked() {
    let temp = TempDir::new().unwrap();
    copy_cmd(temp.path())
        .write_stdin(&b"abc\0def"[..])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input appears to be binary (null byte)"))
        .stderr(predicate::str::contains("Use -f to force copy"));
}

#[test]
fn oversized_stdin_is_rejected() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "[input]\nmax_file_size = 4\n").unwrap();

    copy_cmd(temp.path())
        .write_stdin("hello world")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn invalid_config_is_reported() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("config.toml"),
        "[binary]\nmin_printable_ratio = 2.0\n",
    )
    .unwrap();

    copy_cmd(temp.path())
        .write_stdin("hello")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn unreadable_config_is_reported() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("config.toml")).unwrap();

    copy_cmd(temp.path())
        .write_stdin("hello")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Config error: Failed to read config file",
        ));
}

#[test]
fn unknown_flag_is_a_usage_failure() {
    let temp = TempDir::new().unwrap();
    copy_cmd(temp.path())
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bogus"));
}
