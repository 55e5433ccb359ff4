// sanitize-filename/tests/cli_integration_tests.rs
//! Command-line integration tests for the `sanitize-filename` binary.
//!
//! These run the compiled binary with `assert_cmd`, feed it stdin, and check
//! stdout and the exit status. `tempfile` provides options files.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;
use test_log::test;

/// Runs the binary with `args`, feeding `input` on stdin.
fn run_command(input: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("sanitize-filename").unwrap();
    cmd.env("RUST_LOG", "debug");
    cmd.env_remove("SANITIZE_FILENAME_REPLACEMENT");
    cmd.args(args);
    cmd.write_stdin(input.as_bytes());
    cmd.assert()
}

#[test]
fn test_sanitize_arguments() {
    run_command("", &["sanitize", "h?w", "aux.txt", "mr  "])
        .success()
        .stdout("hw\n\nmr\n");
}

#[test]
fn test_sanitize_stdin_lines() {
    run_command("a/b\r\n..\nreport.pdf\n", &["sanitize", "-r", "_"])
        .success()
        .stdout("a_b\n_\nreport.pdf\n");
}

#[test]
fn test_sanitize_fallback() {
    run_command("", &["sanitize", "--fallback", "untitled", "con", "ok"])
        .success()
        .stdout("untitled\nok\n");
}

#[test]
fn test_replacement_from_environment() {
    let mut cmd = Command::cargo_bin("sanitize-filename").unwrap();
    cmd.env("SANITIZE_FILENAME_REPLACEMENT", "-");
    cmd.args(["sanitize", "a:b"]);
    cmd.assert().success().stdout("a-b\n");
}

#[test]
fn test_config_file_and_flag_override() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"replacement: \"+\"\nmax_bytes: 5\n")?;
    let path = file.path().to_str().unwrap().to_string();

    run_command("", &["sanitize", "--config", &path, "ab?cdefg"])
        .success()
        .stdout("ab+cd\n");

    run_command("", &["sanitize", "--config", &path, "--max-bytes", "3", "ab?cdefg"])
        .success()
        .stdout("ab+\n");
    Ok(())
}

#[test]
fn test_oversized_budget_fails() {
    run_command("", &["sanitize", "--max-bytes", "300", "x"])
        .failure()
        .stderr(predicate::str::contains("300"));
}

#[test]
fn test_check_exit_status() {
    run_command("", &["check", "fine.txt"]).success().stdout(predicate::str::contains("ok"));
    run_command("", &["check", "fine.txt", "COM1.log"])
        .failure()
        .stdout(predicate::str::contains("windows_reserved"));
}

#[test]
fn test_check_json() {
    let output = run_command("", &["check", "--json", "a|b"]).failure().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value[0]["sanitized"], "ab");
    assert_eq!(value[0]["violations"][0]["matched"], "|");
}

#[test]
fn test_rules_listing() {
    run_command("", &["rules"])
        .success()
        .stdout(predicate::str::contains("1. illegal_characters"))
        .stdout(predicate::str::contains("truncate to 255 bytes"));
}

#[test]
fn test_quiet_suppresses_logs() {
    run_command("", &["--quiet", "sanitize", "x"]).success().stderr("");
}
