//! Tests for the one-shot `--keys` mode of the binary.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs the binary against an empty config dir so user config never leaks in.
fn run_keys(keys: &str) -> (Output, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config: PathBuf = dir.path().join("config.toml");
    let output = Command::new(env!("CARGO_BIN_EXE_tapcalc"))
        .arg("--config")
        .arg(&config)
        .arg("--keys")
        .arg(keys)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute command");
    (output, dir)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_help_mentions_keys_option() {
    let output = Command::new(env!("CARGO_BIN_EXE_tapcalc"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("--keys"));
    assert!(text.contains("--config"));
}

#[test]
fn test_precedence_expression() {
    let (output, _dir) = run_keys("2*3+4=");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "10");
}

#[test]
fn test_whitespace_is_ignored() {
    let (output, _dir) = run_keys("5 + 3 =");
    assert_eq!(stdout(&output), "8");
}

#[test]
fn test_typed_trailing_zeroes_are_printed() {
    let (output, _dir) = run_keys("3.00");
    assert_eq!(stdout(&output), "3.00");
}

#[test]
fn test_division_by_zero_prints_error() {
    let (output, _dir) = run_keys("1/0=");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Error");
}

#[test]
fn test_unknown_key_exits_with_code_two() {
    let (output, _dir) = run_keys("2^3");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown key '^'"), "stderr: {stderr}");
}

#[test]
fn test_legacy_division_from_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[engine]\ndivision = \"product\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_tapcalc"))
        .arg("--config")
        .arg(&config)
        .arg("--keys")
        .arg("9/4=")
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute command");
    assert_eq!(stdout(&output), "36");
}
