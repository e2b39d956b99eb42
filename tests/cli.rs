//! Integration tests for top-level CLI behavior.

use std::process::Command;

fn run_gradewatch(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_gradewatch");
    Command::new(bin).args(args).output().expect("failed to run gradewatch binary")
}

#[test]
fn help_shows_flags() {
    let output = run_gradewatch(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--roster"));
}

#[test]
fn version_prints_crate_version() {
    let output = run_gradewatch(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("gradewatch"));
}

#[test]
fn missing_config_file_fails_with_message() {
    let output = run_gradewatch(&["--config", "/no/such/gradewatch.yaml"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Failed to read config"));
}

#[test]
fn unknown_flag_fails() {
    let output = run_gradewatch(&["--frobnicate"]);
    assert!(!output.status.success());
}
