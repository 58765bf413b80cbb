//! Runs the binary with scripted stdin.

use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn board_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mbti-board"))
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = board_cmd()
        .args(args)
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn empty_config() -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();
    let path = path.to_string_lossy().into_owned();
    (dir, path)
}

#[test]
fn test_help_lists_options() {
    let output = board_cmd().arg("--help").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--base-url"));
    assert!(stdout.contains("--page-size"));
}

#[test]
fn test_invalid_page_size_exits_with_error() {
    let (_dir, config) = empty_config();
    let output = run_with_stdin(&["--config", &config, "--page-size", "0"], "");
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("items_per_page"), "stderr: {}", stderr);
}

#[test]
fn test_unreachable_service_still_starts() {
    let (_dir, config) = empty_config();
    let output = run_with_stdin(
        &["--config", &config, "--base-url", "http://127.0.0.1:1"],
        "categories\nquit\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("error: Request failed"));
    assert!(stdout.contains("ISTJ ISFJ INFJ INTJ"));
}
