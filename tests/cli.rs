//! End-to-end tests for the stackarena binary
//!
//! Each test feeds input through stdin or temporary files and checks the
//! exact bytes written to stdout, plus the exit status for failures.

use std::io::{ErrorKind, Write};
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

/// Run stackarena with `input` on stdin
fn run_stackarena(input: &[u8], args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stackarena"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn stackarena");

    if let Some(mut stdin) = cmd.stdin.take() {
        // Argument errors exit before stdin is read
        if let Err(e) = stdin.write_all(input) {
            assert_eq!(e.kind(), ErrorKind::BrokenPipe, "failed to write stdin: {}", e);
        }
    }

    cmd.wait_with_output().expect("failed to wait")
}

fn stdout_of(input: &[u8], args: &[&str]) -> String {
    let output = run_stackarena(input, args);
    assert!(
        output.status.success(),
        "stackarena failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

fn temp_input(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

// ============================================================
// Sorting
// ============================================================

#[test]
fn test_sort_stdin() {
    assert_eq!(stdout_of(b"5 3 4 1 2\n", &[]), "1 2 3 4 5\n");
}

#[test]
fn test_sort_newline_separated() {
    assert_eq!(stdout_of(b"10\n-2\n7\n-2\n", &[]), "-2 -2 7 10\n");
}

#[test]
fn test_sort_empty_input() {
    assert_eq!(stdout_of(b"", &[]), "\n");
}

#[test]
fn test_sort_stable_flag() {
    assert_eq!(stdout_of(b"3 1 2 1 0", &["--stable"]), "0 1 1 2 3\n");
}

#[test]
fn test_sort_files_are_concatenated() {
    let a = temp_input(b"9 8 7\n");
    let b = temp_input(b"3 2 1\n");
    let a_path = a.path().to_str().unwrap();
    let b_path = b.path().to_str().unwrap();
    assert_eq!(stdout_of(b"", &[a_path, b_path]), "1 2 3 7 8 9\n");
}

#[test]
fn test_sort_dash_reads_stdin() {
    let file = temp_input(b"4 6\n");
    let path = file.path().to_str().unwrap();
    assert_eq!(stdout_of(b"5\n", &[path, "-"]), "4 5 6\n");
}

#[test]
fn test_output_file() {
    let out = NamedTempFile::new().unwrap();
    let out_path = out.path().to_str().unwrap();
    assert_eq!(stdout_of(b"2 1", &["-o", out_path]), "");
    assert_eq!(std::fs::read(out.path()).unwrap(), b"1 2\n");
}

// ============================================================
// Arena capacity
// ============================================================

#[test]
fn test_capacity_large_enough() {
    assert_eq!(stdout_of(b"4 3 2 1", &["-c", "1k"]), "1 2 3 4\n");
}

#[test]
fn test_capacity_too_small_fails() {
    let output = run_stackarena(b"8 7 6 5 4 3 2 1", &["-c", "7"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of capacity"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_short_input_needs_no_capacity() {
    assert_eq!(stdout_of(b"3 1 2", &["-c", "0"]), "1 2 3\n");
}

#[test]
fn test_invalid_capacity() {
    let output = run_stackarena(b"1", &["-c", "huge"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid capacity"));
}

#[test]
fn test_oversized_capacity_is_an_error() {
    let output = run_stackarena(b"2 1", &["-c", &usize::MAX.to_string()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.starts_with("stackarena: cannot allocate backing storage"),
        "stderr: {}",
        stderr
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_debug_report() {
    let output = run_stackarena(b"5 4 3 2 1", &["--debug"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("capacity: 5"), "stderr: {}", stderr);
    assert!(stderr.contains("peak used: 5"), "stderr: {}", stderr);
    assert_eq!(output.stdout, b"1 2 3 4 5\n");
}

// ============================================================
// Membership and input errors
// ============================================================

#[test]
fn test_contains() {
    assert_eq!(stdout_of(b"1 2 3", &["--contains", "3"]), "true\n");
    assert_eq!(stdout_of(b"1 2 3", &["--contains", "5"]), "false\n");
    assert_eq!(stdout_of(b"", &["--contains", "0"]), "false\n");
    assert_eq!(stdout_of(b"-4 9", &["--contains", "-4"]), "true\n");
}

#[test]
fn test_invalid_number() {
    let output = run_stackarena(b"1 two 3", &[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid number: two"));
}

#[test]
fn test_missing_file() {
    let output = run_stackarena(b"", &["/nonexistent/stackarena-input"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("stackarena: I/O error"));
}
