//! Integration tests for the mdbridge CLI
//!
//! Tests end-to-end command behavior using the CLI binary.
//! Uses tempfile for isolated test directories.

use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Get the path to the mdbridge binary (built by cargo)
fn mdbridge_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mdbridge"))
}

/// Run mdbridge with the given args in the specified directory
fn run_mdbridge(dir: &Path, args: &[&str]) -> Output {
    mdbridge_binary()
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute mdbridge command")
}

/// Get stdout as string
fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as string
fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Write a JSON config file into the temp directory
fn write_json(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write JSON file");
    path
}

// ============================================================================
// Extract Command Tests
// ============================================================================

#[test]
fn test_extract_nested_string() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_json(temp_dir.path(), "config.json", r#"{"a":{"b":"XYZ123"}}"#);

    let output = run_mdbridge(temp_dir.path(), &["extract", "config.json", "a.b"]);

    assert!(output.status.success(), "extract should succeed");
    assert_eq!(stdout(&output), "XYZ123\n");
}

#[test]
fn test_extract_firebase_style_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_json(
        temp_dir.path(),
        "firebase.json",
        r#"{"flutter":{"platforms":{"android":{"default":{"appId":"1:42:android:deadbeef"}}}}}"#,
    );

    let output = run_mdbridge(
        temp_dir.path(),
        &[
            "extract",
            "firebase.json",
            "flutter.platforms.android.default.appId",
        ],
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "1:42:android:deadbeef\n");
}

#[test]
fn test_extract_missing_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_mdbridge(temp_dir.path(), &["extract", "nope.json", "a.b"]);

    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("not found"),
        "stderr should mention missing file, got: {}",
        stderr(&output)
    );
    assert!(stdout(&output).is_empty(), "no partial output on failure");
}

#[test]
fn test_extract_malformed_json_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_json(temp_dir.path(), "bad.json", "{definitely not json");

    let output = run_mdbridge(temp_dir.path(), &["extract", "bad.json", "a.b"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to parse"));
}

#[test]
fn test_extract_missing_key_names_the_key() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_json(temp_dir.path(), "config.json", r#"{"a":{"b":"v"}}"#);

    let output = run_mdbridge(temp_dir.path(), &["extract", "config.json", "a.missing"]);

    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("missing"),
        "stderr should name the missing key, got: {}",
        stderr(&output)
    );
}

#[test]
fn test_extract_non_string_value_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_json(temp_dir.path(), "config.json", r#"{"a":{"b":{"c":1}}}"#);

    let output = run_mdbridge(temp_dir.path(), &["extract", "config.json", "a.b"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("not a string"));
}

#[test]
fn test_extract_wrong_argument_count_exits_one() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_mdbridge(temp_dir.path(), &["extract", "only-one-arg"]);

    // All failures exit 1, including usage errors
    assert_eq!(output.status.code(), Some(1));
    // clap prints usage to stderr
    assert!(stderr(&output).to_lowercase().contains("usage"));
}

#[test]
fn test_semantic_failure_exits_one() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_mdbridge(temp_dir.path(), &["extract", "nope.json", "a.b"]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_help_exits_zero() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_mdbridge(temp_dir.path(), &["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).to_lowercase().contains("usage"));
}

// ============================================================================
// Push Command Tests
// ============================================================================

/// Minimal one-shot HTTP server: accepts a single connection, reads the full
/// request (headers + declared body), responds 200 with no body, and hands
/// the request bytes back.
fn one_shot_http_server() -> (String, std::thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().unwrap();
    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("Failed to accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];

        // Read headers
        let header_end = loop {
            let n = stream.read(&mut buf).expect("Failed to read request");
            request.extend_from_slice(&buf[..n]);
            if let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        // Read the declared body
        let headers = String::from_utf8_lossy(&request[..header_end]).to_string();
        let content_length: usize = headers
            .lines()
            .find_map(|l| l.to_lowercase().strip_prefix("content-length:").map(str::to_string))
            .map(|v| v.trim().parse().unwrap_or(0))
            .unwrap_or(0);
        while request.len() - header_end < content_length {
            let n = stream.read(&mut buf).expect("Failed to read body");
            request.extend_from_slice(&buf[..n]);
        }

        stream
            .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\n\r\n")
            .expect("Failed to write response");
        String::from_utf8_lossy(&request).to_string()
    });
    (format!("http://{}/", addr), handle)
}

#[test]
fn test_push_file_to_server() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("notes.md"), "**bold**").unwrap();

    let (url, server) = one_shot_http_server();
    let output = run_mdbridge(temp_dir.path(), &["push", "notes.md", "--server", &url]);

    assert!(
        output.status.success(),
        "push should succeed, stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).contains("Pushed 8 bytes"));

    let request = server.join().expect("Server thread panicked");
    assert!(request.starts_with("POST /"));
    assert!(request.ends_with("**bold**"));
}

#[test]
fn test_push_unreachable_server_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("notes.md"), "text").unwrap();

    // A port nothing listens on
    let output = run_mdbridge(
        temp_dir.path(),
        &["push", "notes.md", "--server", "http://127.0.0.1:9/"],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to reach bridge server"));
}

#[test]
fn test_push_missing_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_mdbridge(temp_dir.path(), &["push", "absent.md"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to read absent.md"));
}
