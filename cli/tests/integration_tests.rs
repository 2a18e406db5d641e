use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

const SERVER_YAML: &str = r#"
params:
  - long: host
    short: h
    default: localhost
    help: Host to bind
  - long: port
    short: p
    help: Port to listen on
flags:
  - long: quit
    short: q
    help: Quit after startup
"#;

fn write_spec(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("failed to write spec");
    path
}

fn argtable(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_argtable"))
        .args(args)
        .output()
        .expect("failed to run argtable")
}

// ---------------------------------------------------------------------------
// parse
// ---------------------------------------------------------------------------

#[test]
fn parse_prints_outcome_as_json() {
    let dir = TempDir::new().unwrap();
    let spec = write_spec(&dir, "server.yaml", SERVER_YAML);

    let output = argtable(&[
        "parse",
        "--spec",
        spec.to_str().unwrap(),
        "--",
        "-q",
        "extra",
        "--port",
        "8080",
        "-p",
        "9090",
    ]);

    assert!(
        output.status.success(),
        "parse failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["values"]["quit"], true);
    assert_eq!(parsed["values"]["host"], "localhost");
    assert_eq!(parsed["values"]["port"], serde_json::json!(["8080", "9090"]));
    assert_eq!(parsed["leftovers"], serde_json::json!(["extra"]));
}

#[test]
fn parse_exit_mode_terminates_with_usage() {
    let dir = TempDir::new().unwrap();
    let spec = write_spec(&dir, "server.yaml", SERVER_YAML);

    let output = argtable(&[
        "parse",
        "--spec",
        spec.to_str().unwrap(),
        "--program",
        "server",
        "--",
        "-q",
    ]);

    assert_eq!(output.status.code(), Some(argtable_exit_status()));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing required option 'port'."));
    assert!(stderr.contains("Usage: server [options]"));
    assert!(stderr.contains("-p, --port"));
}

#[test]
fn parse_raise_mode_reports_error() {
    let dir = TempDir::new().unwrap();
    let spec = write_spec(&dir, "server.yaml", SERVER_YAML);

    let output = argtable(&[
        "parse",
        "--spec",
        spec.to_str().unwrap(),
        "--raise",
        "--",
        "-qh",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage: -qh [options]"));
    assert!(stderr.contains("error: Parameter 'host' found in grouped flags '-qh'."));
}

#[test]
fn parse_yaml_output() {
    let dir = TempDir::new().unwrap();
    let spec = write_spec(&dir, "server.yaml", SERVER_YAML);

    let output = argtable(&[
        "parse",
        "--spec",
        spec.to_str().unwrap(),
        "--format",
        "yaml",
        "--",
        "--port",
        "80",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("port: '80'") || stdout.contains("port: \"80\""));
    assert!(stdout.contains("leftovers: []"));
}

// ---------------------------------------------------------------------------
// usage / validate
// ---------------------------------------------------------------------------

#[test]
fn usage_prints_table() {
    let dir = TempDir::new().unwrap();
    let spec = write_spec(&dir, "server.yaml", SERVER_YAML);

    let output = argtable(&["usage", "--spec", spec.to_str().unwrap(), "--program", "server"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "Usage: server [options]\n\
         Options:\n  \
         -q, --quit  Quit after startup\n  \
         -h, --host  Host to bind [default: localhost]\n  \
         -p, --port  Port to listen on   [required]\n"
    );
}

#[test]
fn validate_accepts_json_spec() {
    let dir = TempDir::new().unwrap();
    let spec = write_spec(
        &dir,
        "tool.json",
        r#"{"params": [{"long": "out", "short": "o", "default": ""}], "flags": [{"long": "all", "short": "a"}]}"#,
    );

    let output = argtable(&["validate", "--spec", spec.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 param(s), 1 flag(s)"));
}

#[test]
fn validate_rejects_duplicate_names() {
    let dir = TempDir::new().unwrap();
    let spec = write_spec(
        &dir,
        "dup.yaml",
        "flags:\n  - long: quit\n    short: q\n  - long: quiet\n    short: q\n",
    );

    let output = argtable(&["validate", "--spec", spec.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("duplicate short name: 'q'"));
}

fn argtable_exit_status() -> i32 {
    argtable_core::EXIT_STATUS
}
