//! End-to-end CLI integration tests using test fixtures.
//!
//! Each fixture in `tests/fixtures/` contains:
//! - an `input/` directory of policy JSON files
//! - an optional `rolecheck.toml`
//! - an `expected.report.json` (the tool version uses a "__VERSION__" placeholder)
//!
//! These tests run the CLI against each fixture and verify:
//! 1. Exit code matches expected (0=pass, 2=fail, 1=error)
//! 2. JSON output matches expected (ignoring the tool version)

use assert_cmd::Command;
use serde_json::Value;
use std::path::PathBuf;

/// Helper to get a Command for the rolecheck binary.
/// Wraps the deprecated cargo_bin to centralize the deprecation warning.
#[allow(deprecated)]
fn rolecheck_cmd() -> Command {
    Command::cargo_bin("rolecheck").expect("rolecheck binary not found - run `cargo build` first")
}

/// Get the path to the test fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("rolecheck-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

/// Replace the tool version with a placeholder so reports survive version bumps.
fn normalize_version(mut value: Value) -> Value {
    if let Some(tool) = value.get_mut("tool").and_then(Value::as_object_mut) {
        tool.insert(
            "version".to_string(),
            Value::String("__VERSION__".to_string()),
        );
    }
    value
}

/// Run the CLI against a fixture's `input/` directory and return the exit code and JSON report.
fn run_check_on_fixture(fixture_name: &str) -> (i32, Value) {
    let fixture_path = fixtures_dir().join(fixture_name);

    let output = rolecheck_cmd()
        .arg("--config")
        .arg(fixture_path.join("rolecheck.toml"))
        .arg("--format")
        .arg("json")
        .arg(fixture_path.join("input"))
        .output()
        .expect("Failed to run command");

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8(output.stdout).expect("stdout should be UTF-8");
    let report: Value = serde_json::from_str(&stdout).expect("Failed to parse report JSON");

    (exit_code, report)
}

/// Load and parse the expected report for a fixture.
fn load_expected_report(fixture_name: &str) -> Value {
    let expected_path = fixtures_dir()
        .join(fixture_name)
        .join("expected.report.json");
    let content = std::fs::read_to_string(&expected_path).expect("Failed to read expected report");
    serde_json::from_str(&content).expect("Failed to parse expected report")
}

fn assert_reports_match(actual: Value, expected: Value, fixture_name: &str) {
    let actual_normalized = normalize_version(actual);
    let expected_normalized = normalize_version(expected);

    assert_eq!(
        actual_normalized,
        expected_normalized,
        "Report mismatch for fixture '{}'.\n\nActual:\n{}\n\nExpected:\n{}",
        fixture_name,
        serde_json::to_string_pretty(&actual_normalized).unwrap(),
        serde_json::to_string_pretty(&expected_normalized).unwrap()
    );
}

fn check_fixture(fixture_name: &str, expected_exit: i32) {
    let (exit_code, report) = run_check_on_fixture(fixture_name);
    let expected = load_expected_report(fixture_name);

    assert_eq!(
        exit_code, expected_exit,
        "{fixture_name} fixture should exit with {expected_exit}"
    );
    assert_reports_match(report, expected, fixture_name);
}

// ============================================================================
// Fixture tests
// ============================================================================

#[test]
fn fixture_proper_robust_passes() {
    check_fixture("proper_robust", 0);
}

#[test]
fn fixture_proper_lenient_passes() {
    check_fixture("proper_lenient", 0);
}

#[test]
fn fixture_improper_robust_is_rejected() {
    check_fixture("improper_robust", 2);
}

#[test]
fn fixture_improper_lenient_fails() {
    check_fixture("improper_lenient", 2);
}

#[test]
fn fixture_robust_wildcard_is_false_not_error() {
    check_fixture("robust_wildcard", 2);
}

#[test]
fn fixture_batch_reports_each_index() {
    check_fixture("batch", 2);
}

#[test]
fn fixture_malformed_action_is_an_error() {
    check_fixture("malformed_action", 1);
}

#[test]
fn fixture_mixed_directory_is_sorted() {
    check_fixture("mixed_directory", 2);
}

#[test]
fn every_fixture_has_a_test() {
    let mut names: Vec<String> = std::fs::read_dir(fixtures_dir())
        .expect("read fixtures dir")
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "batch",
            "improper_lenient",
            "improper_robust",
            "malformed_action",
            "mixed_directory",
            "proper_lenient",
            "proper_robust",
            "robust_wildcard",
        ]
    );
}
