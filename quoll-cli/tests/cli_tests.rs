//! Integration tests for the quoll binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::json;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><style>h1 { text-align: center; }</style></head>
<body><h1>Heading</h1><p>Text</p></body>
</html>"#;

fn quoll() -> Command {
    Command::cargo_bin("quoll").expect("binary builds")
}

fn write_page(dir: &Path) -> PathBuf {
    let page = dir.join("index.html");
    fs::write(&page, PAGE).expect("write page");
    page
}

fn write_config(dir: &Path, tags: &[&str]) -> PathBuf {
    let config = json!({
        "target": dir.join("index.html").display().to_string(),
        "report_dir": dir.display().to_string(),
        "suites": [{
            "name": "HTML Tags Test",
            "kind": "boundary",
            "check": { "kind": "tag_presence", "tags": tags }
        }]
    });
    let path = dir.join("grade.json");
    fs::write(&path, config.to_string()).expect("write config");
    path
}

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8 stdout")
}

#[test]
fn test_run_reports_overall_pass() {
    let dir = tempfile::tempdir().expect("tempdir");
    let _ = write_page(dir.path());
    let config = write_config(dir.path(), &["html", "h1", "p"]);

    let assert = quoll()
        .args(["run", "--config"])
        .arg(&config)
        .assert()
        .success();

    let stdout = stdout_of(&assert);
    assert!(stdout.contains("HTML Tags Test:"));
    assert!(stdout.contains("overall: pass"));
}

#[test]
fn test_run_writes_report_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let _ = write_page(dir.path());
    let config = write_config(dir.path(), &["html", "h1"]);

    let _ = quoll()
        .args(["run", "--config"])
        .arg(&config)
        .assert()
        .success();

    let status = fs::read_to_string(dir.path().join("output_boundary_revised.txt"))
        .expect("status file");
    assert_eq!(status, "HTML Tags Test=PASS\n");
    assert!(dir.path().join("boundary-test-report.xml").exists());
}

#[test]
fn test_failing_suite_still_exits_zero_by_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let _ = write_page(dir.path());
    let config = write_config(dir.path(), &["table"]);

    let assert = quoll()
        .args(["run", "--config"])
        .arg(&config)
        .assert()
        .success();

    let stdout = stdout_of(&assert);
    assert!(stdout.contains("overall: fail"));
}

#[test]
fn test_strict_exits_nonzero_on_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let _ = write_page(dir.path());
    let config = write_config(dir.path(), &["table"]);

    let _ = quoll()
        .args(["run", "--strict", "--config"])
        .arg(&config)
        .assert()
        .failure();
}

#[test]
fn test_no_submit_skips_the_configured_endpoint() {
    let dir = tempfile::tempdir().expect("tempdir");
    let _ = write_page(dir.path());
    let config = json!({
        "target": dir.path().join("index.html").display().to_string(),
        "report_dir": dir.path().display().to_string(),
        "submit": { "endpoint": "http://127.0.0.1:1/results" },
        "suites": [{
            "name": "HTML Tags Test",
            "kind": "boundary",
            "check": { "kind": "tag_presence", "tags": ["html"] }
        }]
    });
    let config_path = dir.path().join("grade.json");
    fs::write(&config_path, config.to_string()).expect("write config");

    let assert = quoll()
        .args(["run", "--no-submit", "--config"])
        .arg(&config_path)
        .assert()
        .success();

    let stdout = stdout_of(&assert);
    assert!(!stdout.contains("Sending data as:"));
}

#[test]
fn test_target_override_replaces_the_configured_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let _ = write_page(dir.path());
    let other = dir.path().join("other.html");
    fs::write(&other, "<html><body><table></table></body></html>").expect("write page");
    let config = write_config(dir.path(), &["table"]);

    let assert = quoll()
        .args(["run", "--config"])
        .arg(&config)
        .arg("--target")
        .arg(&other)
        .assert()
        .success();

    let stdout = stdout_of(&assert);
    assert!(stdout.contains("overall: pass"));
}

#[test]
fn test_clean_removes_report_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let status = dir.path().join("output_revised.txt");
    fs::write(&status, "old=PASS\n").expect("write status");

    let assert = quoll()
        .args(["clean", "--report-dir"])
        .arg(dir.path())
        .assert()
        .success();

    assert!(!status.exists());
    let stdout = stdout_of(&assert);
    assert!(stdout.contains("Deleted:"));

    let assert = quoll()
        .args(["clean", "--report-dir"])
        .arg(dir.path())
        .assert()
        .success();
    assert!(stdout_of(&assert).contains("nothing to remove"));
}

#[test]
fn test_inspect_prints_elements_and_styles() {
    let dir = tempfile::tempdir().expect("tempdir");
    let page = write_page(dir.path());

    let assert = quoll().arg("inspect").arg(&page).arg("--css").assert().success();

    let stdout = stdout_of(&assert);
    assert!(stdout.contains("h1: 1"));
    assert!(stdout.contains("text-align: center"));
}

#[test]
fn test_missing_config_is_an_error() {
    let _ = quoll()
        .args(["run", "--config", "/no/such/grade.json"])
        .assert()
        .failure();
}
