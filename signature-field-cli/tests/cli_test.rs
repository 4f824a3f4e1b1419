//! Binary-level tests for `sigfield`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("field.yaml");
    fs::write(&path, "name: DocuSign Signatory\nservice_name: \"\"\n").unwrap();
    path
}

#[test]
fn replay_reports_absent_commit_for_bad_email() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    Command::cargo_bin("sigfield")
        .unwrap()
        .args(["replay", "--config"])
        .arg(&config)
        .write_stdin(r#"[{"type":"change","text":"alex@"},{"type":"blur"}]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("commit=<absent>"))
        .stdout(predicate::str::contains("Identity: Something looks incorrect."));
}

#[test]
fn replay_json_output() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    Command::cargo_bin("sigfield")
        .unwrap()
        .args(["replay", "--json", "--config"])
        .arg(&config)
        .write_stdin(r#"[{"type":"change","text":"alex@openlaw.io"},{"type":"blur"}]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""commit":"{\"identity\":{\"email\":\"alex@openlaw.io\"},\"serviceName\":\"\"}""#,
        ));
}

#[test]
fn replay_custom_error() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    Command::cargo_bin("sigfield")
        .unwrap()
        .args(["replay", "--custom-error", "This is a custom error.", "--config"])
        .arg(&config)
        .write_stdin(r#"[{"type":"change","text":"morgan@"}]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("This is a custom error."));
}

#[test]
fn bad_script_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    Command::cargo_bin("sigfield")
        .unwrap()
        .args(["replay", "--config"])
        .arg(&config)
        .write_stdin(r#"[{"type":"focus"}]"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid event script"));
}

#[test]
fn parse_saved_value() {
    Command::cargo_bin("sigfield")
        .unwrap()
        .args([
            "parse",
            r#"{"identity": {"email": "test@openlaw.io"}, "serviceName": "DocuSign"}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("text: test@openlaw.io"));
}
