use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::tempdir;

#[test]
fn entry_reads_jsonl_audit_log() {
    let dir = tempdir().expect("tempdir");
    let log = dir.path().join("audit.jsonl");
    fs::write(
        &log,
        concat!(
            r#"{"entity_type":"page","action":"update","before":{"title":"A"},"after":{"title":"B"}}"#,
            "\n",
            r#"{"entity_type":"page","action":"delete","before":{"title":"B"}}"#,
            "\n"
        ),
    )
    .expect("write log");

    let output = Command::cargo_bin("auditdiff")
        .expect("binary")
        .arg("entry")
        .arg("--input")
        .arg(&log)
        .output()
        .expect("run entry");

    assert_eq!(output.status.code(), Some(0));
    let reports: Value = serde_json::from_slice(&output.stdout).expect("stdout is json");
    assert_eq!(reports.as_array().map(Vec::len), Some(2));
    assert_eq!(reports[0]["entry"]["action"], json!("update"));
    assert_eq!(reports[0]["report"]["stats"]["updated"], json!(1));
    assert_eq!(
        reports[1]["report"]["removals"],
        json!([{"path": "title", "title": "Title", "kind": "removed", "summary": "B"}])
    );
}

#[test]
fn entry_reads_stdin_as_json() {
    Command::cargo_bin("auditdiff")
        .expect("binary")
        .arg("entry")
        .write_stdin(r#"{"before":{"a":1},"after":{"a":1,"b":2}}"#)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"added\":1"));
}

#[test]
fn malformed_entry_is_usage_error() {
    Command::cargo_bin("auditdiff")
        .expect("binary")
        .arg("entry")
        .write_stdin(r#"{"before": 5}"#)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid audit entry at index 0"));
}

#[test]
fn invalid_utf8_log_is_usage_error() {
    let dir = tempdir().expect("tempdir");
    let log = dir.path().join("audit.jsonl");
    let mut bytes = br#"{"before":{"a":""#.to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe]);
    bytes.extend_from_slice(b"\"}}\n");
    fs::write(&log, bytes).expect("write log");

    Command::cargo_bin("auditdiff")
        .expect("binary")
        .arg("entry")
        .arg("--input")
        .arg(&log)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input_usage_error"));
}
