use std::fs;

use assert_cmd::Command;
use serde_json::{Value, json};
use tempfile::tempdir;

#[test]
fn copy_prints_changed_field_values() {
    let dir = tempdir().expect("tempdir");
    let old = dir.path().join("old.json");
    let new = dir.path().join("new.json");
    fs::write(&old, r#"{"title":"A","slug":"a","draft":true}"#).expect("write old");
    fs::write(&new, r#"{"title":"B","slug":"a","tags":["x"]}"#).expect("write new");

    let output = Command::cargo_bin("auditdiff")
        .expect("binary")
        .arg("copy")
        .arg("--old")
        .arg(&old)
        .arg("--new")
        .arg(&new)
        .output()
        .expect("run copy");

    assert_eq!(output.status.code(), Some(0));
    let payload: Value = serde_json::from_slice(&output.stdout).expect("stdout is json");
    assert_eq!(
        payload,
        json!({
            "added": {"tags": ["x"]},
            "removed": {"draft": true},
            "updated": {"title": {"old": "A", "new": "B"}}
        })
    );
}
