use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::tempdir;

#[test]
fn diff_prints_json_report() {
    let dir = tempdir().expect("tempdir");
    let old = dir.path().join("old.json");
    let new = dir.path().join("new.json");
    fs::write(&old, r#"{"title":"Home","items":"[{\"id\":1,\"label\":\"Home\"}]"}"#)
        .expect("write old");
    fs::write(&new, r#"{"title":"Home","items":"[{\"id\":1,\"label\":\"Home Page\"}]"}"#)
        .expect("write new");

    let output = Command::cargo_bin("auditdiff")
        .expect("binary")
        .args(["diff", "--old"])
        .arg(&old)
        .arg("--new")
        .arg(&new)
        .output()
        .expect("run diff");

    assert_eq!(output.status.code(), Some(0));
    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout is json");
    assert_eq!(
        report["details"],
        json!([{
            "path": "items[id=1,label=Home Page].label",
            "kind": "updated",
            "old_value": "Home",
            "new_value": "Home Page"
        }])
    );
    assert_eq!(report["groups"][0]["header"], json!("Items: Home Page"));
    assert_eq!(report["stats"]["unchanged"], json!(1));
}

#[test]
fn limits_flags_override_config_file() {
    let dir = tempdir().expect("tempdir");
    let old = dir.path().join("old.yaml");
    let new = dir.path().join("new.yaml");
    let config = dir.path().join("auditdiff.toml");
    fs::write(&old, "settings:\n  a: {b: {c: 1}}\n").expect("write old");
    fs::write(&new, "settings:\n  a: {b: {c: 2}}\n").expect("write new");
    fs::write(&config, "[limits]\nmax_depth = 5\n").expect("write config");

    let output = Command::cargo_bin("auditdiff")
        .expect("binary")
        .arg("diff")
        .arg("--old")
        .arg(&old)
        .arg("--new")
        .arg(&new)
        .arg("--config")
        .arg(&config)
        .args(["--max-depth", "1"])
        .output()
        .expect("run diff");

    assert_eq!(output.status.code(), Some(0));
    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout is json");
    assert_eq!(report["details"][0]["path"], json!("settings.a"));
}

#[test]
fn non_object_snapshot_is_usage_error() {
    let dir = tempdir().expect("tempdir");
    let old = dir.path().join("old.json");
    let new = dir.path().join("new.json");
    fs::write(&old, "[]").expect("write old");
    fs::write(&new, "{}").expect("write new");

    Command::cargo_bin("auditdiff")
        .expect("binary")
        .arg("diff")
        .arg("--old")
        .arg(&old)
        .arg("--new")
        .arg(&new)
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("\"error\":\"input_usage_error\""))
        .stderr(predicate::str::contains("\"side\":\"old\""));
}

#[test]
fn invalid_config_is_usage_error() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("bad.toml");
    fs::write(&config, "[limits]\nmax_items = 1\n").expect("write config");

    Command::cargo_bin("auditdiff")
        .expect("binary")
        .args(["diff", "--old", "a.json", "--new", "b.json", "--config"])
        .arg(&config)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config_error"));
}

#[test]
fn unknown_flag_is_usage_error() {
    Command::cargo_bin("auditdiff")
        .expect("binary")
        .args(["diff", "--bogus"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cli_parse_error"));
}
