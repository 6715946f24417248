use assert_cmd::Command;
use serde_json::{Value, json};

#[test]
fn path_prints_humanized_parts() {
    let output = Command::cargo_bin("auditdiff")
        .expect("binary")
        .args(["path", "menu_items[id=7,label=About us].link_target"])
        .output()
        .expect("run path");

    assert_eq!(output.status.code(), Some(0));
    let parsed: Value = serde_json::from_slice(&output.stdout).expect("stdout is json");
    assert_eq!(
        parsed,
        json!({
            "root": "menu_items",
            "root_human": "Menu Items",
            "item_label": "About us",
            "item_id": "7",
            "prop": "link_target",
            "prop_human": "Link Target",
            "human_title": "Menu Items: About us — Link Target",
            "human_field": "Link Target"
        })
    );
}
