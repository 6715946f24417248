use auditdiff::domain::change::{ChangeDetail, ChangeKind, FieldChange, Limits, Record};
use auditdiff::engine::canon::try_parse_json_string;
use auditdiff::engine::nested::diff_nested;
use auditdiff::engine::record::compute_diff;
use serde_json::{Value, json};

fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn nested(old: &Value, new: &Value, base_path: &str, limits: Limits) -> Vec<ChangeDetail> {
    let mut out = Vec::new();
    diff_nested(old, new, base_path, &mut out, limits);
    out
}

#[test]
fn added_field_next_to_unchanged_field() {
    let changes = compute_diff(&record(json!({"a": 1})), &record(json!({"a": 1, "b": 2})));
    let actual = serde_json::to_value(&changes).expect("serialize changes");
    assert_eq!(
        actual,
        json!([
            {"key": "a", "kind": "unchanged", "old_value": 1, "new_value": 1},
            {"key": "b", "kind": "added", "new_value": 2}
        ])
    );
}

#[test]
fn serialized_menu_items_diff_down_to_the_renamed_label() {
    let old = record(json!({"items": r#"[{"id":1,"label":"Home"}]"#}));
    let new = record(json!({"items": r#"[{"id":1,"label":"Home Page"}]"#}));

    let changes = compute_diff(&old, &new);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, ChangeKind::Updated);

    let FieldChange {
        old_value: Some(old_items),
        new_value: Some(new_items),
        ..
    } = &changes[0]
    else {
        panic!("updated field carries both values");
    };
    let old_items = try_parse_json_string(old_items);
    let new_items = try_parse_json_string(new_items);
    let details = nested(&old_items, &new_items, "items", Limits::default());
    assert_eq!(
        details,
        vec![ChangeDetail::updated(
            "items[id=1,label=Home Page].label",
            json!("Home"),
            json!("Home Page")
        )]
    );
}

#[test]
fn removing_middle_identified_item_reports_only_it() {
    let details = nested(
        &json!([{"id": 1}, {"id": 2}, {"id": 3}]),
        &json!([{"id": 1}, {"id": 3}]),
        "items",
        Limits::default(),
    );
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].kind, ChangeKind::Removed);
    assert!(details[0].path.contains("id=2"));
    assert!(!details[0].path.contains("id=1"));
    assert!(!details[0].path.contains("id=3"));
}

#[test]
fn appended_primitive_is_one_added_entry() {
    let details = nested(&json!([1, 2, 3]), &json!([1, 2, 3, 4]), "tags", Limits::default());
    assert_eq!(details, vec![ChangeDetail::added("tags[3]", json!(4))]);
}

#[test]
fn zero_depth_collapses_any_nested_difference() {
    let old = json!({"settings": {"seo": {"meta": {"robots": "index"}}}});
    let new = json!({"settings": {"seo": {"meta": {"robots": "noindex"}}}});
    let details = nested(&old, &new, "blob", Limits::new(200, 0));
    assert_eq!(details, vec![ChangeDetail::updated("blob", old, new)]);
}
