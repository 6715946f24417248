use auditdiff::domain::change::{ChangeDetail, ChangeKind, Limits, Record};
use auditdiff::domain::config::DiffOptions;
use auditdiff::engine::nested::diff_nested;
use auditdiff::engine::record::compute_diff;
use auditdiff::engine::report::build_report;
use serde_json::{Value, json};

fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn sample_records() -> Vec<Record> {
    vec![
        record(json!({})),
        record(json!({"title": "Home", "published": true})),
        record(json!({"title": "Home", "items": [{"id": 1, "label": "A"}], "seo": null})),
        record(json!({"items": "[{\"id\":2}]", "banners": {"hero": {"src": "/a.png"}}})),
        record(json!({"published": false, "order": 3.0, "banners": []})),
    ]
}

#[test]
fn diff_with_itself_is_all_unchanged() {
    for sample in sample_records() {
        let changes = compute_diff(&sample, &sample);
        assert_eq!(changes.len(), sample.len());
        assert!(changes.iter().all(|change| change.kind == ChangeKind::Unchanged));
    }
}

#[test]
fn added_and_removed_are_mirror_images() {
    let samples = sample_records();
    for old in &samples {
        for new in &samples {
            let forward = compute_diff(old, new);
            let backward = compute_diff(new, old);
            for change in &forward {
                let mirrored = backward
                    .iter()
                    .find(|other| other.key == change.key)
                    .expect("same key set both ways");
                let expected = match change.kind {
                    ChangeKind::Added => ChangeKind::Removed,
                    ChangeKind::Removed => ChangeKind::Added,
                    other => other,
                };
                assert_eq!(mirrored.kind, expected, "key {}", change.key);
            }
        }
    }
}

#[test]
fn repeated_reports_serialize_identically() {
    let old = record(json!({
        "zeta": [{"slug": "b", "v": 1}, {"slug": "a", "v": 1}],
        "alpha": {"y": 1, "x": [1, 2]}
    }));
    let new = record(json!({
        "alpha": {"x": [2], "y": 2},
        "zeta": [{"slug": "a", "v": 2}, {"slug": "c"}]
    }));
    let first = serde_json::to_string(&build_report(&old, &new, &DiffOptions::default()))
        .expect("serialize first");
    let second = serde_json::to_string(&build_report(&old, &new, &DiffOptions::default()))
        .expect("serialize second");
    assert_eq!(first, second);
}

fn deep_chain(depth: usize, leaf: Value) -> Value {
    (0..depth).fold(leaf, |child, level| json!({format!("l{level}"): child}))
}

#[test]
fn output_never_exceeds_entry_budget() {
    let wide_old = Value::Object((0..500).map(|i| (format!("k{i:03}"), json!(i))).collect());
    let wide_new = Value::Object((0..500).map(|i| (format!("k{i:03}"), json!(-i - 1))).collect());
    for max_entries in [0, 1, 7, 200] {
        let mut out: Vec<ChangeDetail> = Vec::new();
        diff_nested(&wide_old, &wide_new, "wide", &mut out, Limits::new(max_entries, 7));
        assert_eq!(out.len(), max_entries);
    }
}

#[test]
fn deep_structures_collapse_at_the_depth_limit() {
    let old = deep_chain(50, json!(1));
    let new = deep_chain(50, json!(2));
    for max_depth in [0, 3, 7] {
        let mut out = Vec::new();
        diff_nested(&old, &new, "root", &mut out, Limits::new(200, max_depth));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, ChangeKind::Updated);
        let segments = out[0].path.matches('.').count();
        assert_eq!(segments, max_depth);
    }
}

#[test]
fn reordering_identified_items_is_not_reported() {
    let old = json!([
        {"uuid": "u1", "title": "One"},
        {"uuid": "u2", "title": "Two"},
        {"uuid": "u3", "title": "Three"}
    ]);
    let new = json!([
        {"uuid": "u2", "title": "Two"},
        {"uuid": "u3", "title": "Three"},
        {"uuid": "u1", "title": "One"}
    ]);
    let mut out = Vec::new();
    diff_nested(&old, &new, "banners", &mut out, Limits::default());
    assert!(out.is_empty());
}
