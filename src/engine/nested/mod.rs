pub mod identity;

use std::collections::BTreeSet;

use serde_json::{Map, Value};
use tracing::trace;

use crate::domain::change::{ChangeDetail, Limits};
use crate::engine::canon::{Shape, classify, deep_equal, try_parse_json_string};

/// Appends path-tagged changes between two nested values to `out`.
///
/// `out` may already hold entries; the entry budget counts them too, which
/// lets one budget span several fields. Work stops once `out` holds
/// `limits.max_entries` entries, and any difference found at
/// `limits.max_depth` levels below `base_path` is collapsed into a single
/// `updated` leaf.
///
/// Returns `true` when a difference was left out because the budget was
/// spent. Filling the budget exactly returns `false`.
pub fn diff_nested(
    old: &Value,
    new: &Value,
    base_path: &str,
    out: &mut Vec<ChangeDetail>,
    limits: Limits,
) -> bool {
    let mut collector = DetailCollector {
        out,
        cap: limits.max_entries,
        truncated: false,
    };
    diff_at(old, new, base_path, &mut collector, limits.max_depth);
    collector.truncated
}

fn diff_at(
    old: &Value,
    new: &Value,
    path: &str,
    collector: &mut DetailCollector<'_>,
    depth: usize,
) {
    if collector.is_full() {
        if !deep_equal(&try_parse_json_string(old), &try_parse_json_string(new)) {
            collector.truncated = true;
        }
        return;
    }
    if depth == 0 {
        if !deep_equal(old, new) {
            let old = try_parse_json_string(old).into_owned();
            let new = try_parse_json_string(new).into_owned();
            trace!(path, "depth floor reached, collapsing difference");
            collector.push(ChangeDetail::updated(path, old, new));
        }
        return;
    }
    if deep_equal(old, new) {
        return;
    }

    let old = try_parse_json_string(old);
    let new = try_parse_json_string(new);
    let same_composite = matches!(
        (classify(&old), classify(&new)),
        (Shape::Object, Shape::Object) | (Shape::Array, Shape::Array)
    );
    if same_composite {
        match (old.as_ref(), new.as_ref()) {
            (Value::Object(old_map), Value::Object(new_map)) => {
                return diff_objects(old_map, new_map, path, collector, depth);
            }
            (Value::Array(old_items), Value::Array(new_items)) => {
                return diff_arrays(old_items, new_items, path, collector, depth);
            }
            _ => {}
        }
    }
    collector.push(ChangeDetail::updated(
        path,
        old.into_owned(),
        new.into_owned(),
    ));
}

fn diff_objects(
    old: &Map<String, Value>,
    new: &Map<String, Value>,
    path: &str,
    collector: &mut DetailCollector<'_>,
    depth: usize,
) {
    let mut keys = BTreeSet::new();
    keys.extend(old.keys().map(String::as_str));
    keys.extend(new.keys().map(String::as_str));

    for key in keys {
        if collector.truncated {
            return;
        }
        let child_path = object_key_path(path, key);
        match (old.get(key), new.get(key)) {
            (Some(old_value), Some(new_value)) => {
                diff_at(old_value, new_value, &child_path, collector, depth - 1)
            }
            (Some(old_value), None) => {
                collector.push(ChangeDetail::removed(child_path, old_value.clone()))
            }
            (None, Some(new_value)) => {
                collector.push(ChangeDetail::added(child_path, new_value.clone()))
            }
            (None, None) => {}
        }
    }
}

fn diff_arrays(
    old: &[Value],
    new: &[Value],
    path: &str,
    collector: &mut DetailCollector<'_>,
    depth: usize,
) {
    if let Some((old_items, new_items)) = identity::index_by_identity(old, new) {
        trace!(path, "matching array items by identity");
        identity::diff_identified(&old_items, &new_items, path, collector, depth);
        return;
    }

    trace!(path, "matching array items by position");
    for index in 0..old.len().max(new.len()) {
        if collector.truncated {
            return;
        }
        let child_path = format!("{path}[{index}]");
        match (old.get(index), new.get(index)) {
            (Some(old_item), Some(new_item)) => {
                diff_at(old_item, new_item, &child_path, collector, depth - 1)
            }
            (Some(old_item), None) => {
                collector.push(ChangeDetail::removed(child_path, old_item.clone()))
            }
            (None, Some(new_item)) => {
                collector.push(ChangeDetail::added(child_path, new_item.clone()))
            }
            (None, None) => {}
        }
    }
}

fn object_key_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// Output list guarded by the entry budget.
///
/// `truncated` is raised the first time a difference is found with no room
/// left for it; walks stop once it is set.
pub(crate) struct DetailCollector<'a> {
    out: &'a mut Vec<ChangeDetail>,
    cap: usize,
    truncated: bool,
}

impl DetailCollector<'_> {
    fn is_full(&self) -> bool {
        self.out.len() >= self.cap
    }

    fn push(&mut self, detail: ChangeDetail) {
        if self.is_full() {
            self.truncated = true;
        } else {
            self.out.push(detail);
        }
    }
}
