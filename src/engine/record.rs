use std::collections::BTreeSet;

use crate::domain::change::{FieldChange, Record};
use crate::engine::canon::deep_equal;

/// Classifies every top-level field of two snapshots.
///
/// Keys are visited in sorted order. No recursion happens here; callers decide
/// per updated field whether structural diffing is worthwhile.
pub fn compute_diff(old: &Record, new: &Record) -> Vec<FieldChange> {
    let mut keys = BTreeSet::new();
    keys.extend(old.keys().map(String::as_str));
    keys.extend(new.keys().map(String::as_str));

    keys.into_iter()
        .filter_map(|key| match (old.get(key), new.get(key)) {
            (None, Some(new_value)) => Some(FieldChange::added(key, new_value.clone())),
            (Some(old_value), None) => Some(FieldChange::removed(key, old_value.clone())),
            (Some(old_value), Some(new_value)) => Some(FieldChange::compared(
                key,
                old_value.clone(),
                new_value.clone(),
                deep_equal(old_value, new_value),
            )),
            (None, None) => None,
        })
        .collect()
}
