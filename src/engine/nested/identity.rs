use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::domain::change::ChangeDetail;
use crate::engine::nested::{DetailCollector, diff_at};
use crate::util::text::scalar_text;

/// Fields that give an array item a stable identity, in lookup order.
pub const IDENTITY_FIELDS: [&str; 4] = ["id", "key", "uuid", "slug"];

/// Fields used as an item's display label, in lookup order.
pub const LABEL_FIELDS: [&str; 3] = ["label", "name", "title"];

pub type IdentityIndex<'a> = BTreeMap<String, &'a Value>;

/// Identity of an item: the first non-null identity field, as plain text.
pub fn identity_of(item: &Value) -> Option<String> {
    first_present(item, &IDENTITY_FIELDS).map(scalar_text)
}

/// Display label of an item: the first non-null label field, as plain text.
pub fn label_of(item: &Value) -> Option<String> {
    first_present(item, &LABEL_FIELDS).map(scalar_text)
}

pub(crate) fn first_present<'a>(item: &'a Value, fields: &[&str]) -> Option<&'a Value> {
    let map = item.as_object()?;
    fields
        .iter()
        .find_map(|field| map.get(*field).filter(|value| !value.is_null()))
}

/// Indexes both sides by identity, or returns `None` unless every item on
/// both sides has one. Duplicate identities keep the last item.
pub fn index_by_identity<'a>(
    old: &'a [Value],
    new: &'a [Value],
) -> Option<(IdentityIndex<'a>, IdentityIndex<'a>)> {
    Some((index_side(old)?, index_side(new)?))
}

fn index_side(items: &[Value]) -> Option<IdentityIndex<'_>> {
    let mut index = BTreeMap::new();
    for item in items {
        index.insert(identity_of(item)?, item);
    }
    Some(index)
}

/// Path tag for an identified item, e.g. `menu[id=3,label=About]`.
///
/// `\`, `,`, `[` and `]` inside the id or label are escaped with `\`.
pub fn identity_path(path: &str, id: &str, label: Option<&str>) -> String {
    let id = escape_tag_text(id);
    match label {
        Some(label) => format!("{path}[id={id},label={}]", escape_tag_text(label)),
        None => format!("{path}[id={id}]"),
    }
}

fn escape_tag_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | ',' | '[' | ']') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

pub(crate) fn diff_identified(
    old: &IdentityIndex<'_>,
    new: &IdentityIndex<'_>,
    path: &str,
    collector: &mut DetailCollector<'_>,
    depth: usize,
) {
    let mut ids = BTreeSet::new();
    ids.extend(old.keys().map(String::as_str));
    ids.extend(new.keys().map(String::as_str));

    for id in ids {
        if collector.truncated {
            return;
        }
        match (old.get(id), new.get(id)) {
            (Some(old_item), Some(new_item)) => {
                let label = label_of(new_item).or_else(|| label_of(old_item));
                let child_path = identity_path(path, id, label.as_deref());
                diff_at(old_item, new_item, &child_path, collector, depth - 1);
            }
            (Some(old_item), None) => {
                let child_path = identity_path(path, id, label_of(old_item).as_deref());
                collector.push(ChangeDetail::removed(child_path, (*old_item).clone()));
            }
            (None, Some(new_item)) => {
                let child_path = identity_path(path, id, label_of(new_item).as_deref());
                collector.push(ChangeDetail::added(child_path, (*new_item).clone()));
            }
            (None, None) => {}
        }
    }
}
