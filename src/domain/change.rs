use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One snapshot of an entity: field name to JSON-compatible value.
pub type Record = Map<String, Value>;

/// Default cap on nested change entries produced for one diff.
pub const DEFAULT_MAX_ENTRIES: usize = 200;

/// Default recursion depth for nested diffing.
pub const DEFAULT_MAX_DEPTH: usize = 7;

/// Classification of a single comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Removed,
    Updated,
    Unchanged,
}

/// Result of comparing one top-level field.
///
/// `old_value` is absent iff the field was added, `new_value` is absent iff it
/// was removed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldChange {
    pub key: String,
    pub kind: ChangeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Value>,
}

impl FieldChange {
    pub fn added(key: impl Into<String>, new_value: Value) -> Self {
        Self {
            key: key.into(),
            kind: ChangeKind::Added,
            old_value: None,
            new_value: Some(new_value),
        }
    }

    pub fn removed(key: impl Into<String>, old_value: Value) -> Self {
        Self {
            key: key.into(),
            kind: ChangeKind::Removed,
            old_value: Some(old_value),
            new_value: None,
        }
    }

    pub fn compared(
        key: impl Into<String>,
        old_value: Value,
        new_value: Value,
        equal: bool,
    ) -> Self {
        Self {
            key: key.into(),
            kind: if equal {
                ChangeKind::Unchanged
            } else {
                ChangeKind::Updated
            },
            old_value: Some(old_value),
            new_value: Some(new_value),
        }
    }
}

/// Result of comparing one position inside a nested structure.
///
/// Never produced for unchanged positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeDetail {
    pub path: String,
    pub kind: ChangeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Value>,
}

impl ChangeDetail {
    pub fn added(path: impl Into<String>, new_value: Value) -> Self {
        Self {
            path: path.into(),
            kind: ChangeKind::Added,
            old_value: None,
            new_value: Some(new_value),
        }
    }

    pub fn removed(path: impl Into<String>, old_value: Value) -> Self {
        Self {
            path: path.into(),
            kind: ChangeKind::Removed,
            old_value: Some(old_value),
            new_value: None,
        }
    }

    pub fn updated(path: impl Into<String>, old_value: Value, new_value: Value) -> Self {
        Self {
            path: path.into(),
            kind: ChangeKind::Updated,
            old_value: Some(old_value),
            new_value: Some(new_value),
        }
    }
}

/// Updated details bucketed under one human-readable header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeGroup {
    pub header: String,
    pub changes: Vec<ChangeDetail>,
}

/// Bounds on nested diff work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    pub max_entries: usize,
    pub max_depth: usize,
}

impl Limits {
    pub const fn new(max_entries: usize, max_depth: usize) -> Self {
        Self {
            max_entries,
            max_depth,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES, DEFAULT_MAX_DEPTH)
    }
}
