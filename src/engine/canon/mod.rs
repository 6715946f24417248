pub mod coerce;
pub mod normalize;

use serde_json::Value;

pub use coerce::try_parse_json_string;
pub use normalize::{canonical_literal, canonical_number, normalize};

/// Runtime shape of a JSON value, decided once per comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Primitive,
    Object,
    Array,
}

impl Shape {
    pub fn is_composite(self) -> bool {
        !matches!(self, Self::Primitive)
    }
}

pub fn classify(value: &Value) -> Shape {
    match value {
        Value::Object(_) => Shape::Object,
        Value::Array(_) => Shape::Array,
        _ => Shape::Primitive,
    }
}

/// Structural equality ignoring object key order.
///
/// A value that fails to serialize is treated as unequal so that a change is
/// reported rather than hidden.
pub fn deep_equal(left: &Value, right: &Value) -> bool {
    if left == right {
        return true;
    }
    match (canonical_literal(left), canonical_literal(right)) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}
