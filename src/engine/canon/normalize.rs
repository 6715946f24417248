use serde_json::{Map, Number, Value};

/// Recursively sorts object keys; array order is kept because it is meaningful.
pub fn normalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => normalize_object(map),
        Value::Array(items) => Value::Array(items.iter().map(normalize).collect()),
        primitive => primitive.clone(),
    }
}

fn normalize_object(map: &Map<String, Value>) -> Value {
    let mut entries: Vec<(&String, Value)> = map
        .iter()
        .map(|(key, value)| (key, normalize(value)))
        .collect();
    entries.sort_by(|left, right| left.0.cmp(right.0));

    let mut normalized = Map::new();
    for (key, value) in entries {
        normalized.insert(key.clone(), value);
    }
    Value::Object(normalized)
}

/// Canonical serialization used for equality and identity keys.
///
/// Integral floats are written as integers so `1` and `1.0` share a literal.
/// Returns `None` when the value cannot be serialized.
pub fn canonical_literal(value: &Value) -> Option<String> {
    serde_json::to_string(&canonical_numbers(normalize(value))).ok()
}

fn canonical_numbers(value: Value) -> Value {
    match value {
        Value::Number(number) => Value::Number(canonical_number(number)),
        Value::Array(items) => Value::Array(items.into_iter().map(canonical_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, child)| (key, canonical_numbers(child)))
                .collect(),
        ),
        other => other,
    }
}

/// Integral floats such as `1.0` become integers; other numbers pass through.
pub fn canonical_number(number: Number) -> Number {
    if number.is_f64() {
        if let Some(float) = number.as_f64() {
            // 2^53: beyond this integral floats no longer map one to one.
            if float.fract() == 0.0 && float.abs() <= 9_007_199_254_740_992.0 {
                return Number::from(float as i64);
            }
        }
    }
    number
}
