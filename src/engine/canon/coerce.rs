use std::borrow::Cow;

use serde_json::Value;

/// Sees through string fields that hold serialized JSON objects or arrays.
///
/// Non-strings, strings not starting with `{` or `[` after trimming, and
/// strings that fail to parse are returned unchanged.
pub fn try_parse_json_string(value: &Value) -> Cow<'_, Value> {
    let Value::String(text) = value else {
        return Cow::Borrowed(value);
    };
    let trimmed = text.trim();
    if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
        return Cow::Borrowed(value);
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(parsed) => Cow::Owned(parsed),
        Err(_) => Cow::Borrowed(value),
    }
}
