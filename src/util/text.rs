use std::cmp::Ordering;

use serde_json::Value;

const ELLIPSIS: char = '…';

/// Truncates to `max_chars` characters, appending an ellipsis when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let mut chars = text.char_indices();
    match chars.nth(max_chars) {
        Some((byte_index, _)) => {
            let mut out = String::with_capacity(byte_index + ELLIPSIS.len_utf8());
            out.push_str(&text[..byte_index]);
            out.push(ELLIPSIS);
            out
        }
        None => text.to_string(),
    }
}

/// Plain text for a scalar: strings are unquoted, everything else is its JSON literal.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Case-insensitive ordering with an ordinal tie-break, so output stays total and stable.
pub fn locale_cmp(left: &str, right: &str) -> Ordering {
    let folded = left
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase));
    folded.then_with(|| left.cmp(right))
}
