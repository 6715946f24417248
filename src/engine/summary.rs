use serde_json::Value;

use crate::engine::canon::{canonical_number, try_parse_json_string};
use crate::engine::nested::identity::{LABEL_FIELDS, first_present};
use crate::util::text::{scalar_text, truncate_chars};

const TYPE_FIELDS: [&str; 1] = ["type"];
const TARGET_FIELDS: [&str; 3] = ["target", "url", "href"];
const SUMMARY_SEPARATOR: &str = " • ";
const MISSING: &str = "—";

/// One-line description of a whole value that was added or removed.
///
/// Objects prefer their label, type and target fields; otherwise objects and
/// arrays are described by size. Primitives get a truncated preview.
pub fn summarize_value(value: &Value, preview_len: usize) -> String {
    let value = try_parse_json_string(value);
    match value.as_ref() {
        Value::Object(map) => {
            let parts: Vec<String> = [&LABEL_FIELDS[..], &TYPE_FIELDS[..], &TARGET_FIELDS[..]]
                .into_iter()
                .filter_map(|fields| first_present(value.as_ref(), fields))
                .map(|field| truncate_chars(&scalar_text(field), preview_len))
                .collect();
            if parts.is_empty() {
                format!("Object ({} fields)", map.len())
            } else {
                parts.join(SUMMARY_SEPARATOR)
            }
        }
        Value::Array(items) => format!("List ({})", items.len()),
        primitive => preview_primitive(Some(primitive), preview_len),
    }
}

/// Short text for a possibly missing value.
pub fn preview_primitive(value: Option<&Value>, preview_len: usize) -> String {
    match value {
        None => MISSING.to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => canonical_number(number.clone()).to_string(),
        Some(Value::String(text)) => truncate_chars(text, preview_len),
        Some(composite) => truncate_chars(&composite.to_string(), preview_len),
    }
}
