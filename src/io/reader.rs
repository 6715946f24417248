use std::io::Read;

use serde_json::Value;

use crate::io::format::{json, jsonl, yaml};
use crate::io::{Format, IoError};

/// Reads a stream of values; top-level JSON/YAML arrays are flattened.
pub fn read_values<R: Read>(reader: R, format: Format) -> Result<Vec<Value>, IoError> {
    match format {
        Format::Json => json::read_json(reader),
        Format::Yaml => yaml::read_yaml(reader),
        Format::Jsonl => jsonl::read_jsonl(reader),
    }
}

/// Reads exactly one document without flattening.
pub fn read_value<R: Read>(reader: R, format: Format) -> Result<Value, IoError> {
    match format {
        Format::Json => json::read_json_document(reader),
        Format::Yaml => yaml::read_yaml_document(reader),
        Format::Jsonl => {
            let mut values = jsonl::read_jsonl(reader)?;
            if values.len() != 1 {
                return Err(IoError::NotSingleDocument {
                    count: values.len(),
                });
            }
            Ok(values.remove(0))
        }
    }
}
