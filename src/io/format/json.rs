use std::io::Read;

use serde_json::Value;

use crate::io::IoError;

pub fn read_json<R: Read>(reader: R) -> Result<Vec<Value>, IoError> {
    Ok(match read_json_document(reader)? {
        Value::Array(items) => items,
        single => vec![single],
    })
}

pub fn read_json_document<R: Read>(reader: R) -> Result<Value, IoError> {
    Ok(serde_json::from_reader(reader)?)
}
