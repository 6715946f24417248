use std::fs::File;
use std::path::Path;

use serde_json::Value;

use crate::domain::change::Record;
use crate::domain::config::DiffOptions;
use crate::domain::error::DiffError;
use crate::domain::report::ChangeReport;
use crate::engine::record::compute_diff;
use crate::engine::report::{build_report, copy_payload};
use crate::io::{self, reader};

/// Builds the change report for two already-loaded snapshots.
pub fn execute(old: &Record, new: &Record, options: &DiffOptions) -> ChangeReport {
    build_report(old, new, options)
}

/// Loads both snapshots from disk and builds their change report.
pub fn run_paths(old: &Path, new: &Path, options: &DiffOptions) -> Result<ChangeReport, DiffError> {
    let old = load_record(old, "old")?;
    let new = load_record(new, "new")?;
    Ok(execute(&old, &new, options))
}

/// Loads both snapshots from disk and returns the copy-as-JSON payload.
///
/// Ignored fields are left out, as in the full report.
pub fn run_copy_paths(old: &Path, new: &Path, options: &DiffOptions) -> Result<Value, DiffError> {
    let old = load_record(old, "old")?;
    let new = load_record(new, "new")?;
    let fields: Vec<_> = compute_diff(&old, &new)
        .into_iter()
        .filter(|field| !options.is_ignored(&field.key))
        .collect();
    Ok(copy_payload(&fields))
}

/// Reads one snapshot file (JSON or YAML by extension) as a record.
pub fn load_record(path: &Path, side: &'static str) -> Result<Record, DiffError> {
    let format = io::resolve_input_format(None, Some(path))
        .map_err(|source| DiffError::ResolveInput { side, source })?;
    let file = File::open(path).map_err(|source| DiffError::OpenInput {
        side,
        path: path.display().to_string(),
        source,
    })?;
    let value =
        reader::read_value(file, format).map_err(|source| DiffError::ReadInput { side, source })?;
    into_record(value, side)
}

fn into_record(value: Value, side: &'static str) -> Result<Record, DiffError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DiffError::NotARecord {
            side,
            found: value_kind(&other),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
