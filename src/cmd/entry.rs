use std::io::Read;

use crate::domain::config::DiffOptions;
use crate::domain::entry::AuditEntry;
use crate::domain::error::DiffError;
use crate::domain::report::EntryReport;
use crate::engine::report::build_entry_report;
use crate::io::{Format, reader};

/// Reads audit entries and reports each one in input order.
///
/// A single JSON/YAML object, a top-level array, or JSONL lines are accepted.
pub fn run<R: Read>(
    input: R,
    format: Format,
    options: &DiffOptions,
) -> Result<Vec<EntryReport>, DiffError> {
    let values = reader::read_values(input, format)
        .map_err(|source| DiffError::ReadInput { side: "entry", source })?;
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let entry: AuditEntry = serde_json::from_value(value)
                .map_err(|source| DiffError::InvalidEntry { index, source })?;
            Ok(build_entry_report(&entry, options))
        })
        .collect()
}
