use serde_json::{Map, Value, json};
use tracing::debug;

use crate::domain::change::{ChangeKind, FieldChange, Record};
use crate::domain::config::DiffOptions;
use crate::domain::entry::{AuditEntry, EntryMetadata};
use crate::domain::report::{ChangeReport, ChangeSummary, EntryReport, ReportStats};
use crate::engine::canon::{classify, try_parse_json_string};
use crate::engine::group::group_changes;
use crate::engine::nested::diff_nested;
use crate::engine::path::parse_path;
use crate::engine::record::compute_diff;
use crate::engine::summary::summarize_value;
use crate::util::time::normalize_rfc3339_utc;

/// Builds the full change report for two snapshots.
///
/// Nested details of all updated composite fields share one entry budget.
pub fn build_report(old: &Record, new: &Record, options: &DiffOptions) -> ChangeReport {
    let fields: Vec<FieldChange> = compute_diff(old, new)
        .into_iter()
        .filter(|field| !options.is_ignored(&field.key))
        .collect();

    let mut stats = ReportStats::default();
    let mut details = Vec::new();
    let mut additions = Vec::new();
    let mut removals = Vec::new();

    for field in &fields {
        stats.count(field.kind);
        match (field.kind, &field.old_value, &field.new_value) {
            (ChangeKind::Added, _, Some(new_value)) => {
                additions.push(summarize(&field.key, ChangeKind::Added, new_value, options));
            }
            (ChangeKind::Removed, Some(old_value), _) => {
                removals.push(summarize(&field.key, ChangeKind::Removed, old_value, options));
            }
            (ChangeKind::Updated, Some(old_value), Some(new_value)) => {
                let old_parsed = try_parse_json_string(old_value);
                let new_parsed = try_parse_json_string(new_value);
                if classify(&old_parsed).is_composite() && classify(&new_parsed).is_composite() {
                    let before = details.len();
                    stats.truncated |= diff_nested(
                        &old_parsed,
                        &new_parsed,
                        &field.key,
                        &mut details,
                        options.limits,
                    );
                    debug!(
                        field = field.key.as_str(),
                        entries = details.len() - before,
                        "diffed nested field"
                    );
                }
            }
            _ => {}
        }
    }

    for detail in &details {
        match (detail.kind, &detail.old_value, &detail.new_value) {
            (ChangeKind::Added, _, Some(new_value)) => {
                additions.push(summarize(&detail.path, ChangeKind::Added, new_value, options));
            }
            (ChangeKind::Removed, Some(old_value), _) => {
                removals.push(summarize(&detail.path, ChangeKind::Removed, old_value, options));
            }
            _ => {}
        }
    }

    stats.details = details.len();
    if stats.truncated {
        debug!(max_entries = options.limits.max_entries, "entry budget exhausted");
    }

    ChangeReport {
        stats,
        groups: group_changes(&details),
        fields,
        details,
        additions,
        removals,
    }
}

fn summarize(path: &str, kind: ChangeKind, value: &Value, options: &DiffOptions) -> ChangeSummary {
    ChangeSummary {
        path: path.to_string(),
        title: parse_path(path).human_title,
        kind,
        summary: summarize_value(value, options.preview_len),
    }
}

/// Report for one audit entry; metadata is echoed, `at` normalized to UTC.
pub fn build_entry_report(entry: &AuditEntry, options: &DiffOptions) -> EntryReport {
    let at = entry
        .at
        .as_deref()
        .map(|at| normalize_rfc3339_utc(at).unwrap_or_else(|| at.to_string()));
    EntryReport {
        entry: EntryMetadata {
            entity_type: entry.entity_type.clone(),
            entity_id: entry.entity_id.clone(),
            action: entry.action.clone(),
            actor: entry.actor.clone(),
            at,
        },
        report: build_report(&entry.before, &entry.after, options),
    }
}

/// Plain JSON of what changed, for copying out of a report.
///
/// `{"added": {k: v}, "removed": {k: v}, "updated": {k: {"old": v, "new": v}}}`;
/// unchanged fields are omitted.
pub fn copy_payload(fields: &[FieldChange]) -> Value {
    let mut added = Map::new();
    let mut removed = Map::new();
    let mut updated = Map::new();
    for field in fields {
        match (field.kind, &field.old_value, &field.new_value) {
            (ChangeKind::Added, _, Some(new_value)) => {
                added.insert(field.key.clone(), new_value.clone());
            }
            (ChangeKind::Removed, Some(old_value), _) => {
                removed.insert(field.key.clone(), old_value.clone());
            }
            (ChangeKind::Updated, Some(old_value), Some(new_value)) => {
                updated.insert(
                    field.key.clone(),
                    json!({"old": old_value, "new": new_value}),
                );
            }
            _ => {}
        }
    }
    json!({
        "added": added,
        "removed": removed,
        "updated": updated,
    })
}
