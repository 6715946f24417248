use serde::Serialize;

use crate::domain::change::{ChangeDetail, ChangeGroup, ChangeKind, FieldChange};
use crate::domain::entry::EntryMetadata;

/// Deterministic change report for one pair of record snapshots.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChangeReport {
    pub stats: ReportStats,
    pub fields: Vec<FieldChange>,
    pub details: Vec<ChangeDetail>,
    pub groups: Vec<ChangeGroup>,
    pub additions: Vec<ChangeSummary>,
    pub removals: Vec<ChangeSummary>,
}

/// Per-kind counters over the top-level fields plus nested detail totals.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ReportStats {
    pub added: usize,
    pub removed: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub details: usize,
    /// Set once a nested diff filled the entry budget.
    pub truncated: bool,
}

impl ReportStats {
    pub fn count(&mut self, kind: ChangeKind) {
        match kind {
            ChangeKind::Added => self.added += 1,
            ChangeKind::Removed => self.removed += 1,
            ChangeKind::Updated => self.updated += 1,
            ChangeKind::Unchanged => self.unchanged += 1,
        }
    }

    pub fn has_changes(&self) -> bool {
        self.added + self.removed + self.updated > 0
    }
}

/// Compact description of a whole value that appeared or disappeared.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChangeSummary {
    pub path: String,
    pub title: String,
    pub kind: ChangeKind,
    pub summary: String,
}

/// Change report for one audit entry, with its metadata.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EntryReport {
    pub entry: EntryMetadata,
    pub report: ChangeReport,
}
