use std::collections::BTreeMap;

use crate::domain::change::{ChangeDetail, ChangeGroup, ChangeKind};
use crate::engine::path::parse_path;
use crate::util::text::locale_cmp;

struct Bucket<'a> {
    header: String,
    entries: Vec<(String, &'a ChangeDetail)>,
}

/// Buckets `updated` details by root field and owning item.
///
/// Buckets are ordered by header, entries inside a bucket by property title.
/// Added and removed details are left out; they are summarized instead.
pub fn group_changes(details: &[ChangeDetail]) -> Vec<ChangeGroup> {
    let mut buckets: BTreeMap<(String, String), Bucket<'_>> = BTreeMap::new();
    for detail in details
        .iter()
        .filter(|detail| detail.kind == ChangeKind::Updated)
    {
        let parsed = parse_path(&detail.path);
        let sort_key = parsed
            .prop_human
            .clone()
            .unwrap_or_else(|| parsed.human_title.clone());
        buckets
            .entry(parsed.group_key())
            .or_insert_with(|| Bucket {
                header: parsed.group_header(),
                entries: Vec::new(),
            })
            .entries
            .push((sort_key, detail));
    }

    let mut groups: Vec<ChangeGroup> = buckets
        .into_values()
        .map(|mut bucket| {
            bucket
                .entries
                .sort_by(|left, right| locale_cmp(&left.0, &right.0));
            ChangeGroup {
                header: bucket.header,
                changes: bucket
                    .entries
                    .into_iter()
                    .map(|(_, detail)| detail.clone())
                    .collect(),
            }
        })
        .collect();
    groups.sort_by(|left, right| locale_cmp(&left.header, &right.header));
    groups
}
