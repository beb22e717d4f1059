// Related-resource heuristics for the selection highlight

use resource_types::ResourceRecord;
use std::collections::HashSet;

/// URLs related to the selected record.
///
/// A record R is related to the selection S (R != S) when any of these
/// holds: same domain, same category, or the portion of either name before
/// its first "." occurs as a substring of the other's. This is a plain
/// membership union, not a scored ranking.
///
/// An unknown selection URL yields the empty set.
pub fn find_related(selected_url: &str, records: &[ResourceRecord]) -> HashSet<String> {
    let Some(selected) = records.iter().find(|r| r.url == selected_url) else {
        return HashSet::new();
    };

    records
        .iter()
        .filter(|record| record.url != selected_url)
        .filter(|record| {
            record.domain == selected.domain
                || record.category == selected.category
                || names_overlap(&selected.name, &record.name)
        })
        .map(|record| record.url.clone())
        .collect()
}

/// Name-prefix overlap: the stem before the first "." of either name occurs
/// in the other, compared case-insensitively. Empty stems never match.
fn names_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let a_stem = a.split('.').next().unwrap_or("");
    let b_stem = b.split('.').next().unwrap_or("");
    (!b_stem.is_empty() && a.contains(b_stem)) || (!a_stem.is_empty() && b.contains(a_stem))
}
