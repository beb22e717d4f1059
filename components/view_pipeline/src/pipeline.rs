// Display pipeline: category filter, free-text search, stable sort

use crate::state::{SortKey, ViewState};
use resource_classify::format_size;
use resource_types::ResourceRecord;
use std::cmp::Ordering;

/// Narrow and order the record set for display.
///
/// Filtering runs first (category filter, then free-text search, both must
/// pass), sorting second. The sort is stable, so records with equal keys
/// keep their relative input order and repeated applications of the same
/// view yield the same ordered subset.
pub fn apply_pipeline(records: &[ResourceRecord], view: &ViewState) -> Vec<ResourceRecord> {
    let mut visible: Vec<ResourceRecord> = records
        .iter()
        .filter(|record| view.filter.matches(record))
        .filter(|record| {
            view.search_query.is_empty()
                || search_haystack(record).contains(view.search_query.as_str())
        })
        .cloned()
        .collect();

    visible.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, view.sort_key);
        if view.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
    visible
}

/// Lowercased text the search query is matched against: name, domain,
/// category, and the human-formatted size. Raw URLs and raw byte counts are
/// deliberately not searchable.
pub fn search_haystack(record: &ResourceRecord) -> String {
    format!(
        "{} {} {} {}",
        record.name,
        record.domain,
        record.category,
        format_size(record.size, false)
    )
    .to_lowercase()
}

fn compare_by_key(a: &ResourceRecord, b: &ResourceRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => compare_text(&a.name, &b.name),
        SortKey::Category => compare_text(a.category.as_str(), b.category.as_str()),
        SortKey::Domain => compare_text(&a.domain, &b.domain),
        SortKey::Size => a.size.cmp(&b.size),
        SortKey::StartTime => compare_number(a.start_time, b.start_time),
        SortKey::Duration => compare_number(a.duration(), b.duration()),
        SortKey::Status => compare_text(&a.status.to_string(), &b.status.to_string()),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn compare_number(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
