// Summary statistics over a record set

use resource_types::ResourceRecord;
use serde::Serialize;

/// Aggregate statistics for the header counters.
///
/// Computed once over the full set ("page totals") and once over the
/// filtered set ("visible totals") — two independent invocations, not a
/// refinement of one another.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureStats {
    /// Number of records
    pub count: usize,
    /// Sum of effective sizes in bytes
    pub total_size: u64,
    /// Latest end-of-response timestamp (ms), zero for an empty set
    pub max_end_time: f64,
    /// Record with the largest effective size; ties go to the first
    /// occurrence in input order
    pub largest: Option<ResourceRecord>,
}

/// Compute summary statistics over `records`
pub fn aggregate(records: &[ResourceRecord]) -> CaptureStats {
    let mut stats = CaptureStats {
        count: records.len(),
        ..CaptureStats::default()
    };

    for record in records {
        stats.total_size += record.size;
        if record.end_time > stats.max_end_time {
            stats.max_end_time = record.end_time;
        }
        let beats_current = match &stats.largest {
            Some(largest) => record.size > largest.size,
            None => true,
        };
        if beats_current {
            stats.largest = Some(record.clone());
        }
    }

    stats
}
