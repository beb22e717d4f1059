// Resource timing types shared across the Resource Monitor components
//
// This module defines the raw ingestion entries, the classified resource
// records derived from them, and the Capture snapshot that all downstream
// components consume read-only.

pub mod raw;
pub mod record;

// Re-export commonly used types
pub use raw::RawTimingEntry;
pub use record::{
    resource_domain, resource_name, Outcome, ResourceCategory, ResourceRecord, ResourceStatus,
};

use serde::{Deserialize, Serialize};

/// One immutable snapshot of all resource timing records for a page load.
///
/// A Capture is produced atomically by one ingestion pass and replaced
/// wholesale on the next refresh or explicit clear. Records keep the order
/// in which the host page reported them; a URL may appear more than once
/// when a page legitimately requests it twice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capture {
    records: Vec<ResourceRecord>,
}

impl Capture {
    /// Create a capture from an ordered record list
    pub fn new(records: Vec<ResourceRecord>) -> Self {
        Self { records }
    }

    /// All records, in ingestion order
    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    /// Number of records in the capture
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the capture holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record with the given URL, if any
    pub fn find(&self, url: &str) -> Option<&ResourceRecord> {
        self.records.iter().find(|r| r.url == url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str) -> ResourceRecord {
        ResourceRecord {
            url: url.to_string(),
            name: resource_name(url),
            domain: resource_domain(url),
            category: ResourceCategory::Other,
            start_time: 0.0,
            end_time: 10.0,
            size: 0,
            transfer_size: 0,
            encoded_body_size: 0,
            decoded_body_size: 0,
            is_cached_resource: false,
            status: ResourceStatus::from_code(200),
            cookies: 0,
            cookie_details: None,
        }
    }

    #[test]
    fn test_capture_find() {
        let capture = Capture::new(vec![
            record("https://example.com/a.js"),
            record("https://example.com/b.js"),
        ]);

        assert_eq!(capture.len(), 2);
        assert!(capture.find("https://example.com/b.js").is_some());
        assert!(capture.find("https://example.com/missing.js").is_none());
    }

    #[test]
    fn test_capture_preserves_order() {
        let urls = ["https://a.com/1", "https://a.com/2", "https://a.com/1"];
        let capture = Capture::new(urls.iter().map(|u| record(u)).collect());

        let seen: Vec<&str> = capture.records().iter().map(|r| r.url.as_str()).collect();
        assert_eq!(seen, urls);
    }

    #[test]
    fn test_empty_capture() {
        let capture = Capture::default();
        assert!(capture.is_empty());
        assert_eq!(capture.len(), 0);
    }
}
