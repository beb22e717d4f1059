//! Ingestion boundary between the host page context and the core
//!
//! The core never assumes how the host executes timing retrieval; it only
//! depends on the [`TimingSource`] contract and the shape of the returned
//! entry list. One ingestion pass turns raw entries into a fully classified
//! [`Capture`], tolerating empty lists, zeroed size fields, and malformed
//! URLs without failing.

use async_trait::async_trait;
use resource_classify::{classify, derive_status, infer_size};
use resource_types::{
    resource_domain, resource_name, Capture, RawTimingEntry, ResourceCategory, ResourceRecord,
};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors crossing the ingestion boundary
#[derive(Error, Debug)]
pub enum IngestError {
    /// The retrieval transport itself failed (host page unreachable)
    #[error("timing source transport failed: {0}")]
    Transport(String),

    /// The host page executed the retrieval but reported an error
    #[error("host page retrieval failed: {0}")]
    Script(String),

    /// Other errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type for ingestion operations
pub type Result<T> = std::result::Result<T, IngestError>;

/// Typed request/response contract for timing retrieval.
///
/// One call returns the complete entry list for the current page state;
/// the result is delivered once. The core performs no retries and does not
/// deduplicate overlapping calls — serializing refreshes is the driver's
/// responsibility.
#[async_trait]
pub trait TimingSource: Send + Sync {
    /// Fetch all raw timing entries visible in the host page context
    async fn fetch_entries(&self) -> Result<Vec<RawTimingEntry>>;
}

/// A source backed by a fixed entry list, for tests and offline replay
#[derive(Debug, Clone, Default)]
pub struct FixedTimingSource {
    entries: Vec<RawTimingEntry>,
}

impl FixedTimingSource {
    /// Source that returns the given entries on every fetch
    pub fn new(entries: Vec<RawTimingEntry>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl TimingSource for FixedTimingSource {
    async fn fetch_entries(&self) -> Result<Vec<RawTimingEntry>> {
        Ok(self.entries.clone())
    }
}

/// A source that always fails, for exercising the "no data" path in tests
#[derive(Debug, Clone)]
pub struct FailingTimingSource;

#[async_trait]
impl TimingSource for FailingTimingSource {
    async fn fetch_entries(&self) -> Result<Vec<RawTimingEntry>> {
        Err(IngestError::Transport("source unavailable".to_string()))
    }
}

/// Build a Capture from raw entries in one pass.
///
/// Every entry yields a record: names and domains degrade to the raw URL
/// string when parsing fails, missing sizes stay zero, and the navigation
/// entry becomes the `document` record without running the classifier.
/// An empty entry list is a valid, empty capture.
pub fn ingest(entries: &[RawTimingEntry], cdn_hosts: &[String]) -> Capture {
    let records: Vec<ResourceRecord> = entries
        .iter()
        .map(|entry| build_record(entry, cdn_hosts))
        .collect();
    debug!(records = records.len(), "ingested capture");
    Capture::new(records)
}

fn build_record(entry: &RawTimingEntry, cdn_hosts: &[String]) -> ResourceRecord {
    let name = resource_name(&entry.url);
    let domain = resource_domain(&entry.url);

    if entry.is_navigation {
        let cookies = entry
            .cookie_header
            .as_deref()
            .map(count_cookies)
            .unwrap_or(0);
        return ResourceRecord {
            url: entry.url.clone(),
            name,
            domain,
            category: ResourceCategory::Document,
            start_time: entry.start_time,
            end_time: entry.load_event_end,
            size: entry.transfer_size,
            transfer_size: entry.transfer_size,
            encoded_body_size: entry.encoded_body_size,
            decoded_body_size: entry.decoded_body_size,
            is_cached_resource: false,
            // Navigation entries that reached the panel always completed
            status: derive_status(entry.response_status.or(Some(200)), entry.load_event_end),
            cookies,
            cookie_details: entry.cookie_header.clone(),
        };
    }

    if entry.response_end > 0.0 && entry.response_end < entry.start_time {
        warn!(url = %entry.url, "entry ends before it starts, keeping as reported");
    }

    let category = classify(&entry.url, &entry.initiator_type);
    let (size, is_cached_resource) = infer_size(entry, cdn_hosts);

    ResourceRecord {
        url: entry.url.clone(),
        name,
        domain,
        category,
        start_time: entry.start_time,
        end_time: entry.response_end,
        size,
        transfer_size: entry.transfer_size,
        encoded_body_size: entry.encoded_body_size,
        decoded_body_size: entry.decoded_body_size,
        is_cached_resource,
        status: derive_status(entry.response_status, entry.response_end),
        cookies: 0,
        cookie_details: None,
    }
}

fn count_cookies(header: &str) -> u32 {
    header
        .split(';')
        .filter(|cookie| !cookie.trim().is_empty())
        .count() as u32
}
