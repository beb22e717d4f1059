//! One-way JSON export of a capture
//!
//! The export converts time fields from the page-relative millisecond clock
//! to seconds, rounded to millisecond-equivalent precision (3 decimals), and
//! carries field-description metadata for downstream consumers. It is a
//! snapshot, not a re-importable format.

use chrono::Utc;
use resource_types::{Capture, ResourceCategory, ResourceRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Tool identity stamped into export metadata
pub const TOOL_NAME: &str = "Resource Monitor";

/// Export metadata block
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    /// Tool identity
    pub tool: String,
    /// Tool version
    pub version: String,
    /// RFC 3339 export timestamp
    pub exported_at: String,
    /// Number of exported records
    pub resource_count: usize,
    /// Human-readable description of the document
    pub description: String,
}

/// One exported record, time fields in seconds
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    pub name: String,
    pub url: String,
    pub domain: String,
    #[serde(rename = "type")]
    pub category: ResourceCategory,
    /// Load start in seconds
    pub start_time: f64,
    /// Load end in seconds
    pub end_time: f64,
    /// endTime - startTime, in seconds
    pub duration: f64,
    pub size: u64,
    pub transfer_size: u64,
    pub encoded_body_size: u64,
    pub decoded_body_size: u64,
    pub is_cached_resource: bool,
    /// Display form of the outcome, e.g. "success (200)"
    pub status: String,
    pub cookies: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_details: Option<String>,
}

/// Complete export document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// Metadata block
    pub metadata: ExportMetadata,
    /// Unit of all time fields
    pub time_unit: &'static str,
    /// Field documentation for consumers
    pub field_descriptions: BTreeMap<&'static str, &'static str>,
    /// Full unfiltered record set
    pub resources: Vec<ExportRecord>,
}

/// Milliseconds to seconds at millisecond-equivalent precision
fn to_seconds(ms: f64) -> f64 {
    ms.round() / 1000.0
}

fn export_record(record: &ResourceRecord) -> ExportRecord {
    ExportRecord {
        name: record.name.clone(),
        url: record.url.clone(),
        domain: record.domain.clone(),
        category: record.category,
        start_time: to_seconds(record.start_time),
        end_time: to_seconds(record.end_time),
        duration: to_seconds(record.duration()),
        size: record.size,
        transfer_size: record.transfer_size,
        encoded_body_size: record.encoded_body_size,
        decoded_body_size: record.decoded_body_size,
        is_cached_resource: record.is_cached_resource,
        status: record.status.to_string(),
        cookies: record.cookies,
        cookie_details: record.cookie_details.clone(),
    }
}

fn field_descriptions() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        ("name", "Resource file name extracted from the URL"),
        ("url", "Complete resource URL"),
        ("domain", "Resource hostname"),
        (
            "type",
            "Resource category (document, stylesheet, script, image, font, xmlhttprequest, other)",
        ),
        ("startTime", "Load start time in seconds"),
        ("endTime", "Load end time in seconds"),
        ("duration", "Load duration (endTime - startTime) in seconds"),
        (
            "size",
            "Effective size in bytes (first non-zero of transferSize > encodedBodySize > decodedBodySize)",
        ),
        ("transferSize", "Network transfer size in bytes"),
        ("encodedBodySize", "Encoded body size in bytes"),
        ("decodedBodySize", "Decoded body size in bytes"),
        (
            "isCachedResource",
            "True when the browser withheld size data for a completed transfer",
        ),
        ("status", "Load outcome, e.g. \"success (200)\" or \"error\""),
        ("cookies", "Number of cookies associated with the capture context"),
        ("cookieDetails", "Raw cookie string, document record only"),
    ])
}

/// Build the export document for the full (unfiltered) record set
pub fn export_capture(capture: &Capture) -> ExportDocument {
    ExportDocument {
        metadata: ExportMetadata {
            tool: TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now().to_rfc3339(),
            resource_count: capture.len(),
            description: "Web page resource loading data export".to_string(),
        },
        time_unit: "seconds",
        field_descriptions: field_descriptions(),
        resources: capture.records().iter().map(export_record).collect(),
    }
}
