//! Resource classification and size inference
//!
//! Pure functions that assign a category to every fetched resource, infer an
//! effective byte count when the browser withholds size data, and format
//! sizes for display. Classification depends only on the URL and the
//! initiator tag of a single entry, never on other records.

use resource_types::{resource_domain, RawTimingEntry, ResourceCategory, ResourceStatus};
use tracing::debug;

/// Extensions recognised as images
const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "svg", "webp", "ico", "bmp", "tiff", "avif",
];

/// Extensions recognised as web fonts
const FONT_EXTENSIONS: &[&str] = &["woff", "woff2", "ttf", "otf", "eot"];

/// Extensions recognised as scripts
const SCRIPT_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

/// File extension of the URL path, lowercased, with query and fragment
/// stripped before matching. Returns None when the path has no usable
/// extension.
fn path_extension(url: &str) -> Option<String> {
    let lower = url.to_ascii_lowercase();
    let without_query = lower
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or(lower.as_str());
    let (_, extension) = without_query.rsplit_once('.')?;
    if extension.is_empty() || extension.contains('/') {
        return None;
    }
    Some(extension.to_string())
}

/// Assign a category to a sub-resource fetch.
///
/// Deterministic and total: every input maps to some category, with
/// unmatched inputs falling to `Other`. Rule order is significant because
/// URLs can match multiple superficial patterns:
///
/// 1. explicit fetch/XHR initiator wins over any file extension
/// 2. image extension
/// 3. font extension
/// 4. script extension, or "script" initiator
/// 5. `.css` extension
/// 6. "link" initiator (stylesheet-like link relations)
/// 7. `Other`
///
/// The top-level navigation record is assigned `Document` at ingestion
/// without running these rules.
pub fn classify(url: &str, initiator_type: &str) -> ResourceCategory {
    if initiator_type == "xmlhttprequest" || initiator_type == "fetch" {
        return ResourceCategory::XmlHttpRequest;
    }

    let extension = path_extension(url);
    let extension = extension.as_deref();

    if matches_extension(extension, IMAGE_EXTENSIONS) {
        return ResourceCategory::Image;
    }
    if matches_extension(extension, FONT_EXTENSIONS) {
        return ResourceCategory::Font;
    }
    if matches_extension(extension, SCRIPT_EXTENSIONS) || initiator_type == "script" {
        return ResourceCategory::Script;
    }
    if extension == Some("css") {
        return ResourceCategory::Stylesheet;
    }
    if initiator_type == "link" {
        return ResourceCategory::Stylesheet;
    }

    ResourceCategory::Other
}

fn matches_extension(extension: Option<&str>, known: &[&str]) -> bool {
    extension.is_some_and(|ext| known.contains(&ext))
}

/// Infer the effective byte count and cache status of an entry.
///
/// The effective size is the first non-zero of transfer / encoded / decoded
/// body size. A resource counts as cached when all three raw fields are zero
/// but the timing shows a response actually completed (non-zero response
/// start and end) — the browser zeroes size data for cross-origin resources
/// without an opt-in header, which must not be confused with "no data yet"
/// or a failed fetch. Hostnames matching a configured CDN pattern force the
/// cached flag when the size is zero, since those domains are known to strip
/// size data even when completion evidence is ambiguous.
pub fn infer_size(entry: &RawTimingEntry, cdn_hosts: &[String]) -> (u64, bool) {
    let effective_size = [
        entry.transfer_size,
        entry.encoded_body_size,
        entry.decoded_body_size,
    ]
    .into_iter()
    .find(|size| *size > 0)
    .unwrap_or(0);

    let all_zero =
        entry.transfer_size == 0 && entry.encoded_body_size == 0 && entry.decoded_body_size == 0;
    let mut is_cached = all_zero && entry.response_end > 0.0 && entry.response_start > 0.0;

    if !is_cached && effective_size == 0 {
        let domain = resource_domain(&entry.url);
        if cdn_hosts.iter().any(|host| domain.contains(host.as_str())) {
            debug!(domain = %domain, "forcing cached flag for known CDN host");
            is_cached = true;
        }
    }

    (effective_size, is_cached)
}

/// Derive the outcome classification of an entry.
///
/// A known status code classifies directly. Without one, a completed
/// response is assumed successful (the Performance API often withholds the
/// code), and an incomplete response counts as failed.
pub fn derive_status(response_status: Option<u16>, response_end: f64) -> ResourceStatus {
    match response_status {
        Some(code) => ResourceStatus::from_code(code),
        None if response_end > 0.0 => ResourceStatus::from_code(200),
        None => ResourceStatus::failed(),
    }
}

/// Human-readable size string.
///
/// Cached resources with a zero byte count render as the "cache" sentinel —
/// "cannot determine size" is semantically different from "confirmed zero
/// bytes". Otherwise sizes use B/KB/MB/GB with at most two decimals.
pub fn format_size(bytes: u64, is_cached: bool) -> String {
    if is_cached && bytes == 0 {
        return "cache".to_string();
    }
    if bytes == 0 {
        return "0B".to_string();
    }

    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let exponent = (((bytes as f64).ln() / 1024_f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{}{}", rounded, UNITS[exponent])
}
