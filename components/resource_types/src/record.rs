// Classified resource records and their derived fields

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Closed category set for fetched resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    /// Top-level navigation document
    Document,
    /// CSS stylesheets and stylesheet-like link relations
    Stylesheet,
    /// JavaScript and TypeScript sources
    Script,
    /// Raster and vector images
    Image,
    /// Web fonts
    Font,
    /// Programmatic fetch / XMLHttpRequest calls
    XmlHttpRequest,
    /// Everything that matched no rule
    Other,
}

impl ResourceCategory {
    /// Wire / filter identifier ("xmlhttprequest", "stylesheet", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::Document => "document",
            ResourceCategory::Stylesheet => "stylesheet",
            ResourceCategory::Script => "script",
            ResourceCategory::Image => "image",
            ResourceCategory::Font => "font",
            ResourceCategory::XmlHttpRequest => "xmlhttprequest",
            ResourceCategory::Other => "other",
        }
    }

    /// Short label used by table and filter chips
    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceCategory::Document => "HTML",
            ResourceCategory::Stylesheet => "CSS",
            ResourceCategory::Script => "JavaScript",
            ResourceCategory::Image => "Image",
            ResourceCategory::Font => "Font",
            ResourceCategory::XmlHttpRequest => "XHR",
            ResourceCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome class of a completed (or failed) fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// 2xx response
    Success,
    /// 3xx response
    Redirect,
    /// 4xx response
    ClientError,
    /// 5xx response
    ServerError,
    /// Response never completed
    Failed,
    /// Status code outside the known ranges
    Unknown,
}

/// Textual classification of a fetch outcome plus the numeric code when known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceStatus {
    /// Outcome class
    pub outcome: Outcome,
    /// HTTP status code, absent when the browser withheld it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl ResourceStatus {
    /// Classify a known HTTP status code
    pub fn from_code(code: u16) -> Self {
        let outcome = match code {
            200..=299 => Outcome::Success,
            300..=399 => Outcome::Redirect,
            400..=499 => Outcome::ClientError,
            500..=599 => Outcome::ServerError,
            _ => Outcome::Unknown,
        };
        Self {
            outcome,
            code: Some(code),
        }
    }

    /// A response that completed without exposing a status code
    pub fn assumed_success() -> Self {
        Self {
            outcome: Outcome::Success,
            code: None,
        }
    }

    /// A fetch whose response never completed
    pub fn failed() -> Self {
        Self {
            outcome: Outcome::Failed,
            code: None,
        }
    }

    /// Whether the outcome counts as an error for display styling
    pub fn is_error(&self) -> bool {
        matches!(
            self.outcome,
            Outcome::ClientError | Outcome::ServerError | Outcome::Failed
        )
    }
}

impl fmt::Display for ResourceStatus {
    /// Renders as "success (200)", "client error (404)", or the bare
    /// outcome word when no code is known.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self.outcome {
            Outcome::Success => "success",
            Outcome::Redirect => "redirect",
            Outcome::ClientError => "client error",
            Outcome::ServerError => "server error",
            Outcome::Failed => "error",
            Outcome::Unknown => "unknown",
        };
        match self.code {
            Some(code) => write!(f, "{} ({})", word, code),
            None => f.write_str(word),
        }
    }
}

/// One observed network fetch with timing, size, and classification data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    /// Absolute URL (unique per capture slot, not globally)
    pub url: String,
    /// Display label: filename portion of the URL, or hostname when pathless
    pub name: String,
    /// Hostname extracted from the URL
    pub domain: String,
    /// Category assigned once at ingestion, immutable thereafter
    #[serde(rename = "type")]
    pub category: ResourceCategory,
    /// Fetch start on the page-relative clock (ms)
    pub start_time: f64,
    /// End of response on the page-relative clock (ms)
    pub end_time: f64,
    /// Best-effort byte count; may be a synthetic zero
    pub size: u64,
    /// Bytes transferred over the network
    pub transfer_size: u64,
    /// Encoded body size in bytes
    pub encoded_body_size: u64,
    /// Decoded body size in bytes
    pub decoded_body_size: u64,
    /// True when all size fields were zeroed but a transfer completed
    pub is_cached_resource: bool,
    /// Derived outcome classification
    pub status: ResourceStatus,
    /// Cookie count for the capture context (document record only)
    pub cookies: u32,
    /// Raw cookie string (document record only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_details: Option<String>,
}

impl ResourceRecord {
    /// Elapsed time between fetch start and end of response (ms)
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Display label for a URL: the filename portion of the path, falling back
/// to the hostname for pathless URLs and to the raw string when the URL
/// does not parse. Never fails.
pub fn resource_name(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => {
            let last_segment = parsed
                .path_segments()
                .and_then(|segments| segments.last())
                .unwrap_or("");
            if last_segment.is_empty() {
                parsed
                    .host_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| url.to_string())
            } else {
                last_segment.to_string()
            }
        }
        Err(_) => url.to_string(),
    }
}

/// Hostname of a URL, falling back to the raw string when it does not parse
pub fn resource_domain(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}
