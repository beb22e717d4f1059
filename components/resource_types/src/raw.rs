// Raw timing entries as delivered across the ingestion boundary

use serde::{Deserialize, Serialize};

/// One raw timing entry reported by the host page context.
///
/// All timestamps share a monotonic millisecond clock rooted at
/// page-navigation start. Byte-count fields may be zero either because the
/// browser withheld them (cross-origin privacy zeroing) or because the body
/// was genuinely empty; the size/cache inferencer distinguishes the two.
/// Missing numeric fields deserialize as zero rather than failing the entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTimingEntry {
    /// Absolute URL of the fetched resource
    pub url: String,
    /// Initiator tag from the host browser ("fetch", "script", "link", ... or empty)
    #[serde(default)]
    pub initiator_type: String,
    /// Fetch start timestamp (ms)
    #[serde(default)]
    pub start_time: f64,
    /// First-byte timestamp (ms); zero when the response never started
    #[serde(default)]
    pub response_start: f64,
    /// End-of-response timestamp (ms); zero when the response never completed
    #[serde(default)]
    pub response_end: f64,
    /// Bytes transferred over the network
    #[serde(default)]
    pub transfer_size: u64,
    /// Encoded (compressed) body size in bytes
    #[serde(default)]
    pub encoded_body_size: u64,
    /// Decoded body size in bytes
    #[serde(default)]
    pub decoded_body_size: u64,
    /// HTTP status code when the host browser exposes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_status: Option<u16>,
    /// True for the top-level navigation entry
    #[serde(default)]
    pub is_navigation: bool,
    /// Load-event end timestamp (ms), navigation entries only
    #[serde(default)]
    pub load_event_end: f64,
    /// Raw cookie header string, navigation entries only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_header: Option<String>,
}

impl RawTimingEntry {
    /// Create a sub-resource entry with the given timing window
    pub fn sub_resource(url: impl Into<String>, initiator_type: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            initiator_type: initiator_type.into(),
            ..Self::default()
        }
    }

    /// Create a top-level navigation entry
    pub fn navigation(url: impl Into<String>, start_time: f64, load_event_end: f64) -> Self {
        Self {
            url: url.into(),
            start_time,
            load_event_end,
            is_navigation: true,
            ..Self::default()
        }
    }

    /// Set the start / response-start / response-end window (ms)
    pub fn with_timing(mut self, start: f64, response_start: f64, response_end: f64) -> Self {
        self.start_time = start;
        self.response_start = response_start;
        self.response_end = response_end;
        self
    }

    /// Set the three raw byte-count fields
    pub fn with_sizes(mut self, transfer: u64, encoded: u64, decoded: u64) -> Self {
        self.transfer_size = transfer;
        self.encoded_body_size = encoded;
        self.decoded_body_size = decoded;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_fields_default_to_zero() {
        // Entries from the host page may omit any field the browser withheld
        let entry: RawTimingEntry =
            serde_json::from_str(r#"{"url": "https://example.com/app.js"}"#).unwrap();

        assert_eq!(entry.url, "https://example.com/app.js");
        assert_eq!(entry.initiator_type, "");
        assert_eq!(entry.transfer_size, 0);
        assert_eq!(entry.response_end, 0.0);
        assert_eq!(entry.response_status, None);
        assert!(!entry.is_navigation);
    }

    #[test]
    fn test_camel_case_wire_format() {
        let entry = RawTimingEntry::sub_resource("https://example.com/a.css", "link")
            .with_timing(1.0, 5.0, 9.0)
            .with_sizes(120, 100, 300);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["initiatorType"], "link");
        assert_eq!(json["responseEnd"], 9.0);
        assert_eq!(json["encodedBodySize"], 100);
    }

    #[test]
    fn test_navigation_constructor() {
        let entry = RawTimingEntry::navigation("https://example.com/", 0.0, 850.0);
        assert!(entry.is_navigation);
        assert_eq!(entry.load_event_end, 850.0);
    }
}
