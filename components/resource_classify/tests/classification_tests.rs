//! Classification tests over a corpus of realistic URLs

use resource_classify::{classify, derive_status, format_size, infer_size};
use resource_types::{RawTimingEntry, ResourceCategory};

#[test]
fn test_realistic_url_corpus() {
    let cases = [
        ("https://example.com/index.html", "", ResourceCategory::Other),
        ("https://example.com/bundle.min.js?v=2024", "script", ResourceCategory::Script),
        ("https://example.com/polyfill", "script", ResourceCategory::Script),
        ("https://fonts.example/v2/roboto.woff2?display=swap", "link", ResourceCategory::Font),
        ("https://example.com/sprite.svg#icon-close", "", ResourceCategory::Image),
        ("https://example.com/styles/dark.css", "link", ResourceCategory::Stylesheet),
        ("https://example.com/manifest.webmanifest", "link", ResourceCategory::Stylesheet),
        ("https://api.example/v1/users?page=2", "xmlhttprequest", ResourceCategory::XmlHttpRequest),
        ("https://api.example/graphql", "fetch", ResourceCategory::XmlHttpRequest),
        ("https://example.com/download.pdf", "", ResourceCategory::Other),
        ("https://example.com/photo.JPG", "", ResourceCategory::Image),
        ("", "", ResourceCategory::Other),
    ];

    for (url, initiator, expected) in cases {
        assert_eq!(
            classify(url, initiator),
            expected,
            "url {url:?} initiator {initiator:?}"
        );
    }
}

#[test]
fn test_extension_lookup_ignores_dotted_directories() {
    // The extension comes from the last dot; a dot inside a directory name
    // never donates one
    assert_eq!(
        classify("https://example.com/v1.2/app.js", ""),
        ResourceCategory::Script
    );
    assert_eq!(
        classify("https://example.com/v1.2/changelog", ""),
        ResourceCategory::Other
    );
}

#[test]
fn test_status_and_size_together() {
    // A completed cross-origin fetch: zeroed sizes, no status code
    let entry = RawTimingEntry::sub_resource("https://thirdparty.example/w.js", "script")
        .with_timing(100.0, 130.0, 250.0);

    let (size, cached) = infer_size(&entry, &[]);
    assert_eq!(size, 0);
    assert!(cached);
    assert_eq!(
        derive_status(entry.response_status, entry.response_end).to_string(),
        "success (200)"
    );
}

#[test]
fn test_format_size_rounding_boundaries() {
    assert_eq!(format_size(1023, false), "1023B");
    assert_eq!(format_size(1024, false), "1KB");
    assert_eq!(format_size(1100, false), "1.07KB");
    assert_eq!(format_size(1024 * 1024 - 1, false), "1024KB");
    assert_eq!(format_size(3_276_800, false), "3.13MB");
}

#[test]
fn test_cdn_match_is_substring_on_hostname() {
    let hosts = vec!["cdn.".to_string()];

    // Matches anywhere in the hostname
    let entry = RawTimingEntry::sub_resource("https://assets-cdn.example.net/x", "");
    assert_eq!(infer_size(&entry, &hosts), (0, true));

    // "cdn." in the path does not count
    let entry = RawTimingEntry::sub_resource("https://example.net/cdn.files/x", "");
    assert_eq!(infer_size(&entry, &hosts), (0, false));
}
