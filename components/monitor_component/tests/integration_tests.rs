//! Integration tests for the monitor component
//!
//! These tests verify end-to-end behavior across refresh cycles,
//! configuration, and a full interaction session.

use capture_ingest::FixedTimingSource;
use monitor_component::{MonitorConfig, ResourceMonitor};
use resource_types::{RawTimingEntry, ResourceCategory};
use view_pipeline::{SortKey, ViewAction};

fn entries() -> Vec<RawTimingEntry> {
    vec![
        RawTimingEntry::navigation("https://docs.example/", 0.0, 600.0),
        RawTimingEntry::sub_resource("https://docs.example/theme.css", "link")
            .with_timing(8.0, 20.0, 60.0)
            .with_sizes(1_800, 0, 0),
        RawTimingEntry::sub_resource("https://docs.example/search.js", "script")
            .with_timing(10.0, 30.0, 150.0)
            .with_sizes(12_000, 0, 0),
        RawTimingEntry::sub_resource("https://media.partner.net/diagram.svg", "")
            .with_timing(15.0, 0.0, 0.0),
    ]
}

#[tokio::test]
async fn test_multiple_refresh_cycles() {
    let monitor = ResourceMonitor::new(MonitorConfig::default());
    let source = FixedTimingSource::new(entries());

    for _ in 0..3 {
        monitor.refresh(&source).await.expect("refresh failed");
        assert_eq!(monitor.stats().count, 4);
    }

    // State is fully rebuilt each cycle, never accumulated
    assert_eq!(monitor.export().resources.len(), 4);
}

#[tokio::test]
async fn test_full_interaction_session() {
    let monitor = ResourceMonitor::new(MonitorConfig::default());
    monitor
        .refresh(&FixedTimingSource::new(entries()))
        .await
        .expect("refresh failed");

    // Sort by size descending, select the biggest, then narrow the view
    monitor.dispatch(ViewAction::SetSort(SortKey::Size));
    monitor.dispatch(ViewAction::ToggleSortDirection);
    let top = monitor.visible_records()[0].clone();
    assert_eq!(top.name, "search.js");
    monitor.dispatch(ViewAction::Select(top.url.clone()));
    assert_eq!(monitor.selected_url().as_deref(), Some(top.url.as_str()));

    // Filtering to stylesheets hides the selected script
    monitor.dispatch(ViewAction::SetFilter(ResourceCategory::Stylesheet.into()));
    assert!(monitor.selected_url().is_none());
    assert_eq!(monitor.visible_records().len(), 1);

    // Back to everything, direction choice intact
    monitor.dispatch(ViewAction::SetFilter(view_pipeline::CategoryFilter::All));
    let view = monitor.view();
    assert_eq!(view.sort_key, SortKey::Size);
    assert!(!view.ascending);
}

#[tokio::test]
async fn test_custom_cdn_list_drives_cache_inference() {
    // The partner host strips size data; with it allow-listed the zero-size
    // record reads as cached instead of failed-and-empty
    let config = MonitorConfig::builder()
        .cdn_host("media.partner.net".to_string())
        .build();
    let monitor = ResourceMonitor::new(config);
    monitor
        .refresh(&FixedTimingSource::new(entries()))
        .await
        .expect("refresh failed");

    let records = monitor.visible_records();
    let diagram = records.iter().find(|r| r.name == "diagram.svg").unwrap();
    assert!(diagram.is_cached_resource);

    // Same entries through the default list stay uncached
    let monitor = ResourceMonitor::new(MonitorConfig::default());
    monitor
        .refresh(&FixedTimingSource::new(entries()))
        .await
        .expect("refresh failed");
    let records = monitor.visible_records();
    let diagram = records.iter().find(|r| r.name == "diagram.svg").unwrap();
    assert!(!diagram.is_cached_resource);
}

#[tokio::test]
async fn test_clear_then_refresh_round_trip() {
    let monitor = ResourceMonitor::new(MonitorConfig::default());
    let source = FixedTimingSource::new(entries());

    monitor.refresh(&source).await.expect("refresh failed");
    monitor.dispatch(ViewAction::SetSearch("theme".into()));
    monitor.clear();
    assert!(monitor.visible_records().is_empty());
    assert!(monitor.export().resources.is_empty());

    monitor.refresh(&source).await.expect("refresh failed");
    // Cleared search does not linger into the next capture
    assert_eq!(monitor.visible_records().len(), 4);
}
