//! Public API for the Resource Monitor core
//!
//! This module provides a simple, ergonomic facade for panel drivers. It
//! wraps the lower-level `monitor_component` orchestrator behind a cheaply
//! cloneable handle and re-exports the types a driver needs.
//!
//! # Example
//!
//! ```no_run
//! use monitor_api::{Monitor, MonitorConfig};
//! use capture_ingest::FixedTimingSource;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let monitor = Monitor::new(MonitorConfig::default());
//!     let source = FixedTimingSource::new(Vec::new());
//!
//!     monitor.refresh(&source).await?;
//!     let table = monitor.visible_records();
//!     let timeline = monitor.timeline(960.0);
//!     println!("{} rows, {} bars", table.len(), timeline.items.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

use std::sync::Arc;

// Re-export the types drivers interact with
pub use capture_ingest::{IngestError, TimingSource};
pub use monitor_component::{
    DataAvailability, ExportDocument, MonitorConfig, MonitorError, Result,
};
pub use resource_types::{Capture, RawTimingEntry, ResourceCategory, ResourceRecord};
pub use timeline_layout::TimelineLayout;
pub use view_pipeline::{CaptureStats, CategoryFilter, SortKey, ViewAction, ViewState};

use monitor_component::ResourceMonitor;

/// Main Resource Monitor public API.
///
/// A thin, cloneable handle over the underlying [`ResourceMonitor`]; all
/// clones share the same capture and view state.
#[derive(Debug, Clone)]
pub struct Monitor {
    inner: Arc<ResourceMonitor>,
}

impl Monitor {
    /// Create a new monitor with the given configuration
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            inner: Arc::new(ResourceMonitor::new(config)),
        }
    }

    /// Ingest a fresh capture from `source`, replacing the previous one.
    ///
    /// Callers must not issue overlapping refreshes; results are not
    /// deduplicated here.
    pub async fn refresh(&self, source: &dyn TimingSource) -> Result<()> {
        self.inner.refresh(source).await
    }

    /// Apply a user interaction (filter, sort, search, selection)
    pub fn dispatch(&self, action: ViewAction) {
        self.inner.dispatch(action)
    }

    /// Discard the capture and reset filter, search, and selection
    pub fn clear(&self) {
        self.inner.clear()
    }

    /// Whether page data is available, empty, or missing
    pub fn availability(&self) -> DataAvailability {
        self.inner.availability()
    }

    /// Snapshot of the current view state
    pub fn view(&self) -> ViewState {
        self.inner.view()
    }

    /// Display-ordered, display-filtered records for the table
    pub fn visible_records(&self) -> Vec<ResourceRecord> {
        self.inner.visible_records()
    }

    /// Statistics over the full capture
    pub fn stats(&self) -> CaptureStats {
        self.inner.stats()
    }

    /// Statistics over the visible subset
    pub fn visible_stats(&self) -> CaptureStats {
        self.inner.visible_stats()
    }

    /// Timeline geometry for the visible subset
    pub fn timeline(&self, axis_width_px: f64) -> TimelineLayout {
        self.inner.timeline(axis_width_px)
    }

    /// URL of the selected record, if any
    pub fn selected_url(&self) -> Option<String> {
        self.inner.selected_url()
    }

    /// URLs related to the current selection
    pub fn related_urls(&self) -> std::collections::HashSet<String> {
        self.inner.related_urls()
    }

    /// Export document for the full unfiltered capture
    pub fn export(&self) -> ExportDocument {
        self.inner.export()
    }

    /// Export the full capture as pretty-printed JSON
    pub fn export_json(&self) -> Result<String> {
        self.inner.export_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capture_ingest::FixedTimingSource;

    #[tokio::test]
    async fn test_clones_share_state() {
        let monitor = Monitor::new(MonitorConfig::default());
        let clone = monitor.clone();

        let source = FixedTimingSource::new(vec![RawTimingEntry::sub_resource(
            "https://example.com/a.js",
            "script",
        )
        .with_timing(0.0, 5.0, 20.0)
        .with_sizes(100, 0, 0)]);

        monitor.refresh(&source).await.unwrap();
        assert_eq!(clone.stats().count, 1);

        clone.dispatch(ViewAction::SetSearch("nothing-matches".into()));
        assert!(monitor.visible_records().is_empty());
    }

    #[tokio::test]
    async fn test_export_json_round_trips() {
        let monitor = Monitor::new(MonitorConfig::default());
        monitor
            .refresh(&FixedTimingSource::new(Vec::new()))
            .await
            .unwrap();

        let json = monitor.export_json().unwrap();
        assert!(json.contains("\"timeUnit\": \"seconds\""));
    }
}
