//! Monitor orchestration: capture lifecycle and view recomputation

use crate::config::MonitorConfig;
use crate::error::Result;
use crate::export::{export_capture, ExportDocument};
use capture_ingest::{ingest, TimingSource};
use parking_lot::RwLock;
use resource_types::{Capture, ResourceRecord};
use serde::Serialize;
use std::collections::HashSet;
use timeline_layout::{layout, TimelineLayout};
use tracing::{debug, info, warn};
use view_pipeline::{aggregate, apply_pipeline, CaptureStats, ViewAction, ViewState};

/// Whether the panel has page data to show.
///
/// An empty-but-successful capture ("zero resources") and a failed ingestion
/// ("no data available") must render differently, so the distinction is part
/// of the queryable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataAvailability {
    /// No capture: nothing ingested yet, or the last ingestion failed
    Unavailable,
    /// Capture succeeded but holds no records
    Empty,
    /// Capture holds records
    Loaded,
}

#[derive(Debug)]
struct MonitorState {
    capture: Capture,
    view: ViewState,
    visible: Vec<ResourceRecord>,
    availability: DataAvailability,
}

impl MonitorState {
    fn recompute_visible(&mut self) {
        self.visible = apply_pipeline(self.capture.records(), &self.view);
    }
}

/// Resource monitor core.
///
/// Owns the current Capture and ViewState and re-runs the
/// filter → sort → layout → stats pipeline on every mutation, so a refresh
/// completing mid-interaction atomically replaces the capture and the view
/// never reflects a mix of old and new records. All queries are pure reads
/// over the current state; rendering belongs to the caller.
///
/// Computation is synchronous; the only asynchronous boundary is the
/// [`TimingSource`] call inside [`ResourceMonitor::refresh`]. Overlapping
/// refreshes are not coalesced here — the panel driver serializes them.
#[derive(Debug)]
pub struct ResourceMonitor {
    config: MonitorConfig,
    state: RwLock<MonitorState>,
}

impl ResourceMonitor {
    /// Create a monitor with the given configuration
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            config,
            state: RwLock::new(MonitorState {
                capture: Capture::default(),
                view: ViewState::default(),
                visible: Vec::new(),
                availability: DataAvailability::Unavailable,
            }),
        }
    }

    /// Current configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Ingest a fresh capture from `source`, replacing the previous one
    /// wholesale. Filter and sort choices persist across the refresh; a
    /// selection that the new capture no longer shows is cleared.
    ///
    /// On failure the capture is dropped and the state reports
    /// [`DataAvailability::Unavailable`]; no retry is attempted.
    pub async fn refresh(&self, source: &dyn TimingSource) -> Result<()> {
        match source.fetch_entries().await {
            Ok(entries) => {
                let capture = ingest(&entries, self.config.cdn_hosts());
                info!(records = capture.len(), "capture refreshed");

                let mut state = self.state.write();
                state.availability = if capture.is_empty() {
                    DataAvailability::Empty
                } else {
                    DataAvailability::Loaded
                };
                state.capture = capture;
                let view = std::mem::take(&mut state.view);
                state.view = view.revalidate_selection(state.capture.records());
                state.recompute_visible();
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "refresh failed, dropping capture");
                let mut state = self.state.write();
                state.capture = Capture::default();
                state.visible.clear();
                state.availability = DataAvailability::Unavailable;
                Err(err.into())
            }
        }
    }

    /// Apply a user interaction to the view state and recompute the
    /// visible subset
    pub fn dispatch(&self, action: ViewAction) {
        let mut state = self.state.write();
        let view = std::mem::take(&mut state.view);
        state.view = view.apply(action, state.capture.records());
        state.recompute_visible();
    }

    /// Discard the capture and reset filter, search, and selection.
    /// Sort choices survive, matching the clear-button behavior.
    pub fn clear(&self) {
        debug!("clearing capture");
        let mut state = self.state.write();
        state.capture = Capture::default();
        state.availability = DataAvailability::Empty;
        let view = std::mem::take(&mut state.view);
        state.view = view.apply(ViewAction::Reset, &[]);
        state.recompute_visible();
    }

    /// Whether page data is available, empty, or missing
    pub fn availability(&self) -> DataAvailability {
        self.state.read().availability
    }

    /// Snapshot of the current view state
    pub fn view(&self) -> ViewState {
        self.state.read().view.clone()
    }

    /// Display-ordered, display-filtered records for the table
    pub fn visible_records(&self) -> Vec<ResourceRecord> {
        self.state.read().visible.clone()
    }

    /// Statistics over the full capture ("page totals")
    pub fn stats(&self) -> CaptureStats {
        aggregate(self.state.read().capture.records())
    }

    /// Statistics over the visible subset ("visible totals")
    pub fn visible_stats(&self) -> CaptureStats {
        aggregate(&self.state.read().visible)
    }

    /// Timeline geometry for the visible subset on an axis of the given
    /// pixel width
    pub fn timeline(&self, axis_width_px: f64) -> TimelineLayout {
        let state = self.state.read();
        layout(&state.visible, axis_width_px, &self.config.layout_options())
    }

    /// URL of the selected record, if any
    pub fn selected_url(&self) -> Option<String> {
        self.state.read().view.selected_url.clone()
    }

    /// URLs related to the current selection, for highlight styling
    pub fn related_urls(&self) -> HashSet<String> {
        self.state.read().view.related_urls.clone()
    }

    /// Export document for the full unfiltered capture
    pub fn export(&self) -> ExportDocument {
        export_capture(&self.state.read().capture)
    }

    /// Export the full capture as pretty-printed JSON
    pub fn export_json(&self) -> Result<String> {
        let document = self.export();
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
