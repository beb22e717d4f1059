//! Proportional time-axis layout for the timeline view
//!
//! Converts the display-ordered record subset into pixel-space intervals on
//! a shared time axis. The axis spans `[0, max_end_time]` of the current
//! subset and rescales whenever the subset changes. Rows are assigned
//! strictly by list position — one row per record, fixed height — so bars on
//! different rows may visually overlap in time; the timeline is a
//! sequential list with time-proportional bars, not an interval scheduler.

use resource_types::{ResourceCategory, ResourceRecord};
use serde::Serialize;
use tracing::debug;

/// Geometry and placement options for the timeline
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Width floor so instantaneous or cache-hit fetches stay clickable
    pub min_bar_width_px: f64,
    /// Vertical distance between consecutive rows
    pub row_height_px: f64,
    /// Padding above the first row (and below the last)
    pub row_padding_px: f64,
    /// Minimum content height regardless of row count
    pub min_content_height_px: f64,
    /// Number of axis intervals; the scale renders `tick_count + 1` labels
    pub tick_count: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            min_bar_width_px: 2.0,
            row_height_px: 36.0,
            row_padding_px: 8.0,
            min_content_height_px: 200.0,
            tick_count: 10,
        }
    }
}

/// One positioned timeline bar
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    /// URL of the record this bar represents
    pub url: String,
    /// Display label
    pub name: String,
    /// Category, used for bar styling
    pub category: ResourceCategory,
    /// Left edge in pixels from the axis origin
    pub left_px: f64,
    /// Bar width in pixels, never below the configured floor
    pub width_px: f64,
    /// Row index in current display order
    pub row: usize,
    /// Top edge in pixels
    pub top_px: f64,
    /// Duration in milliseconds, rounded for the tooltip
    pub duration_ms: f64,
}

/// One axis scale label
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTick {
    /// Horizontal offset in pixels
    pub offset_px: f64,
    /// Timestamp this tick marks (ms)
    pub time_ms: f64,
    /// Rendered label, e.g. "250ms"
    pub label: String,
}

/// Complete layout for one render pass
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineLayout {
    /// Positioned bars, one per visible record in display order
    pub items: Vec<TimelineItem>,
    /// Axis scale labels, empty for the placeholder layout
    pub ticks: Vec<AxisTick>,
    /// Axis upper bound (ms); zero for the placeholder layout
    pub max_end_time: f64,
    /// Height the content area needs to fit every row
    pub content_height_px: f64,
}

impl TimelineLayout {
    /// Placeholder layout for "nothing to draw"
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this is the placeholder layout
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Lay out the display-ordered records on a `axis_width_px` wide time axis.
///
/// With no records, or when every end timestamp is zero, the result is the
/// placeholder layout — the degenerate axis must never divide by zero or
/// emit NaN/Infinity geometry.
pub fn layout(
    records: &[ResourceRecord],
    axis_width_px: f64,
    options: &LayoutOptions,
) -> TimelineLayout {
    let max_end_time = records.iter().map(|r| r.end_time).fold(0.0, f64::max);
    if records.is_empty() || max_end_time <= 0.0 || axis_width_px <= 0.0 {
        debug!(
            records = records.len(),
            max_end_time, "degenerate axis, emitting placeholder layout"
        );
        return TimelineLayout::empty();
    }

    let items = records
        .iter()
        .enumerate()
        .map(|(row, record)| {
            let left_px = (record.start_time / max_end_time) * axis_width_px;
            let width_px = ((record.end_time - record.start_time) / max_end_time * axis_width_px)
                .max(options.min_bar_width_px);
            TimelineItem {
                url: record.url.clone(),
                name: record.name.clone(),
                category: record.category,
                left_px,
                width_px,
                row,
                top_px: row as f64 * options.row_height_px + options.row_padding_px,
                duration_ms: record.duration().round(),
            }
        })
        .collect();

    let content_height_px = (records.len() as f64 * options.row_height_px
        + 2.0 * options.row_padding_px)
        .max(options.min_content_height_px);

    TimelineLayout {
        items,
        ticks: scale_ticks(max_end_time, axis_width_px, options.tick_count),
        max_end_time,
        content_height_px,
    }
}

/// Evenly spaced axis labels from 0 to `max_end_time`
fn scale_ticks(max_end_time: f64, axis_width_px: f64, tick_count: usize) -> Vec<AxisTick> {
    if tick_count == 0 {
        return Vec::new();
    }
    (0..=tick_count)
        .map(|i| {
            let fraction = i as f64 / tick_count as f64;
            let time_ms = fraction * max_end_time;
            AxisTick {
                offset_px: fraction * axis_width_px,
                time_ms,
                label: format!("{}ms", time_ms.round()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use resource_types::{resource_domain, resource_name, ResourceStatus};

    fn record(url: &str, start: f64, end: f64) -> ResourceRecord {
        ResourceRecord {
            url: url.to_string(),
            name: resource_name(url),
            domain: resource_domain(url),
            category: ResourceCategory::Other,
            start_time: start,
            end_time: end,
            size: 0,
            transfer_size: 0,
            encoded_body_size: 0,
            decoded_body_size: 0,
            is_cached_resource: false,
            status: ResourceStatus::assumed_success(),
            cookies: 0,
            cookie_details: None,
        }
    }

    #[test]
    fn test_proportional_geometry() {
        let records = vec![
            record("https://a.com/1", 0.0, 500.0),
            record("https://a.com/2", 250.0, 1000.0),
        ];

        let result = layout(&records, 1000.0, &LayoutOptions::default());
        assert_eq!(result.max_end_time, 1000.0);

        assert_eq!(result.items[0].left_px, 0.0);
        assert_eq!(result.items[0].width_px, 500.0);
        assert_eq!(result.items[1].left_px, 250.0);
        assert_eq!(result.items[1].width_px, 750.0);
    }

    #[test]
    fn test_rows_follow_list_position() {
        let options = LayoutOptions::default();
        let records = vec![
            record("https://a.com/1", 0.0, 100.0),
            record("https://a.com/2", 0.0, 100.0),
            record("https://a.com/3", 0.0, 100.0),
        ];

        let result = layout(&records, 800.0, &options);
        for (i, item) in result.items.iter().enumerate() {
            assert_eq!(item.row, i);
            assert_eq!(
                item.top_px,
                i as f64 * options.row_height_px + options.row_padding_px
            );
        }
    }

    #[test]
    fn test_zero_duration_gets_min_width() {
        let records = vec![
            record("https://a.com/hit", 300.0, 300.0),
            record("https://a.com/slow", 0.0, 1000.0),
        ];

        let result = layout(&records, 1000.0, &LayoutOptions::default());
        assert_eq!(result.items[0].width_px, 2.0);
    }

    #[test]
    fn test_degenerate_axis_yields_placeholder() {
        // All end timestamps zero: no axis to scale against
        let records = vec![record("https://a.com/x", 0.0, 0.0)];
        let result = layout(&records, 1000.0, &LayoutOptions::default());
        assert!(result.is_empty());
        assert_eq!(result.max_end_time, 0.0);

        // Empty subset
        let result = layout(&[], 1000.0, &LayoutOptions::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_no_nan_or_infinite_geometry() {
        let records = vec![
            record("https://a.com/hit", 0.0, 0.0),
            record("https://a.com/real", 10.0, 90.0),
        ];

        let result = layout(&records, 640.0, &LayoutOptions::default());
        for item in &result.items {
            assert!(item.left_px.is_finite());
            assert!(item.width_px.is_finite());
        }
    }

    #[test]
    fn test_scale_ticks() {
        let result = layout(
            &[record("https://a.com/x", 0.0, 1000.0)],
            500.0,
            &LayoutOptions::default(),
        );

        assert_eq!(result.ticks.len(), 11);
        assert_eq!(result.ticks[0].label, "0ms");
        assert_eq!(result.ticks[10].label, "1000ms");
        assert_eq!(result.ticks[5].offset_px, 250.0);
        assert_eq!(result.ticks[5].time_ms, 500.0);
    }

    #[test]
    fn test_content_height_floor() {
        let options = LayoutOptions::default();
        let result = layout(
            &[record("https://a.com/x", 0.0, 100.0)],
            500.0,
            &options,
        );
        assert_eq!(result.content_height_px, options.min_content_height_px);

        let many: Vec<ResourceRecord> = (0..10)
            .map(|i| record(&format!("https://a.com/{}", i), 0.0, 100.0))
            .collect();
        let result = layout(&many, 500.0, &options);
        assert_eq!(result.content_height_px, 10.0 * 36.0 + 16.0);
    }
}
