//! Configuration for the monitor component

use serde::{Deserialize, Serialize};
use timeline_layout::LayoutOptions;

/// Configuration for the resource monitor.
///
/// Holds the CDN hostname allow-list used by the size/cache inferencer and
/// the timeline geometry. The allow-list is deliberately configuration, not
/// a core invariant: it is incomplete by nature and drifts as CDNs change,
/// so callers can replace it without touching the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Hostname substrings that force the cached flag for zero-size records
    cdn_hosts: Vec<String>,

    /// Width floor for timeline bars in pixels
    min_bar_width_px: f64,

    /// Timeline row height in pixels
    row_height_px: f64,

    /// Number of axis scale intervals
    axis_tick_count: usize,
}

impl MonitorConfig {
    /// Create a new builder for MonitorConfig
    ///
    /// # Example
    ///
    /// ```
    /// use monitor_component::MonitorConfig;
    ///
    /// let config = MonitorConfig::builder()
    ///     .cdn_host("cdn.example-static.net".to_string())
    ///     .min_bar_width_px(3.0)
    ///     .build();
    /// ```
    pub fn builder() -> MonitorConfigBuilder {
        MonitorConfigBuilder::default()
    }

    /// CDN hostname substrings
    pub fn cdn_hosts(&self) -> &[String] {
        &self.cdn_hosts
    }

    /// Timeline bar width floor
    pub fn min_bar_width_px(&self) -> f64 {
        self.min_bar_width_px
    }

    /// Timeline row height
    pub fn row_height_px(&self) -> f64 {
        self.row_height_px
    }

    /// Axis scale interval count
    pub fn axis_tick_count(&self) -> usize {
        self.axis_tick_count
    }

    /// Timeline layout options derived from this config
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            min_bar_width_px: self.min_bar_width_px,
            row_height_px: self.row_height_px,
            tick_count: self.axis_tick_count,
            ..LayoutOptions::default()
        }
    }
}

impl Default for MonitorConfig {
    /// Default configuration.
    ///
    /// The default CDN list carries the hostname patterns observed to strip
    /// size data in practice.
    fn default() -> Self {
        Self {
            cdn_hosts: vec![
                "r.r10s.jp".to_string(),
                "cdn.".to_string(),
                "cloudfront.net".to_string(),
                "fastly.com".to_string(),
                "jsdelivr.net".to_string(),
            ],
            min_bar_width_px: 2.0,
            row_height_px: 36.0,
            axis_tick_count: 10,
        }
    }
}

/// Builder for MonitorConfig
#[derive(Debug, Clone, Default)]
pub struct MonitorConfigBuilder {
    cdn_hosts: Vec<String>,
    min_bar_width_px: Option<f64>,
    row_height_px: Option<f64>,
    axis_tick_count: Option<usize>,
}

impl MonitorConfigBuilder {
    /// Add a CDN hostname substring to the allow-list.
    ///
    /// Setting any host replaces the default list entirely.
    pub fn cdn_host(mut self, host: String) -> Self {
        self.cdn_hosts.push(host);
        self
    }

    /// Replace the CDN allow-list
    pub fn cdn_hosts(mut self, hosts: Vec<String>) -> Self {
        self.cdn_hosts = hosts;
        self
    }

    /// Set the timeline bar width floor
    pub fn min_bar_width_px(mut self, width: f64) -> Self {
        self.min_bar_width_px = Some(width);
        self
    }

    /// Set the timeline row height
    pub fn row_height_px(mut self, height: f64) -> Self {
        self.row_height_px = Some(height);
        self
    }

    /// Set the axis scale interval count
    pub fn axis_tick_count(mut self, count: usize) -> Self {
        self.axis_tick_count = Some(count);
        self
    }

    /// Build the MonitorConfig, using defaults for anything unset
    pub fn build(self) -> MonitorConfig {
        let default = MonitorConfig::default();

        let cdn_hosts = if self.cdn_hosts.is_empty() {
            default.cdn_hosts
        } else {
            self.cdn_hosts
        };

        MonitorConfig {
            cdn_hosts,
            min_bar_width_px: self.min_bar_width_px.unwrap_or(default.min_bar_width_px),
            row_height_px: self.row_height_px.unwrap_or(default.row_height_px),
            axis_tick_count: self.axis_tick_count.unwrap_or(default.axis_tick_count),
        }
    }
}
