//! Resource monitor orchestration and integration
//!
//! This module wires the classification, pipeline, layout, and export
//! components around one Capture + ViewState pair and exposes the pure
//! query surface the panel renders from.
//!
//! # Example
//!
//! ```no_run
//! use monitor_component::{MonitorConfig, ResourceMonitor};
//! use capture_ingest::FixedTimingSource;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let monitor = ResourceMonitor::new(MonitorConfig::default());
//!     let source = FixedTimingSource::new(Vec::new());
//!
//!     monitor.refresh(&source).await?;
//!     println!("{} resources", monitor.stats().count);
//!     Ok(())
//! }
//! ```

mod component;
mod config;
mod error;
mod export;

pub use component::{DataAvailability, ResourceMonitor};
pub use config::{MonitorConfig, MonitorConfigBuilder};
pub use error::{MonitorError, Result};
pub use export::{export_capture, ExportDocument, ExportMetadata, ExportRecord, TOOL_NAME};
