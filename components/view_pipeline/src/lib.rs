//! Filter / sort / search pipeline and view state
//!
//! This module owns everything the panel derives from a Capture without
//! mutating it: the immutable [`ViewState`] value and its reducer, the
//! display pipeline that narrows and orders the record set, the
//! related-resource heuristics, and the summary statistics.
//!
//! # Example
//!
//! ```
//! use view_pipeline::{apply_pipeline, ViewAction, ViewState};
//! use resource_types::ResourceCategory;
//!
//! let records = Vec::new();
//! let view = ViewState::default()
//!     .apply(ViewAction::SetSearch("css".into()), &records)
//!     .apply(ViewAction::SetFilter(ResourceCategory::Stylesheet.into()), &records);
//!
//! assert!(apply_pipeline(&records, &view).is_empty());
//! ```

mod pipeline;
mod related;
mod state;
mod stats;

pub use pipeline::{apply_pipeline, search_haystack};
pub use related::find_related;
pub use state::{CategoryFilter, SortKey, ViewAction, ViewState};
pub use stats::{aggregate, CaptureStats};
