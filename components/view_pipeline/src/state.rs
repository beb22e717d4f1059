// Immutable view state and its reducer

use crate::pipeline::apply_pipeline;
use crate::related::find_related;
use resource_types::{ResourceCategory, ResourceRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Active category filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// Pass every record through
    #[default]
    All,
    /// Exact category match
    Category(ResourceCategory),
}

impl CategoryFilter {
    /// Whether a record passes this filter
    pub fn matches(&self, record: &ResourceRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => record.category == *category,
        }
    }
}

impl From<ResourceCategory> for CategoryFilter {
    fn from(category: ResourceCategory) -> Self {
        CategoryFilter::Category(category)
    }
}

/// Sortable record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Name,
    Category,
    Domain,
    Size,
    StartTime,
    Duration,
    Status,
}

/// User interaction dispatched against the current view state
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    /// Activate a category filter
    SetFilter(CategoryFilter),
    /// Sort by a column; re-sorting the active column flips the direction,
    /// a new column starts ascending
    SetSort(SortKey),
    /// Flip the sort direction without changing the key
    ToggleSortDirection,
    /// Replace the free-text search query
    SetSearch(String),
    /// Clear the search query
    ClearSearch,
    /// Select a record by URL; selecting the current selection deselects it
    Select(String),
    /// Drop the selection and its related set
    ClearSelection,
    /// Clear-action reset: filter to all, search empty, selection gone.
    /// Sort choices survive.
    Reset,
}

/// Ephemeral, user-controlled filter/sort/selection state layered over a
/// Capture. ViewState never mutates the Capture; it only narrows and
/// reorders a view over it.
///
/// Values are immutable — every interaction produces a new state through
/// [`ViewState::apply`], which also keeps the selection consistent with the
/// currently visible subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Active category filter
    pub filter: CategoryFilter,
    /// Active sort column
    pub sort_key: SortKey,
    /// Sort direction
    pub ascending: bool,
    /// Lowercased free-text search query; empty means no search
    pub search_query: String,
    /// URL of the selected record, at most one
    pub selected_url: Option<String>,
    /// URLs related to the selection, recomputed whenever it changes
    pub related_urls: HashSet<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter: CategoryFilter::All,
            sort_key: SortKey::StartTime,
            ascending: true,
            search_query: String::new(),
            selected_url: None,
            related_urls: HashSet::new(),
        }
    }
}

impl ViewState {
    /// Pure reducer: produce the state that follows `action`.
    ///
    /// `records` is the full record set of the current Capture; it is needed
    /// to recompute the related set on selection and to invalidate a
    /// selection that the new filter/search no longer shows.
    pub fn apply(self, action: ViewAction, records: &[ResourceRecord]) -> ViewState {
        debug!(?action, "applying view action");
        let next = match action {
            ViewAction::SetFilter(filter) => ViewState { filter, ..self },
            ViewAction::SetSort(sort_key) => {
                if self.sort_key == sort_key {
                    ViewState {
                        ascending: !self.ascending,
                        ..self
                    }
                } else {
                    ViewState {
                        sort_key,
                        ascending: true,
                        ..self
                    }
                }
            }
            ViewAction::ToggleSortDirection => ViewState {
                ascending: !self.ascending,
                ..self
            },
            ViewAction::SetSearch(query) => ViewState {
                search_query: query.to_lowercase(),
                ..self
            },
            ViewAction::ClearSearch => ViewState {
                search_query: String::new(),
                ..self
            },
            ViewAction::Select(url) => self.select(url, records),
            ViewAction::ClearSelection => ViewState {
                selected_url: None,
                related_urls: HashSet::new(),
                ..self
            },
            ViewAction::Reset => ViewState {
                filter: CategoryFilter::All,
                search_query: String::new(),
                selected_url: None,
                related_urls: HashSet::new(),
                ..self
            },
        };
        next.revalidate_selection(records)
    }

    /// Re-check the selection against the record set, e.g. after a refresh
    /// replaced the Capture. A selection absent from the visible subset is
    /// cleared together with its related set, so it never silently refers
    /// to an absent record.
    pub fn revalidate_selection(self, records: &[ResourceRecord]) -> ViewState {
        let Some(selected) = self.selected_url.as_deref() else {
            return self;
        };
        let visible = apply_pipeline(records, &self);
        if visible.iter().any(|r| r.url == selected) {
            self
        } else {
            debug!(url = %selected, "selection left the visible subset, clearing");
            ViewState {
                selected_url: None,
                related_urls: HashSet::new(),
                ..self
            }
        }
    }

    fn select(self, url: String, records: &[ResourceRecord]) -> ViewState {
        // Selecting the current selection toggles it off
        if self.selected_url.as_deref() == Some(url.as_str()) {
            return ViewState {
                selected_url: None,
                related_urls: HashSet::new(),
                ..self
            };
        }
        // Unknown URLs clear the selection instead of dangling
        if !records.iter().any(|r| r.url == url) {
            return ViewState {
                selected_url: None,
                related_urls: HashSet::new(),
                ..self
            };
        }
        let related_urls = find_related(&url, records);
        ViewState {
            selected_url: Some(url),
            related_urls,
            ..self
        }
    }
}
