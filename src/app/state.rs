//! Filter state container.
//!
//! [`FilterState`] is the complete, serializable state of one controller:
//! active filters, free-text query, sort, display mode and pagination. It is
//! mutated only by [`reduce`](crate::app::reduce); consumers read snapshots of
//! it through [`FilterController::state`](crate::app::FilterController::state).
//!
//! # Example
//!
//! ```rust
//! use facetkit::FilterState;
//!
//! let state = FilterState::default();
//! assert_eq!(state.page, 1);
//! assert_eq!(state.page_size, 20);
//! assert!(state.sort_field.is_none());
//! ```

use super::modes::{SortDirection, ViewMode};
use crate::domain::ActiveFilters;
use serde::{Deserialize, Serialize};

/// Page size used when no configuration overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Complete controller state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Active filter values keyed by filter id.
    pub filters: ActiveFilters,

    /// Free-text search query. Empty means no search constraint.
    pub search_query: String,

    /// Field to order by. `None` keeps input order.
    pub sort_field: Option<String>,

    /// Direction applied to `sort_field`.
    pub sort_direction: SortDirection,

    /// Advisory display mode.
    pub view_mode: ViewMode,

    /// Current page, 1-based.
    pub page: usize,

    /// Items per page, at least 1.
    pub page_size: usize,
}

impl FilterState {
    /// Creates the initial state with the given page size and view mode.
    ///
    /// A page size of 0 is stored as 1.
    #[must_use]
    pub fn new(page_size: usize, view_mode: ViewMode) -> Self {
        Self {
            filters: ActiveFilters::new(),
            search_query: String::new(),
            sort_field: None,
            sort_direction: SortDirection::Ascending,
            view_mode,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Zero-based index of the first item on the current page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Number of pages needed for `total` items. Zero items need zero pages.
    #[must_use]
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.max(1))
    }

    /// Half-open index range of the current page within `total` items.
    ///
    /// Pages past the end yield an empty range at `total`.
    #[must_use]
    pub fn page_bounds(&self, total: usize) -> std::ops::Range<usize> {
        let start = self.offset().min(total);
        let end = start.saturating_add(self.page_size.max(1)).min(total);
        start..end
    }

    /// Returns true if any filter or search constraint is active.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.filters.is_empty() || !self.search_query.is_empty()
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, ViewMode::default())
    }
}
