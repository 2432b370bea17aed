//! Actions accepted by the filter controller.
//!
//! This module defines [`FilterAction`], the closed set of state transitions a
//! controller supports. Widgets return actions from their interaction methods,
//! callers dispatch them through
//! [`FilterController::dispatch`](crate::app::FilterController::dispatch), and
//! the reducer applies them to the [`FilterState`](crate::app::FilterState).
//!
//! # Textual Form
//!
//! [`FilterAction::from_arg`] parses a compact textual form used by the demo
//! binary:
//!
//! ```text
//! search=shoe                      set the search query
//! filter:brand=Acme,Zeta           multi-select value
//! single:category=hats             single-select value
//! range:price=25..60               numeric range
//! date:created_at=2024-01-01..     date range (either end may be open)
//! remove:brand / remove:brand=Acme remove a filter or one set member
//! clear                            clear all filters and the query
//! sort=price:desc / sort=          set or clear the sort
//! view=table                       change the view mode
//! page=2 / page_size=10            pagination
//! reset                            restore defaults
//! ```
//!
//! # Example
//!
//! ```rust
//! use facetkit::{FilterAction, FilterValue};
//!
//! let action = FilterAction::from_arg("filter:brand=Acme")?;
//! assert_eq!(action, FilterAction::set_filter("brand", FilterValue::set(["Acme"])));
//! # Ok::<(), facetkit::FacetError>(())
//! ```

use super::modes::{SortDirection, ViewMode};
use crate::domain::error::{FacetError, Result};
use crate::domain::FilterValue;
use chrono::NaiveDate;

/// State transitions supported by the filter controller.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterAction {
    /// Replaces the value of one filter. An empty value removes the filter.
    ///
    /// Resets the page to 1.
    SetFilter {
        /// Filter id.
        id: String,
        /// New value, replacing (not merged with) the old one.
        value: FilterValue,
    },

    /// Removes a filter, or a single member of a set filter.
    ///
    /// With `value` set and the current value being a set, only that member is
    /// removed and the filter disappears when the set empties. Otherwise the
    /// whole filter is removed. Resets the page to 1.
    RemoveFilter {
        /// Filter id.
        id: String,
        /// Set member to remove.
        value: Option<String>,
    },

    /// Empties every filter and the search query in one transition.
    ClearAllFilters,

    /// Replaces the free-text search query. Resets the page to 1.
    SetSearchQuery(String),

    /// Replaces the sort field and direction. Leaves the page unchanged.
    SetSort {
        /// Field to sort by, `None` to restore input order.
        field: Option<String>,
        /// Direction for the field.
        direction: SortDirection,
    },

    /// Replaces the display mode only.
    SetViewMode(ViewMode),

    /// Jumps to a page. Values below 1 are stored as 1.
    SetPage(usize),

    /// Replaces the page size. Values below 1 are stored as 1. Resets the page to 1.
    SetPageSize(usize),

    /// Restores the construction-time defaults.
    Reset,
}

impl FilterAction {
    /// Builds a [`FilterAction::SetFilter`].
    #[must_use]
    pub fn set_filter(id: impl Into<String>, value: FilterValue) -> Self {
        Self::SetFilter {
            id: id.into(),
            value,
        }
    }

    /// Builds a [`FilterAction::RemoveFilter`].
    #[must_use]
    pub fn remove_filter(id: impl Into<String>, value: Option<String>) -> Self {
        Self::RemoveFilter {
            id: id.into(),
            value,
        }
    }

    /// Builds a [`FilterAction::SetSort`] for a field.
    #[must_use]
    pub fn sort_by(field: impl Into<String>, direction: SortDirection) -> Self {
        Self::SetSort {
            field: Some(field.into()),
            direction,
        }
    }

    /// Returns true if applying this action resets the page to 1.
    #[must_use]
    pub const fn resets_page(&self) -> bool {
        matches!(
            self,
            Self::SetFilter { .. }
                | Self::RemoveFilter { .. }
                | Self::ClearAllFilters
                | Self::SetSearchQuery(_)
                | Self::SetPageSize(_)
                | Self::Reset
        )
    }

    /// Parses the compact textual form described in the module docs.
    ///
    /// # Errors
    ///
    /// Returns [`FacetError::InvalidAction`] if the text does not name a known
    /// action or its value cannot be parsed.
    pub fn from_arg(arg: &str) -> Result<Self> {
        let invalid = |reason: &str| FacetError::InvalidAction {
            input: arg.to_string(),
            reason: reason.to_string(),
        };

        let arg = arg.trim();
        match arg {
            "clear" => return Ok(Self::ClearAllFilters),
            "reset" => return Ok(Self::Reset),
            _ => {}
        }

        let (key, value) = arg.split_once('=').unwrap_or((arg, ""));
        let has_value = arg.contains('=');

        if let Some((kind, id)) = key.split_once(':') {
            if id.is_empty() {
                return Err(invalid("missing filter id"));
            }
            return match kind {
                "filter" => Ok(Self::set_filter(
                    id,
                    FilterValue::set(value.split(',').map(str::trim).filter(|m| !m.is_empty())),
                )),
                "single" => Ok(Self::set_filter(id, FilterValue::scalar(value.trim()))),
                "range" => {
                    let (min, max) = value.split_once("..").ok_or_else(|| invalid("expected MIN..MAX"))?;
                    let min = min.trim().parse::<f64>().map_err(|_| invalid("bad range minimum"))?;
                    let max = max.trim().parse::<f64>().map_err(|_| invalid("bad range maximum"))?;
                    Ok(Self::set_filter(id, FilterValue::range(min, max)))
                }
                "date" => {
                    let (from, to) = value.split_once("..").ok_or_else(|| invalid("expected FROM..TO"))?;
                    let from = parse_date(from).map_err(|_| invalid("bad start date"))?;
                    let to = parse_date(to).map_err(|_| invalid("bad end date"))?;
                    Ok(Self::set_filter(id, FilterValue::date_range(from, to)))
                }
                "remove" => Ok(Self::remove_filter(
                    id,
                    has_value.then(|| value.trim().to_string()),
                )),
                _ => Err(invalid("unknown filter kind")),
            };
        }

        if !has_value {
            return Err(invalid("expected KEY=VALUE"));
        }

        match key {
            "search" => Ok(Self::SetSearchQuery(value.to_string())),
            "sort" => {
                if value.trim().is_empty() {
                    return Ok(Self::SetSort {
                        field: None,
                        direction: SortDirection::Ascending,
                    });
                }
                let (field, direction) = value.split_once(':').unwrap_or((value, "asc"));
                let direction = direction
                    .parse::<SortDirection>()
                    .map_err(|e| invalid(&e.to_string()))?;
                Ok(Self::sort_by(field.trim(), direction))
            }
            "view" => value
                .parse::<ViewMode>()
                .map(Self::SetViewMode)
                .map_err(|e| invalid(&e.to_string())),
            "page" => value
                .trim()
                .parse::<usize>()
                .map(Self::SetPage)
                .map_err(|_| invalid("page must be a non-negative integer")),
            "page_size" => value
                .trim()
                .parse::<usize>()
                .map(Self::SetPageSize)
                .map_err(|_| invalid("page_size must be a non-negative integer")),
            _ => Err(invalid("unknown action")),
        }
    }
}

fn parse_date(s: &str) -> std::result::Result<Option<NaiveDate>, chrono::ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Some)
}
