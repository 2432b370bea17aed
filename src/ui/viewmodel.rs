//! View models for the filter widgets.
//!
//! View models are immutable, display-ready snapshots computed from a
//! [`FilterController`](crate::FilterController) by
//! [`compute_viewmodel`](crate::FilterController::compute_viewmodel). They
//! carry no business logic beyond translating an interaction into the
//! [`FilterAction`] the caller should dispatch: a widget never mutates state
//! itself.
//!
//! # Example
//!
//! ```rust
//! use facetkit::{Config, FilterController, FilterDescriptor, FilterOption};
//! use serde_json::json;
//!
//! let brand = FilterDescriptor::multiple(
//!     "brand",
//!     "Brand",
//!     vec![FilterOption::new("Acme", "Acme"), FilterOption::new("Zeta", "Zeta")],
//! );
//! let mut controller = FilterController::new(
//!     vec![json!({"title": "Hat", "brand": "Acme"})],
//!     vec![brand],
//!     &Config::default(),
//! );
//!
//! let bar = controller.filter_bar();
//! let action = bar.select("brand").and_then(|select| select.toggle("Acme")).unwrap();
//! controller.dispatch(action);
//! assert_eq!(controller.filter_bar().badges.len(), 1);
//! ```

use crate::app::{FilterAction, SortDirection, ViewMode};
use crate::domain::{FilterValue, RangeBounds};
use chrono::NaiveDate;

/// Everything needed to render one filtered listing.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterViewModel {
    /// Controls, badges, sort and counter.
    pub filter_bar: FilterBarView,
    /// The current page of results.
    pub results: ResultsView,
}

/// The filter bar composite.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBarView {
    /// Search box, present when a `search` descriptor is declared.
    pub search: Option<SearchBoxView>,
    /// One control per non-search descriptor, in declaration order.
    pub controls: Vec<ControlView>,
    /// One badge per active value (one per member for set filters).
    pub badges: Vec<BadgeView>,
    /// Sort selector.
    pub sort: SortView,
    /// "Showing x-y of z" readout.
    pub counter: ResultCounterView,
}

impl FilterBarView {
    /// Returns the select control for filter `id`.
    #[must_use]
    pub fn select(&self, id: &str) -> Option<&SelectView> {
        self.controls.iter().find_map(|control| match control {
            ControlView::Select(select) if select.id == id => Some(select),
            _ => None,
        })
    }

    /// Returns true if any badge is shown.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.badges.is_empty()
    }

    /// Action for a "clear all" button.
    #[must_use]
    pub const fn clear_all(&self) -> FilterAction {
        FilterAction::ClearAllFilters
    }
}

/// Free-text search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBoxView {
    /// Label of the search descriptor.
    pub label: String,
    /// Placeholder shown while the query is empty.
    pub placeholder: String,
    /// Current query.
    pub query: String,
}

impl SearchBoxView {
    /// Action for the user typing `text` into the box.
    #[must_use]
    pub fn input(&self, text: &str) -> FilterAction {
        FilterAction::SetSearchQuery(text.to_string())
    }

    /// Action for the clear button.
    #[must_use]
    pub fn clear(&self) -> FilterAction {
        FilterAction::SetSearchQuery(String::new())
    }
}

/// One input control of the filter bar.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlView {
    /// Single- or multi-select list.
    Select(SelectView),
    /// Numeric range input.
    Range(RangeView),
    /// Date range input.
    Date(DateView),
}

/// A single- or multi-select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView {
    /// Filter id.
    pub id: String,
    /// Display label.
    pub label: String,
    /// True for multi-select.
    pub multiple: bool,
    /// Options in declaration order.
    pub options: Vec<OptionView>,
    /// Members of the active value, including ones no option declares.
    pub members: Vec<String>,
}

impl SelectView {
    /// Action for the user clicking option `option_id`.
    ///
    /// Multi-select adds or removes the member; single-select selects the
    /// option, or clears the filter when it was already selected. Returns
    /// `None` for an unknown option.
    #[must_use]
    pub fn toggle(&self, option_id: &str) -> Option<FilterAction> {
        let option = self.options.iter().find(|option| option.id == option_id)?;

        if self.multiple {
            if option.selected {
                return Some(FilterAction::remove_filter(&self.id, Some(option.id.clone())));
            }
            let members = self.members.iter().cloned().chain(std::iter::once(option.id.clone()));
            return Some(FilterAction::set_filter(&self.id, FilterValue::set(members)));
        }

        if option.selected {
            Some(FilterAction::remove_filter(&self.id, None))
        } else {
            Some(FilterAction::set_filter(&self.id, FilterValue::scalar(option.id.clone())))
        }
    }

    /// Action for the control's clear button.
    #[must_use]
    pub fn clear(&self) -> FilterAction {
        FilterAction::remove_filter(&self.id, None)
    }

    /// Ids of the selected options.
    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.options.iter().filter(|o| o.selected).map(|o| o.id.as_str())
    }
}

/// One option of a select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    /// Value stored in the filter.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Caller-supplied count, or the live facet count when none was given.
    pub count: Option<usize>,
    /// Whether the option is part of the active value.
    pub selected: bool,
}

/// A numeric range control.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeView {
    /// Filter id.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Declared bounds.
    pub bounds: Option<RangeBounds>,
    /// Active `(min, max)`, if the filter is set.
    pub current: Option<(f64, f64)>,
}

impl RangeView {
    /// Action for the user choosing `[min, max]`.
    #[must_use]
    pub fn select(&self, min: f64, max: f64) -> FilterAction {
        FilterAction::set_filter(&self.id, FilterValue::range(min, max))
    }
}

/// A date range control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateView {
    /// Filter id.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Active start date.
    pub from: Option<NaiveDate>,
    /// Active end date.
    pub to: Option<NaiveDate>,
}

impl DateView {
    /// Action for the user choosing a date range. Both ends open clears it.
    #[must_use]
    pub fn select(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> FilterAction {
        FilterAction::set_filter(&self.id, FilterValue::date_range(from, to))
    }
}

/// A removable chip describing one active value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    /// Filter id.
    pub filter_id: String,
    /// Filter label.
    pub label: String,
    /// Value text.
    pub value_label: String,
    /// Set member this badge stands for, if the filter holds a set.
    pub member: Option<String>,
}

impl BadgeView {
    /// Action for the badge's remove button.
    #[must_use]
    pub fn remove(&self) -> FilterAction {
        FilterAction::remove_filter(&self.filter_id, self.member.clone())
    }
}

/// Sort selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortView {
    /// Declared sort fields.
    pub options: Vec<SortOptionView>,
    /// Active sort field.
    pub field: Option<String>,
    /// Active direction.
    pub direction: SortDirection,
}

impl SortView {
    /// Action for choosing `field`, keeping the current direction.
    #[must_use]
    pub fn select(&self, field: &str) -> FilterAction {
        FilterAction::sort_by(field, self.direction)
    }

    /// Action for the direction toggle; `None` while no field is active.
    #[must_use]
    pub fn toggle_direction(&self) -> Option<FilterAction> {
        self.field
            .as_ref()
            .map(|field| FilterAction::sort_by(field.clone(), self.direction.reversed()))
    }
}

/// One entry of the sort selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOptionView {
    /// Field id.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Whether this field is the active sort.
    pub active: bool,
}

/// Result counter and pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultCounterView {
    /// 1-based position of the first item shown, 0 when nothing is shown.
    pub start: usize,
    /// 1-based position of the last item shown, 0 when nothing is shown.
    pub end: usize,
    /// Total filtered count.
    pub total: usize,
    /// Current page.
    pub page: usize,
    /// Number of pages.
    pub page_count: usize,
    /// Whether filters or a query narrowed the results.
    pub filtered: bool,
}

impl ResultCounterView {
    /// Human-readable summary such as `Showing 1-20 of 57 results`.
    #[must_use]
    pub fn text(&self) -> String {
        let noun = if self.total == 1 { "result" } else { "results" };
        if self.end == 0 {
            format!("Showing 0 of {} {noun}", self.total)
        } else {
            format!("Showing {}-{} of {} {noun}", self.start, self.end, self.total)
        }
    }

    /// Action for the "next page" button, if there is a next page.
    #[must_use]
    pub fn next_page(&self) -> Option<FilterAction> {
        (self.page < self.page_count).then(|| FilterAction::SetPage(self.page + 1))
    }

    /// Action for the "previous page" button, if there is a previous page.
    #[must_use]
    pub fn previous_page(&self) -> Option<FilterAction> {
        (self.page > 1).then(|| FilterAction::SetPage(self.page - 1))
    }
}

/// The results readout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    /// Requested display mode.
    pub view_mode: ViewMode,
    /// Column headers for table mode.
    pub columns: Vec<String>,
    /// Rows on the current page.
    pub rows: Vec<ResultRow>,
    /// Message shown instead of rows when the page is empty.
    pub empty_state: Option<EmptyState>,
}

/// One result on the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    /// Title text.
    pub title: String,
    /// Character ranges of the title matched by the query.
    pub highlight_ranges: Vec<(usize, usize)>,
    /// One cell per configured column.
    pub cells: Vec<String>,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,
    /// Secondary explanatory text.
    pub subtitle: String,
}
