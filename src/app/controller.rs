//! The filter controller.
//!
//! [`FilterController`] owns an item snapshot, the filter descriptors, the
//! optional predicate and comparator overrides, and the current
//! [`FilterState`]. It is the single writer of that state: every change goes
//! through [`dispatch`](FilterController::dispatch) (or one of the named
//! action methods, which dispatch for you), and readers borrow it immutably,
//! so no reader can observe a partially applied action.
//!
//! # Derived View
//!
//! The controller memoizes two index lists into `items`:
//!
//! - `matched`: items passing every active filter and the query, input order
//! - `ordered`: `matched` reordered by the active sort
//!
//! A [`Transition::Refilter`] rebuilds both, a [`Transition::Resort`] only the
//! second, and pagination or view mode changes rebuild nothing. The current
//! page is a slice of `ordered`. Results are identical to recomputing from
//! scratch on every read.
//!
//! # Example
//!
//! ```rust
//! use facetkit::{Config, FilterController, FilterValue, SortDirection};
//! use serde_json::json;
//!
//! let items = vec![
//!     json!({"id": 1, "title": "Red Shirt", "brand": "Acme", "price": 20}),
//!     json!({"id": 2, "title": "Blue Hat", "brand": "Acme", "price": 35}),
//!     json!({"id": 3, "title": "Green Shoes", "brand": "Zeta", "price": 50}),
//! ];
//! let mut controller = FilterController::new(items, vec![], &Config::default());
//!
//! controller.set_filter("price", FilterValue::range(25.0, 60.0));
//! controller.set_sort("price", SortDirection::Descending);
//!
//! let ids: Vec<_> = controller.filtered_data().iter().map(|item| item["id"].clone()).collect();
//! assert_eq!(ids, vec![json!(3), json!(2)]);
//! ```

use super::actions::FilterAction;
use super::handler::{reduce, Transition};
use super::modes::{SortDirection, ViewMode};
use super::state::FilterState;
use crate::domain::{ActiveFilters, FilterDescriptor, FilterKind, FilterValue, Record};
use crate::matching::sort::{sort_by_keys, SortKey};
use crate::matching::{MatchRules, PreparedQuery};
use crate::Config;
use std::cmp::Ordering;

/// Caller-supplied replacement for the default matching rule.
///
/// Receives the item, the active filters and the search query; returns
/// whether the item belongs in the result set.
pub type FilterPredicate<T> = Box<dyn Fn(&T, &ActiveFilters, &str) -> bool>;

/// Caller-supplied replacement for the default ordering rule.
///
/// Receives two items, the sort field and the direction. Must describe a
/// total order; the controller sorts stably with it.
pub type SortComparator<T> = Box<dyn Fn(&T, &T, &str, SortDirection) -> Ordering>;

/// Owner of a filter state and the derived view over an item collection.
pub struct FilterController<T> {
    items: Vec<T>,
    descriptors: Vec<FilterDescriptor>,
    config: Config,
    rules: MatchRules,
    predicate: Option<FilterPredicate<T>>,
    comparator: Option<SortComparator<T>>,
    initial: FilterState,
    state: FilterState,
    matched: Vec<usize>,
    ordered: Vec<usize>,
}

impl<T: Record> FilterController<T> {
    /// Creates a controller over `items` with the given descriptors.
    ///
    /// The initial state takes its page size and view mode from `config`;
    /// search fields, search mode and sort field types also come from
    /// `config`, with descriptor `field_type`s filling in undeclared fields.
    #[must_use]
    pub fn new(items: Vec<T>, descriptors: Vec<FilterDescriptor>, config: &Config) -> Self {
        let rules = config.match_rules(&descriptors);
        let initial = FilterState::new(config.page_size, config.view_mode);

        tracing::debug!(
            items = items.len(),
            descriptors = descriptors.len(),
            page_size = initial.page_size,
            "creating filter controller"
        );

        let mut controller = Self {
            items,
            descriptors,
            config: config.clone(),
            rules,
            predicate: None,
            comparator: None,
            state: initial.clone(),
            initial,
            matched: vec![],
            ordered: vec![],
        };
        controller.refilter();
        controller
    }

    /// Creates a controller using the descriptors declared in `config`.
    #[must_use]
    pub fn from_config(items: Vec<T>, config: &Config) -> Self {
        Self::new(items, config.filters.clone(), config)
    }

    /// Replaces the default matching rule.
    #[must_use]
    pub fn with_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T, &ActiveFilters, &str) -> bool + 'static,
    {
        self.predicate = Some(Box::new(predicate));
        self.refilter();
        self
    }

    /// Replaces the default ordering rule.
    #[must_use]
    pub fn with_comparator<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&T, &T, &str, SortDirection) -> Ordering + 'static,
    {
        self.comparator = Some(Box::new(comparator));
        self.resort();
        self
    }

    /// Applies one action and updates the derived view.
    pub fn dispatch(&mut self, action: FilterAction) -> Transition {
        let transition = reduce(&mut self.state, &action, &self.initial);
        match transition {
            Transition::Refilter => self.refilter(),
            Transition::Resort => self.resort(),
            Transition::Paged | Transition::Unchanged => {}
        }
        transition
    }

    /// Replaces the value of filter `id`; an empty value removes it.
    pub fn set_filter(&mut self, id: &str, value: FilterValue) -> Transition {
        self.dispatch(FilterAction::set_filter(id, value))
    }

    /// Removes filter `id`, or only `member` if the filter holds a set.
    pub fn remove_filter(&mut self, id: &str, member: Option<&str>) -> Transition {
        self.dispatch(FilterAction::remove_filter(id, member.map(String::from)))
    }

    /// Clears every filter and the search query.
    pub fn clear_all_filters(&mut self) -> Transition {
        self.dispatch(FilterAction::ClearAllFilters)
    }

    /// Replaces the search query.
    pub fn set_search_query(&mut self, query: &str) -> Transition {
        self.dispatch(FilterAction::SetSearchQuery(query.to_string()))
    }

    /// Sorts by `field` in `direction`.
    pub fn set_sort(&mut self, field: &str, direction: SortDirection) -> Transition {
        self.dispatch(FilterAction::sort_by(field, direction))
    }

    /// Restores input order.
    pub fn clear_sort(&mut self) -> Transition {
        self.dispatch(FilterAction::SetSort {
            field: None,
            direction: SortDirection::Ascending,
        })
    }

    /// Changes the advisory display mode.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> Transition {
        self.dispatch(FilterAction::SetViewMode(mode))
    }

    /// Jumps to `page`; values below 1 become 1, pages past the end are empty.
    pub fn set_page(&mut self, page: usize) -> Transition {
        self.dispatch(FilterAction::SetPage(page))
    }

    /// Changes the page size and returns to page 1.
    pub fn set_page_size(&mut self, page_size: usize) -> Transition {
        self.dispatch(FilterAction::SetPageSize(page_size))
    }

    /// Restores the construction-time state.
    pub fn reset(&mut self) -> Transition {
        self.dispatch(FilterAction::Reset)
    }

    /// Replaces the item snapshot, keeping the current state.
    pub fn set_items(&mut self, items: Vec<T>) {
        tracing::debug!(previous = self.items.len(), items = items.len(), "replacing items");
        self.items = items;
        self.refilter();
    }

    /// The current state snapshot.
    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    /// The state restored by [`reset`](Self::reset).
    #[must_use]
    pub const fn initial_state(&self) -> &FilterState {
        &self.initial
    }

    /// Items on the current page, in display order.
    #[must_use]
    pub fn filtered_data(&self) -> Vec<&T> {
        self.ordered[self.state.page_bounds(self.ordered.len())]
            .iter()
            .map(|&index| &self.items[index])
            .collect()
    }

    /// Every item passing the filters and query, in display order.
    pub fn all_filtered(&self) -> impl Iterator<Item = &T> + '_ {
        self.ordered.iter().map(move |&index| &self.items[index])
    }

    /// Number of items passing the filters and query, before paging.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.ordered.len()
    }

    /// Number of pages at the current page size.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.state.page_count(self.total_count())
    }

    /// Returns true if a page follows the current one.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.state.page < self.page_count()
    }

    /// Returns true if a page precedes the current one.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.state.page > 1
    }

    /// The full item snapshot.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The filter descriptors, in declaration order.
    #[must_use]
    pub fn descriptors(&self) -> &[FilterDescriptor] {
        &self.descriptors
    }

    /// The descriptor with id `id`.
    #[must_use]
    pub fn descriptor(&self, id: &str) -> Option<&FilterDescriptor> {
        self.descriptors.iter().find(|descriptor| descriptor.id == id)
    }

    /// Configuration the controller was built with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The default rules in effect.
    #[must_use]
    pub const fn rules(&self) -> &MatchRules {
        &self.rules
    }

    /// Counts, per option of choice filter `id`, the items that would match if
    /// that option alone were selected for `id`.
    ///
    /// Every other active filter and the search query still apply. Returns
    /// counts in option order; an unknown or non-choice descriptor yields an
    /// empty list.
    #[must_use]
    pub fn facet_counts(&self, id: &str) -> Vec<(String, usize)> {
        let Some(descriptor) = self.descriptor(id).filter(|d| d.is_choice()) else {
            return vec![];
        };

        let _span = tracing::debug_span!("facet_counts", filter = id, options = descriptor.options.len())
            .entered();

        let prepared = self.rules.prepare(&self.state.search_query);
        let others = self.state.filters.without(id);

        descriptor
            .options
            .iter()
            .map(|option| {
                let mut filters = others.clone();
                let value = match descriptor.kind {
                    FilterKind::Multiple => FilterValue::set([option.id.as_str()]),
                    _ => FilterValue::scalar(option.id.as_str()),
                };
                filters.put(id, value);

                let count = self
                    .items
                    .iter()
                    .filter(|item| self.item_matches(item, &filters, &prepared))
                    .count();
                (option.id.clone(), count)
            })
            .collect()
    }

    fn item_matches(&self, item: &T, filters: &ActiveFilters, query: &PreparedQuery) -> bool {
        self.predicate.as_ref().map_or_else(
            || self.rules.matches_prepared(item, filters, query),
            |predicate| predicate(item, filters, query.as_str()),
        )
    }

    fn refilter(&mut self) {
        let _span = tracing::debug_span!(
            "refilter",
            total_items = self.items.len(),
            active_filters = self.state.filters.len(),
            query_len = self.state.search_query.len(),
            custom_predicate = self.predicate.is_some()
        )
        .entered();

        let prepared = self.rules.prepare(&self.state.search_query);
        let matched: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.item_matches(item, &self.state.filters, &prepared))
            .map(|(index, _)| index)
            .collect();
        self.matched = matched;

        tracing::debug!(matched = self.matched.len(), "filters applied");

        self.resort();
    }

    fn resort(&mut self) {
        let mut ordered = self.matched.clone();

        if let Some(field) = self.state.sort_field.as_deref() {
            let direction = self.state.sort_direction;
            let _span = tracing::debug_span!("resort", field, %direction, items = ordered.len()).entered();

            match &self.comparator {
                Some(comparator) => {
                    ordered.sort_by(|&a, &b| comparator(&self.items[a], &self.items[b], field, direction));
                }
                None => {
                    let field_type = self.rules.field_type(field);
                    let keys = ordered
                        .iter()
                        .map(|&index| SortKey::of(&self.items[index], field, field_type))
                        .collect();
                    sort_by_keys(&mut ordered, keys, direction);
                }
            }
        }

        self.ordered = ordered;
    }
}

impl<T> std::fmt::Debug for FilterController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterController")
            .field("items", &self.items.len())
            .field("descriptors", &self.descriptors.len())
            .field("state", &self.state)
            .field("matched", &self.matched.len())
            .field("custom_predicate", &self.predicate.is_some())
            .field("custom_comparator", &self.comparator.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FilterOption;
    use serde_json::{json, Value};

    fn products() -> Vec<Value> {
        vec![
            json!({"id": 1, "title": "Red Shirt", "brand": "Acme", "price": 20}),
            json!({"id": 2, "title": "Blue Hat", "brand": "Acme", "price": 35}),
            json!({"id": 3, "title": "Green Shoes", "brand": "Zeta", "price": 50}),
        ]
    }

    fn ids(controller: &FilterController<Value>) -> Vec<i64> {
        controller
            .filtered_data()
            .iter()
            .filter_map(|item| item["id"].as_i64())
            .collect()
    }

    fn brand_descriptor() -> FilterDescriptor {
        FilterDescriptor::multiple(
            "brand",
            "Brand",
            vec![FilterOption::new("Acme", "Acme"), FilterOption::new("Zeta", "Zeta")],
        )
    }

    #[test]
    fn unfiltered_view_is_input_order() {
        let controller = FilterController::new(products(), vec![], &Config::default());
        assert_eq!(ids(&controller), vec![1, 2, 3]);
        assert_eq!(controller.total_count(), 3);
        assert_eq!(controller.page_count(), 1);
    }

    #[test]
    fn pagination_slices_ordered_results() {
        let mut controller = FilterController::new(products(), vec![], &Config::default());
        controller.set_page_size(1);
        controller.set_page(2);

        assert_eq!(ids(&controller), vec![2]);
        assert_eq!(controller.total_count(), 3);
        assert!(controller.has_next_page());
        assert!(controller.has_previous_page());

        controller.set_page(7);
        assert!(ids(&controller).is_empty());
        assert_eq!(controller.total_count(), 3);
    }

    #[test]
    fn sort_then_filter_keeps_order() {
        let mut controller = FilterController::new(products(), vec![], &Config::default());
        controller.set_sort("price", SortDirection::Descending);
        controller.set_filter("brand", FilterValue::set(["Acme"]));
        assert_eq!(ids(&controller), vec![2, 1]);
    }

    #[test]
    fn custom_predicate_replaces_default_rule() {
        let controller = FilterController::new(products(), vec![], &Config::default())
            .with_predicate(|item: &Value, _filters, _query| item["price"].as_i64() > Some(30));
        assert_eq!(ids(&controller), vec![2, 3]);
    }

    #[test]
    fn custom_predicate_sees_query_and_filters() {
        let mut controller = FilterController::new(products(), vec![], &Config::default())
            .with_predicate(|item: &Value, filters, query| {
                filters.is_empty() && item["brand"].as_str().is_some_and(|b| b.eq_ignore_ascii_case(query))
            });
        controller.set_search_query("zeta");
        assert_eq!(ids(&controller), vec![3]);

        controller.set_filter("brand", FilterValue::scalar("Zeta"));
        assert!(ids(&controller).is_empty());
    }

    #[test]
    fn custom_comparator_replaces_default_order() {
        let mut controller = FilterController::new(products(), vec![], &Config::default())
            .with_comparator(|a: &Value, b: &Value, _field, direction| {
                let len = |v: &Value| v["title"].as_str().map_or(0, str::len);
                direction.apply(len(a).cmp(&len(b)))
            });
        controller.set_sort("title", SortDirection::Ascending);
        // "Blue Hat" (8), "Red Shirt" (9), "Green Shoes" (11)
        assert_eq!(ids(&controller), vec![2, 1, 3]);
    }

    #[test]
    fn set_items_keeps_state() {
        let mut controller = FilterController::new(products(), vec![], &Config::default());
        controller.set_filter("brand", FilterValue::set(["Acme"]));
        controller.set_items(vec![json!({"id": 9, "brand": "Acme"}), json!({"id": 10, "brand": "Other"})]);
        assert_eq!(ids(&controller), vec![9]);
    }

    #[test]
    fn facet_counts_ignore_own_filter() {
        let mut controller = FilterController::new(products(), vec![brand_descriptor()], &Config::default());
        controller.set_filter("brand", FilterValue::set(["Zeta"]));
        controller.set_filter("price", FilterValue::range(30.0, 60.0));

        assert_eq!(
            controller.facet_counts("brand"),
            vec![("Acme".to_string(), 1), ("Zeta".to_string(), 1)]
        );
        assert!(controller.facet_counts("price").is_empty());
    }

    #[test]
    fn reset_restores_construction_state() {
        let config = Config {
            page_size: 2,
            ..Config::default()
        };
        let mut controller = FilterController::new(products(), vec![], &config);
        controller.set_search_query("hat");
        controller.set_sort("price", SortDirection::Descending);
        controller.set_page_size(10);

        controller.reset();

        assert_eq!(controller.state(), controller.initial_state());
        assert_eq!(controller.state().page_size, 2);
        assert_eq!(ids(&controller), vec![1, 2]);
    }
}
