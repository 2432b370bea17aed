//! Property-based tests for the controller's laws.
//!
//! Tests validate:
//! 1. An unconstrained state shows every item in input order
//! 2. Every search result contains the query in a searchable field
//! 3. Adding a constraint never grows the result set
//! 4. Pages partition the ordered results exactly once
//! 5. Descending order is ascending order reversed when keys are unique
//! 6. Reset restores the construction state after any action sequence
//! 7. The memoized view equals a from-scratch recomputation

use facetkit::matching::MatchRules;
use facetkit::{
    ActiveFilters, Config, FilterAction, FilterController, FilterValue, SortDirection, ViewMode,
};
use proptest::prelude::*;
use serde_json::{json, Value};

const WORDS: [&str; 6] = ["red", "blue", "shirt", "hat", "green", "shoes"];
const BRANDS: [&str; 3] = ["Acme", "Zeta", "Orbit"];

fn item_strategy() -> impl Strategy<Value = Value> {
    (
        prop::sample::select(WORDS.to_vec()),
        prop::sample::select(WORDS.to_vec()),
        prop::sample::select(BRANDS.to_vec()),
        0u32..100,
        any::<bool>(),
    )
        .prop_map(|(a, b, brand, price, in_stock)| {
            json!({
                "title": format!("{a} {b}"),
                "brand": brand,
                "price": price,
                "in_stock": in_stock,
            })
        })
}

fn items_strategy() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(item_strategy(), 0..40)
}

/// Items with pairwise distinct prices in shuffled order.
fn unique_price_items() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::btree_set(0u32..1000, 0..30)
        .prop_map(|prices| prices.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|prices| {
            prices
                .into_iter()
                .enumerate()
                .map(|(id, price)| json!({"id": id, "title": "item", "price": price}))
                .collect()
        })
}

fn action_strategy() -> impl Strategy<Value = FilterAction> {
    prop_oneof![
        prop::sample::subsequence(BRANDS.to_vec(), 0..=3)
            .prop_map(|brands| FilterAction::set_filter("brand", FilterValue::set(brands))),
        (0f64..100.0, 0f64..100.0).prop_map(|(a, b)| FilterAction::set_filter(
            "price",
            FilterValue::range(a.min(b), a.max(b))
        )),
        prop::sample::select(BRANDS.to_vec())
            .prop_map(|brand| FilterAction::remove_filter("brand", Some(brand.to_string()))),
        prop::sample::select(WORDS.to_vec()).prop_map(|w| FilterAction::SetSearchQuery(w.to_string())),
        Just(FilterAction::ClearAllFilters),
        any::<bool>().prop_map(|desc| FilterAction::sort_by(
            "price",
            if desc { SortDirection::Descending } else { SortDirection::Ascending }
        )),
        Just(FilterAction::SetViewMode(ViewMode::Table)),
        (0usize..6).prop_map(FilterAction::SetPage),
        (0usize..8).prop_map(FilterAction::SetPageSize),
    ]
}

fn all_ids(controller: &FilterController<Value>) -> Vec<Value> {
    controller.all_filtered().cloned().collect()
}

// ===== Property 1: Unconstrained state is the identity =====

proptest! {
    #[test]
    fn empty_state_shows_items_in_order(items in items_strategy()) {
        let config = Config { page_size: items.len().max(1), ..Config::default() };
        let controller = FilterController::new(items.clone(), vec![], &config);

        let shown: Vec<Value> = controller.filtered_data().into_iter().cloned().collect();
        prop_assert_eq!(shown, items.clone());
        prop_assert_eq!(controller.total_count(), items.len());
    }
}

// ===== Property 2: Search containment =====

proptest! {
    #[test]
    fn search_results_contain_query(items in items_strategy(), word in prop::sample::select(WORDS.to_vec()), cut in 1usize..5) {
        let query: String = word.chars().take(cut).collect::<String>().to_uppercase();
        let mut controller = FilterController::new(items, vec![], &Config::default());
        controller.set_search_query(&query);

        for item in controller.all_filtered() {
            let title = item["title"].as_str().unwrap_or_default().to_lowercase();
            prop_assert!(title.contains(&query.to_lowercase()), "{title:?} lacks {query:?}");
        }
    }
}

// ===== Property 3: Monotonicity =====

proptest! {
    #[test]
    fn new_constraint_never_grows_results(
        items in items_strategy(),
        prefix in prop::collection::vec(action_strategy(), 0..6),
        in_stock in any::<bool>(),
    ) {
        let mut controller = FilterController::new(items, vec![], &Config::default());
        for action in prefix {
            controller.dispatch(action);
        }

        let before = controller.total_count();
        controller.set_filter("in_stock", FilterValue::scalar(in_stock.to_string()));
        prop_assert!(controller.total_count() <= before);
    }
}

// ===== Property 4: Pagination law =====

proptest! {
    #[test]
    fn pages_partition_results(
        items in items_strategy(),
        page_size in 1usize..9,
        actions in prop::collection::vec(action_strategy(), 0..4),
    ) {
        let mut controller = FilterController::new(items, vec![], &Config::default());
        for action in actions {
            controller.dispatch(action);
        }
        controller.set_page_size(page_size);

        let total = controller.total_count();
        let pages = controller.page_count();
        prop_assert_eq!(pages, total.div_ceil(page_size));

        let mut concatenated = Vec::new();
        for page in 1..=pages {
            controller.set_page(page);
            let shown: Vec<Value> = controller.filtered_data().into_iter().cloned().collect();
            prop_assert!(!shown.is_empty() && shown.len() <= page_size);
            concatenated.extend(shown);
        }
        prop_assert_eq!(concatenated, all_ids(&controller));
    }
}

// ===== Property 5: Sort round-trip =====

proptest! {
    #[test]
    fn descending_is_reversed_ascending(items in unique_price_items()) {
        let mut controller = FilterController::new(items, vec![], &Config::default());

        controller.set_sort("price", SortDirection::Ascending);
        let mut ascending = all_ids(&controller);
        ascending.reverse();

        controller.set_sort("price", SortDirection::Descending);
        prop_assert_eq!(all_ids(&controller), ascending);
    }
}

// ===== Property 6: Reset law =====

proptest! {
    #[test]
    fn reset_restores_initial_state(
        items in items_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..12),
        page_size in 1usize..30,
    ) {
        let config = Config { page_size, ..Config::default() };
        let fresh = FilterController::new(items.clone(), vec![], &config);
        let mut controller = FilterController::new(items, vec![], &config);

        for action in actions {
            controller.dispatch(action);
        }
        controller.reset();

        prop_assert_eq!(controller.state(), fresh.state());
        prop_assert_eq!(all_ids(&controller), all_ids(&fresh));
    }
}

// ===== Property 7: Memoization is invisible =====

proptest! {
    #[test]
    fn memoized_view_equals_recomputation(
        items in items_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..12),
    ) {
        let mut controller = FilterController::new(items.clone(), vec![], &Config::default());
        for action in actions {
            controller.dispatch(action);
        }

        let state = controller.state().clone();
        let fresh = FilterController::new(items.clone(), vec![], &Config::default());
        let rules = fresh.rules();

        let mut expected: Vec<&Value> = items
            .iter()
            .filter(|item| rules.matches(*item, &state.filters, &state.search_query))
            .collect();
        if let Some(field) = &state.sort_field {
            let key = |item: &Value| item[field.as_str()].as_f64();
            expected.sort_by(|a, b| match (key(a), key(b)) {
                (Some(x), Some(y)) => state.sort_direction.apply(x.total_cmp(&y)),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            });
        }

        let expected: Vec<Value> = expected.into_iter().cloned().collect();
        prop_assert_eq!(all_ids(&controller), expected);
    }
}

#[test]
fn default_rules_ignore_unknown_filters_as_non_matching() {
    let rules = MatchRules::default();
    let mut filters = ActiveFilters::new();
    assert!(rules.matches(&json!({"title": "Hat"}), &filters, ""));

    filters = serde_json::from_value(json!({"color": {"kind": "scalar", "value": "red"}})).unwrap();
    assert!(!rules.matches(&json!({"title": "Hat"}), &filters, ""));
}
