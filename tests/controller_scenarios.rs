//! End-to-end controller scenarios over a small product catalogue.
//!
//! Each test drives the public API the way a listing screen would and checks
//! the page the user sees.

use facetkit::{
    ActiveFilters, Config, FieldType, FilterAction, FilterController, FilterDescriptor, FilterValue, SortDirection,
    SortField, Transition,
};
use serde_json::{json, Value};

fn products() -> Vec<Value> {
    vec![
        json!({"id": 1, "title": "Red Shirt", "brand": "Acme", "price": 20, "created_at": "2024-03-01"}),
        json!({"id": 2, "title": "Blue Hat", "brand": "Acme", "price": 35, "created_at": "2024-01-15T10:00:00Z"}),
        json!({"id": 3, "title": "Green Shoes", "brand": "Zeta", "price": 50, "created_at": "2023-12-31"}),
    ]
}

fn controller() -> FilterController<Value> {
    FilterController::new(products(), vec![], &Config::default())
}

fn ids(controller: &FilterController<Value>) -> Vec<i64> {
    controller
        .filtered_data()
        .iter()
        .filter_map(|item| item["id"].as_i64())
        .collect()
}

#[test]
fn brand_filter_keeps_matching_items() {
    let mut controller = controller();
    controller.set_filter("brand", FilterValue::set(["Acme"]));

    assert_eq!(ids(&controller), vec![1, 2]);
    assert_eq!(controller.total_count(), 2);
}

#[test]
fn search_matches_title_substring() {
    let mut controller = controller();
    controller.set_search_query("shoe");
    assert_eq!(ids(&controller), vec![3]);
}

#[test]
fn price_range_is_inclusive() {
    let mut controller = controller();
    controller.set_filter("price", FilterValue::range(25.0, 60.0));
    assert_eq!(ids(&controller), vec![2, 3]);

    controller.set_filter("price", FilterValue::range(20.0, 35.0));
    assert_eq!(ids(&controller), vec![1, 2]);
}

#[test]
fn sort_by_price_descending() {
    let mut controller = controller();
    controller.set_sort("price", SortDirection::Descending);
    assert_eq!(ids(&controller), vec![3, 2, 1]);
}

#[test]
fn second_page_of_size_one() {
    let mut controller = controller();
    controller.set_page_size(1);
    controller.set_page(2);

    assert_eq!(ids(&controller), vec![2]);
    assert_eq!(controller.total_count(), 3);
    assert_eq!(controller.page_count(), 3);
}

#[test]
fn clear_all_restores_full_list() {
    let mut controller = controller();
    controller.set_filter("brand", FilterValue::set(["Acme"]));
    controller.clear_all_filters();

    assert!(controller.state().filters.is_empty());
    assert_eq!(ids(&controller), vec![1, 2, 3]);
}

#[test]
fn clear_all_is_idempotent() {
    let mut controller = controller();
    controller.set_filter("brand", FilterValue::set(["Zeta"]));
    controller.set_search_query("green");

    assert_eq!(controller.clear_all_filters(), Transition::Refilter);
    let once = controller.state().clone();
    assert_eq!(controller.clear_all_filters(), Transition::Unchanged);
    assert_eq!(controller.state(), &once);
}

#[test]
fn filter_changes_reset_page_but_sort_does_not() {
    let mut controller = controller();
    controller.set_page_size(1);
    controller.set_page(3);

    controller.set_sort("price", SortDirection::Ascending);
    assert_eq!(controller.state().page, 3);

    controller.set_search_query("e");
    assert_eq!(controller.state().page, 1);

    controller.set_page(2);
    controller.set_filter("brand", FilterValue::set(["Acme", "Zeta"]));
    assert_eq!(controller.state().page, 1);
}

#[test]
fn removing_last_member_drops_the_filter() {
    let mut controller = controller();
    controller.set_filter("brand", FilterValue::set(["Acme", "Zeta"]));

    controller.remove_filter("brand", Some("Acme"));
    assert_eq!(controller.state().filters.get("brand"), Some(&FilterValue::set(["Zeta"])));

    controller.remove_filter("brand", Some("Zeta"));
    assert!(!controller.state().filters.contains("brand"));
    assert_eq!(controller.total_count(), 3);
}

#[test]
fn empty_values_are_never_stored() {
    let mut controller = controller();
    controller.set_filter("brand", FilterValue::set(Vec::<String>::new()));
    controller.set_filter("created_at", FilterValue::date_range(None, None));
    controller.set_filter("color", FilterValue::scalar(""));

    assert_eq!(controller.state().filters, ActiveFilters::new());
}

#[test]
fn date_range_compares_calendar_dates() {
    let mut controller = FilterController::new(
        products(),
        vec![FilterDescriptor::date("created_at", "Created")],
        &Config::default(),
    );
    controller.dispatch(FilterAction::from_arg("date:created_at=2024-01-01..2024-01-31").unwrap());
    assert_eq!(ids(&controller), vec![2]);

    controller.dispatch(FilterAction::from_arg("date:created_at=2024-01-01..").unwrap());
    assert_eq!(ids(&controller), vec![1, 2]);
}

#[test]
fn declared_timestamp_field_sorts_chronologically() {
    let config = Config {
        sort_fields: vec![SortField::new("created_at", "Created", FieldType::Timestamp)],
        ..Config::default()
    };
    let mut controller = FilterController::new(products(), vec![], &config);
    controller.set_sort("created_at", SortDirection::Ascending);
    assert_eq!(ids(&controller), vec![3, 2, 1]);
}

#[test]
fn missing_sort_keys_go_last_both_ways() {
    let mut items = products();
    items.push(json!({"id": 4, "title": "Mystery Box", "brand": "Acme"}));
    let mut controller = FilterController::new(items, vec![], &Config::default());

    controller.set_sort("price", SortDirection::Ascending);
    assert_eq!(ids(&controller), vec![1, 2, 3, 4]);

    controller.set_sort("price", SortDirection::Descending);
    assert_eq!(ids(&controller), vec![3, 2, 1, 4]);
}

#[test]
fn out_of_range_pages_are_empty() {
    let mut controller = controller();
    controller.set_page(0);
    assert_eq!(controller.state().page, 1);

    controller.set_page(5);
    assert!(controller.filtered_data().is_empty());
    assert_eq!(controller.total_count(), 3);
    assert!(!controller.has_next_page());
}

#[test]
fn reset_returns_to_construction_state() {
    let mut controller = controller();
    for arg in ["filter:brand=Acme", "search=hat", "sort=price:desc", "view=table", "page_size=1", "page=2"] {
        controller.dispatch(FilterAction::from_arg(arg).unwrap());
    }

    assert_eq!(controller.reset(), Transition::Refilter);
    assert_eq!(controller.state(), controller.initial_state());
    assert_eq!(ids(&controller), vec![1, 2, 3]);
}

#[test]
fn fuzzy_mode_matches_subsequences() {
    let config = Config::from_toml_str("search_mode = \"fuzzy\"").unwrap();
    let mut controller = FilterController::new(products(), vec![], &config);

    controller.set_search_query("grn shs");
    assert_eq!(ids(&controller), vec![3]);
}

#[test]
fn numeric_strings_filter_and_sort_alike() {
    let items = vec![json!({"id": 1, "price": "30"}), json!({"id": 2, "price": "10"})];
    let mut controller = FilterController::new(
        items,
        vec![FilterDescriptor::range("price", "Price", 0.0, 100.0)],
        &Config::default(),
    );

    controller.set_sort("price", SortDirection::Ascending);
    assert_eq!(ids(&controller), vec![2, 1]);

    controller.set_filter("price", FilterValue::range(25.0, 60.0));
    assert_eq!(controller.total_count(), 1);
    assert_eq!(ids(&controller), vec![1]);
}
