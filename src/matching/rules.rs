//! Default matching rule.
//!
//! An item matches when the free-text query matches at least one searchable
//! field AND every active filter is satisfied by the item field named after
//! the filter id. All constraints are ANDed.
//!
//! Filter semantics by value tag:
//!
//! | value | item field must |
//! |---|---|
//! | `Scalar(s)` | equal `s` |
//! | `Set(members)` | equal one of `members` |
//! | `Range { min, max }` | be a number, or numeric string, in `[min, max]` |
//! | `DateRange { from, to }` | be a timestamp whose UTC date is in `[from, to]` |
//!
//! Absent, null or mistyped item fields never satisfy a filter.

use crate::app::modes::SearchMode;
use crate::domain::record::timestamp_to_date;
use crate::domain::{ActiveFilters, FieldType, FieldValue, FilterValue, Record};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::collections::HashMap;

/// Fields searched by the default rule when nothing else is configured.
pub const DEFAULT_SEARCH_FIELDS: [&str; 5] = ["title", "name", "description", "content", "tags"];

/// Configuration of the default matching and ordering rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRules {
    /// Fields the free-text query is checked against.
    pub search_fields: Vec<String>,
    /// How the query matches a field.
    pub search_mode: SearchMode,
    /// Declared comparison types used when sorting.
    pub field_types: HashMap<String, FieldType>,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            search_fields: DEFAULT_SEARCH_FIELDS.iter().map(|f| (*f).to_string()).collect(),
            search_mode: SearchMode::Contains,
            field_types: HashMap::new(),
        }
    }
}

impl MatchRules {
    /// Returns the declared comparison type of `field`.
    #[must_use]
    pub fn field_type(&self, field: &str) -> Option<FieldType> {
        self.field_types.get(field).copied()
    }

    /// Prepares a query for repeated matching against many items.
    #[must_use]
    pub fn prepare(&self, query: &str) -> PreparedQuery {
        PreparedQuery::new(query, self.search_mode)
    }

    /// Applies the default rule to one item.
    ///
    /// Convenience for one-off checks; bulk matching should
    /// [`prepare`](Self::prepare) the query once and call
    /// [`matches_prepared`](Self::matches_prepared).
    #[must_use]
    pub fn matches<R: Record + ?Sized>(&self, item: &R, filters: &ActiveFilters, query: &str) -> bool {
        self.matches_prepared(item, filters, &self.prepare(query))
    }

    /// Applies the default rule with an already prepared query.
    #[must_use]
    pub fn matches_prepared<R: Record + ?Sized>(
        &self,
        item: &R,
        filters: &ActiveFilters,
        query: &PreparedQuery,
    ) -> bool {
        self.matches_query(item, query)
            && filters
                .iter()
                .all(|(id, value)| item.field(id).is_some_and(|field| field_satisfies(&field, value)))
    }

    /// Returns true if the query matches at least one searchable field.
    ///
    /// An empty query matches every item.
    #[must_use]
    pub fn matches_query<R: Record + ?Sized>(&self, item: &R, query: &PreparedQuery) -> bool {
        if query.is_empty() {
            return true;
        }

        let fields: Vec<FieldValue<'_>> = self
            .search_fields
            .iter()
            .filter_map(|name| item.field(name))
            .collect();
        let mut texts = fields.iter().flat_map(|field| field.search_texts());

        match &query.fuzzy {
            None => texts.any(|text| text.to_lowercase().contains(&query.lowered)),
            Some(matcher) => {
                let lowered: Vec<String> = texts.map(str::to_lowercase).collect();
                query.tokens.iter().all(|token| {
                    lowered
                        .iter()
                        .any(|text| matcher.fuzzy_match(text, token).is_some())
                })
            }
        }
    }
}

/// Returns true if an item field satisfies one active filter value.
#[must_use]
pub fn field_satisfies(field: &FieldValue<'_>, value: &FilterValue) -> bool {
    match value {
        FilterValue::Scalar(expected) => field.equals_token(expected),
        FilterValue::Set(members) => members.iter().any(|member| field.equals_token(member)),
        FilterValue::Range { min, max } => field
            .to_number()
            .is_some_and(|n| *min <= n && n <= *max),
        FilterValue::DateRange { from, to } => field
            .to_timestamp()
            .and_then(timestamp_to_date)
            .is_some_and(|date| from.map_or(true, |f| f <= date) && to.map_or(true, |t| date <= t)),
    }
}

/// A search query ready to be matched against many items.
pub struct PreparedQuery {
    raw: String,
    lowered: String,
    tokens: Vec<String>,
    fuzzy: Option<SkimMatcherV2>,
}

impl PreparedQuery {
    /// Lowercases and tokenizes `query` for the given mode.
    #[must_use]
    pub fn new(query: &str, mode: SearchMode) -> Self {
        let lowered = query.to_lowercase();
        let tokens: Vec<String> = lowered.split_whitespace().map(String::from).collect();
        let fuzzy = match mode {
            SearchMode::Fuzzy if !query.is_empty() => Some(SkimMatcherV2::default()),
            _ => None,
        };
        Self {
            raw: query.to_string(),
            lowered,
            tokens,
            fuzzy,
        }
    }

    /// Returns true for an empty query, which matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The query as typed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Debug for PreparedQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedQuery")
            .field("raw", &self.raw)
            .field("tokens", &self.tokens)
            .field("fuzzy", &self.fuzzy.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn filters(pairs: &[(&str, FilterValue)]) -> ActiveFilters {
        let mut filters = ActiveFilters::new();
        for (id, value) in pairs {
            filters.put(id, value.clone());
        }
        filters
    }

    #[test]
    fn empty_query_matches_everything() {
        let rules = MatchRules::default();
        assert!(rules.matches(&json!({}), &ActiveFilters::new(), ""));
    }

    #[test]
    fn query_is_case_insensitive_and_checks_arrays() {
        let rules = MatchRules::default();
        let item = json!({"title": "Green Shoes", "tags": ["Leather", "outdoor"]});
        let none = ActiveFilters::new();

        assert!(rules.matches(&item, &none, "SHOE"));
        assert!(rules.matches(&item, &none, "leath"));
        assert!(!rules.matches(&item, &none, "hat"));
    }

    #[test]
    fn query_ignores_fields_outside_search_list() {
        let rules = MatchRules::default();
        let item = json!({"title": "Hat", "brand": "Acme"});
        assert!(!rules.matches(&item, &ActiveFilters::new(), "acme"));
    }

    #[test]
    fn fuzzy_mode_requires_every_token() {
        let rules = MatchRules {
            search_mode: SearchMode::Fuzzy,
            ..MatchRules::default()
        };
        let item = json!({"title": "Green Shoes", "description": "trail runner"});
        let none = ActiveFilters::new();

        assert!(rules.matches(&item, &none, "grn shs"));
        assert!(rules.matches(&item, &none, "shoes trl"));
        assert!(!rules.matches(&item, &none, "shoes xyz"));
    }

    #[test]
    fn filters_are_anded() {
        let rules = MatchRules::default();
        let item = json!({"brand": "Acme", "price": 35});

        let both = filters(&[
            ("brand", FilterValue::set(["Acme", "Zeta"])),
            ("price", FilterValue::range(25.0, 60.0)),
        ]);
        assert!(rules.matches(&item, &both, ""));

        let failing = filters(&[
            ("brand", FilterValue::set(["Acme"])),
            ("price", FilterValue::range(40.0, 60.0)),
        ]);
        assert!(!rules.matches(&item, &failing, ""));
    }

    #[test]
    fn range_is_inclusive_and_reads_numeric_strings() {
        let range = FilterValue::range(20.0, 35.0);
        assert!(field_satisfies(&FieldValue::Number(20.0), &range));
        assert!(field_satisfies(&FieldValue::Number(35.0), &range));
        assert!(!field_satisfies(&FieldValue::Number(35.5), &range));
        assert!(field_satisfies(&FieldValue::text("30"), &range));
        assert!(!field_satisfies(&FieldValue::text("40"), &range));
        assert!(!field_satisfies(&FieldValue::text("cheap"), &range));
        assert!(!field_satisfies(&FieldValue::Bool(true), &range));
    }

    #[test]
    fn missing_field_fails_active_filter() {
        let rules = MatchRules::default();
        let active = filters(&[("brand", FilterValue::scalar("Acme"))]);
        assert!(!rules.matches(&json!({"title": "x"}), &active, ""));
    }

    #[test]
    fn date_range_compares_calendar_dates() {
        let range = FilterValue::date_range(
            NaiveDate::from_ymd_opt(2024, 1, 1),
            NaiveDate::from_ymd_opt(2024, 1, 31),
        );
        assert!(field_satisfies(&FieldValue::text("2024-01-31T23:59:59Z"), &range));
        assert!(!field_satisfies(&FieldValue::text("2024-02-01"), &range));
        assert!(!field_satisfies(&FieldValue::text("garbage"), &range));

        let open = FilterValue::date_range(None, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert!(field_satisfies(&FieldValue::text("1999-12-31"), &open));
    }
}
