//! Active filter values.
//!
//! [`FilterValue`] is a tagged union over the shapes a filter can hold, so the
//! matching rules dispatch on the tag instead of guessing from the value's
//! shape. [`ActiveFilters`] maps filter ids to their current value and only
//! ever contains non-empty values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Current value of one filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FilterValue {
    /// Single-select or free scalar value; the item field must equal it.
    Scalar(String),

    /// Multi-select value; the item field must equal one of the members.
    Set(BTreeSet<String>),

    /// Inclusive numeric range.
    Range {
        /// Lower bound, inclusive.
        min: f64,
        /// Upper bound, inclusive.
        max: f64,
    },

    /// Inclusive calendar-date range with optional open ends.
    DateRange {
        /// First matching date.
        from: Option<NaiveDate>,
        /// Last matching date.
        to: Option<NaiveDate>,
    },
}

impl FilterValue {
    /// Builds a scalar value.
    #[must_use]
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    /// Builds a set value from any iterator of members.
    #[must_use]
    pub fn set<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Set(members.into_iter().map(Into::into).collect())
    }

    /// Builds a numeric range value.
    #[must_use]
    pub const fn range(min: f64, max: f64) -> Self {
        Self::Range { min, max }
    }

    /// Builds a date range value.
    #[must_use]
    pub const fn date_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self::DateRange { from, to }
    }

    /// Returns true if the value imposes no constraint and must not be stored.
    ///
    /// Empty scalars, empty sets and date ranges open on both ends are empty.
    /// Numeric ranges are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scalar(s) => s.is_empty(),
            Self::Set(members) => members.is_empty(),
            Self::Range { .. } => false,
            Self::DateRange { from, to } => from.is_none() && to.is_none(),
        }
    }

    /// Returns true if this is a set containing `member`, or a scalar equal to it.
    #[must_use]
    pub fn contains(&self, member: &str) -> bool {
        match self {
            Self::Scalar(s) => s == member,
            Self::Set(members) => members.contains(member),
            Self::Range { .. } | Self::DateRange { .. } => false,
        }
    }

    /// Human-readable labels, one per badge this value should produce.
    ///
    /// Sets produce one label per member so each can be removed individually.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        match self {
            Self::Scalar(s) => vec![s.clone()],
            Self::Set(members) => members.iter().cloned().collect(),
            Self::Range { min, max } => vec![format!("{min} to {max}")],
            Self::DateRange { from, to } => {
                let from = from.map_or_else(|| "any".to_string(), |d| d.to_string());
                let to = to.map_or_else(|| "any".to_string(), |d| d.to_string());
                vec![format!("{from} to {to}")]
            }
        }
    }
}

/// Mapping from filter id to its current, non-empty value.
///
/// Mutation is restricted to the crate so that the non-empty invariant is
/// enforced in one place, the reducer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveFilters(BTreeMap<String, FilterValue>);

impl ActiveFilters {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the value for `id`, if that filter is active.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FilterValue> {
        self.0.get(id)
    }

    /// Returns true if the filter `id` is active.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Number of active filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no filter is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over active filters in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.0.iter().map(|(id, value)| (id.as_str(), value))
    }

    /// Stores `value` under `id`, or removes the key if the value is empty.
    pub(crate) fn put(&mut self, id: &str, value: FilterValue) {
        if value.is_empty() {
            self.0.remove(id);
        } else {
            self.0.insert(id.to_string(), value);
        }
    }

    /// Removes the filter `id`, returning its previous value.
    pub(crate) fn take(&mut self, id: &str) -> Option<FilterValue> {
        self.0.remove(id)
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns a copy without the filter `id`.
    ///
    /// Used by facet counting to evaluate one dimension against all others.
    #[must_use]
    pub fn without(&self, id: &str) -> Self {
        let mut copy = self.clone();
        copy.0.remove(id);
        copy
    }
}
