//! Default ordering rule.
//!
//! Items are ordered by the value of the sort field. How values compare comes
//! from the field's declared [`FieldType`]; the field's name is never used to
//! guess a type. Undeclared fields compare their raw values.
//!
//! Items whose key is missing, null or unparsable sort after every keyed item
//! regardless of direction, and equal keys keep their input order because the
//! controller sorts stably.

use crate::app::modes::SortDirection;
use crate::domain::{FieldType, FieldValue, Record};
use std::cmp::Ordering;

/// A comparable key extracted from one item field.
///
/// Keys of different variants order by variant rank
/// (`Bool < Number < Timestamp < Text < List`) so the order is total.
#[derive(Debug, Clone)]
pub enum SortKey {
    /// Boolean, `false` first.
    Bool(bool),
    /// Number, compared with `f64::total_cmp`.
    Number(f64),
    /// Milliseconds since the epoch.
    Timestamp(i64),
    /// String, compared lexically.
    Text(String),
    /// Array, compared element by element.
    List(Vec<SortKey>),
}

impl SortKey {
    /// Extracts a key from a field value according to its declared type.
    ///
    /// Returns `None` for nulls and values that cannot be read as the type.
    #[must_use]
    pub fn from_field(value: &FieldValue<'_>, field_type: Option<FieldType>) -> Option<Self> {
        match field_type {
            Some(FieldType::Number) => value.to_number().map(Self::Number),
            Some(FieldType::Timestamp) => value.to_timestamp().map(Self::Timestamp),
            Some(FieldType::Text) => match value {
                FieldValue::Text(s) => Some(Self::Text(s.to_string())),
                FieldValue::Number(n) => Some(Self::Text(n.to_string())),
                FieldValue::Bool(b) => Some(Self::Text(b.to_string())),
                FieldValue::Null | FieldValue::List(_) => None,
            },
            None => match value {
                FieldValue::Null => None,
                FieldValue::Bool(b) => Some(Self::Bool(*b)),
                FieldValue::Number(n) => Some(Self::Number(*n)),
                FieldValue::Text(s) => Some(Self::Text(s.to_string())),
                FieldValue::List(items) => Some(Self::List(
                    items.iter().filter_map(|item| Self::from_field(item, None)).collect(),
                )),
            },
        }
    }

    /// Extracts the key of `field` from a record.
    #[must_use]
    pub fn of<R: Record + ?Sized>(item: &R, field: &str, field_type: Option<FieldType>) -> Option<Self> {
        item.field(field)
            .and_then(|value| Self::from_field(&value, field_type))
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Number(_) => 1,
            Self::Timestamp(_) => 2,
            Self::Text(_) => 3,
            Self::List(_) => 4,
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Timestamp(a), Self::Timestamp(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::List(a), Self::List(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

/// Compares two optional keys in `direction`, keeping missing keys last.
#[must_use]
pub fn compare_keys(a: Option<&SortKey>, b: Option<&SortKey>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stably reorders `indices` by the precomputed `keys`, where `keys[i]`
/// belongs to the item at `indices[i]`.
pub fn sort_by_keys(indices: &mut Vec<usize>, keys: Vec<Option<SortKey>>, direction: SortDirection) {
    let mut keyed: Vec<(usize, Option<SortKey>)> = indices.iter().copied().zip(keys).collect();
    keyed.sort_by(|(_, a), (_, b)| compare_keys(a.as_ref(), b.as_ref(), direction));
    *indices = keyed.into_iter().map(|(index, _)| index).collect();
}
