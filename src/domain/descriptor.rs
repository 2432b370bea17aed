//! Filter descriptors and sort field declarations.
//!
//! A [`FilterDescriptor`] declares one filterable dimension. Descriptors are
//! immutable configuration: the caller supplies them when the controller is
//! built (directly or through [`Config`](crate::Config)) and the controller
//! never changes them. The descriptor id doubles as the item field the filter
//! reads.

use serde::{Deserialize, Serialize};

/// Kind of input a filter descriptor declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    /// Free-text search box. Its value lives in the search query.
    Search,
    /// Choose at most one option.
    Single,
    /// Choose any number of options.
    Multiple,
    /// Numeric range between bounds.
    Range,
    /// Calendar date range.
    Date,
}

/// How a field compares when it is used as the sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Compare as strings.
    Text,
    /// Compare numerically; numeric strings are parsed.
    Number,
    /// Parse into a timestamp and compare chronologically.
    Timestamp,
}

/// One choice of a single- or multi-select filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Value stored in the filter and compared against the item field.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Caller-supplied item count shown next to the label.
    #[serde(default)]
    pub count: Option<usize>,
}

impl FilterOption {
    /// Creates an option without a count.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            count: None,
        }
    }

    /// Attaches a display count.
    #[must_use]
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// Numeric bounds of a range filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBounds {
    /// Smallest selectable value.
    pub min: f64,
    /// Largest selectable value.
    pub max: f64,
    /// Optional input step.
    #[serde(default)]
    pub step: Option<f64>,
}

/// Declaration of one filterable dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterDescriptor {
    /// Unique key; also the item field the filter reads.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Input kind.
    pub kind: FilterKind,
    /// Ordered options for `single` and `multiple` kinds.
    #[serde(default)]
    pub options: Vec<FilterOption>,
    /// Bounds for `range` kinds.
    #[serde(default)]
    pub bounds: Option<RangeBounds>,
    /// Comparison type when sorting by this field.
    #[serde(default)]
    pub field_type: Option<FieldType>,
    /// Placeholder text for `search` kinds.
    #[serde(default)]
    pub placeholder: Option<String>,
}

impl FilterDescriptor {
    fn bare(id: impl Into<String>, label: impl Into<String>, kind: FilterKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            options: Vec::new(),
            bounds: None,
            field_type: None,
            placeholder: None,
        }
    }

    /// Declares a search box.
    #[must_use]
    pub fn search(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::bare(id, label, FilterKind::Search)
    }

    /// Declares a single-select filter.
    #[must_use]
    pub fn single(
        id: impl Into<String>,
        label: impl Into<String>,
        options: Vec<FilterOption>,
    ) -> Self {
        Self {
            options,
            ..Self::bare(id, label, FilterKind::Single)
        }
    }

    /// Declares a multi-select filter.
    #[must_use]
    pub fn multiple(
        id: impl Into<String>,
        label: impl Into<String>,
        options: Vec<FilterOption>,
    ) -> Self {
        Self {
            options,
            ..Self::bare(id, label, FilterKind::Multiple)
        }
    }

    /// Declares a numeric range filter; the field sorts as a number.
    #[must_use]
    pub fn range(id: impl Into<String>, label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            bounds: Some(RangeBounds { min, max, step: None }),
            field_type: Some(FieldType::Number),
            ..Self::bare(id, label, FilterKind::Range)
        }
    }

    /// Declares a date range filter; the field sorts as a timestamp.
    #[must_use]
    pub fn date(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field_type: Some(FieldType::Timestamp),
            ..Self::bare(id, label, FilterKind::Date)
        }
    }

    /// Overrides the sort comparison type.
    #[must_use]
    pub const fn with_field_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    /// Returns the option with the given id.
    #[must_use]
    pub fn option(&self, id: &str) -> Option<&FilterOption> {
        self.options.iter().find(|option| option.id == id)
    }

    /// Returns true for `single` and `multiple` kinds.
    #[must_use]
    pub const fn is_choice(&self) -> bool {
        matches!(self.kind, FilterKind::Single | FilterKind::Multiple)
    }
}

/// A field the results can be sorted by, with its declared comparison type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    /// Item field name.
    pub id: String,
    /// Display label.
    pub label: String,
    /// How values of this field compare.
    pub field_type: FieldType,
}

impl SortField {
    /// Creates a sort field declaration.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            field_type,
        }
    }
}
