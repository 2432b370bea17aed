//! Record abstraction over caller-defined items.
//!
//! The controller treats items as opaque: it only ever reads named fields
//! through the [`Record`] trait and never mutates them. Implementations are
//! provided for `serde_json` objects so that loosely-typed collections work
//! out of the box; typed structs implement the trait by hand.
//!
//! # Example
//!
//! ```
//! use facetkit::{FieldValue, Record};
//!
//! struct Product {
//!     title: String,
//!     price: f64,
//! }
//!
//! impl Record for Product {
//!     fn field(&self, name: &str) -> Option<FieldValue<'_>> {
//!         match name {
//!             "title" => Some(FieldValue::text(&self.title)),
//!             "price" => Some(FieldValue::Number(self.price)),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Formats tried, in order, when a text field is read as a timestamp.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// A read-only view of one field of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// Explicit null. Treated like an absent field by the default rules.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Any numeric value.
    Number(f64),
    /// String value, borrowed from the record where possible.
    Text(Cow<'a, str>),
    /// Array value; search and filters look at it element-wise where noted.
    List(Vec<FieldValue<'a>>),
}

impl<'a> FieldValue<'a> {
    /// Borrows a string as a text value.
    #[must_use]
    pub fn text(s: &'a str) -> Self {
        Self::Text(Cow::Borrowed(s))
    }

    /// Converts a JSON value into a field value, borrowing strings.
    #[must_use]
    pub fn from_json(value: &'a Value) -> Self {
        match value {
            Value::Null | Value::Object(_) => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            Value::String(s) => Self::text(s),
            Value::Array(items) => Self::List(items.iter().map(Self::from_json).collect()),
        }
    }

    /// Returns the string content of a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(&**s),
            _ => None,
        }
    }

    /// Returns the numeric content of a number value.
    ///
    /// Strings are not coerced; use [`FieldValue::to_number`] for that.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Reads the value as a number, parsing numeric strings.
    #[must_use]
    pub fn to_number(&self) -> Option<f64> {
        self.as_number().or_else(|| match self {
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| !n.is_nan()),
            _ => None,
        })
    }

    /// Reads the value as a UTC timestamp in milliseconds since the epoch.
    ///
    /// Accepts RFC 3339 strings, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`
    /// (both read as UTC), bare `YYYY-MM-DD` dates (midnight UTC) and numbers,
    /// which are taken as epoch milliseconds.
    #[must_use]
    pub fn to_timestamp(&self) -> Option<i64> {
        match self {
            #[allow(clippy::cast_possible_truncation)]
            Self::Number(n) if n.is_finite() => Some(*n as i64),
            Self::Text(s) => parse_timestamp(s.trim()),
            _ => None,
        }
    }

    /// Returns true if this scalar equals a filter token.
    ///
    /// Text compares exactly, numbers compare numerically against the parsed
    /// token, booleans against `"true"`/`"false"`. Lists, nulls and mistyped
    /// tokens never match.
    #[must_use]
    pub fn equals_token(&self, token: &str) -> bool {
        match self {
            Self::Text(s) => &**s == token,
            Self::Number(n) => token.trim().parse::<f64>().is_ok_and(|t| t == *n),
            Self::Bool(b) => token.parse::<bool>().is_ok_and(|t| t == *b),
            Self::Null | Self::List(_) => false,
        }
    }

    /// Iterates over the text this value contributes to free-text search.
    ///
    /// A text value yields itself; a list yields each text element. Other
    /// values yield nothing.
    pub fn search_texts(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Self::Text(s) => Box::new(std::iter::once(&**s)),
            Self::List(items) => Box::new(items.iter().filter_map(FieldValue::as_text)),
            _ => Box::new(std::iter::empty()),
        }
    }
}

fn parse_timestamp(s: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
}

/// Converts epoch milliseconds into a UTC calendar date.
#[must_use]
pub fn timestamp_to_date(millis: i64) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.date_naive())
}

/// A caller-defined item the controller can filter, search and sort.
pub trait Record {
    /// Returns the field called `name`, or `None` if the record has no such field.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.get(name).map(FieldValue::from_json)
    }
}

impl Record for Value {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.as_object().and_then(|object| object.field(name))
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field(name)
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_objects_expose_their_fields() {
        let item = json!({"title": "Red Shirt", "price": 20, "tags": ["cotton", "summer"]});
        assert_eq!(item.field("title"), Some(FieldValue::text("Red Shirt")));
        assert_eq!(item.field("price"), Some(FieldValue::Number(20.0)));
        assert!(item.field("missing").is_none());
        assert!(json!([1, 2]).field("title").is_none());
    }

    #[test]
    fn list_search_texts_skip_non_strings() {
        let item = json!({"tags": ["a", 1, "b"]});
        let field = item.field("tags").unwrap();
        assert_eq!(field.search_texts().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn equals_token_is_type_aware() {
        assert!(FieldValue::Number(35.0).equals_token("35"));
        assert!(!FieldValue::Number(35.0).equals_token("thirty-five"));
        assert!(FieldValue::Bool(true).equals_token("true"));
        assert!(FieldValue::text("Acme").equals_token("Acme"));
        assert!(!FieldValue::text("Acme").equals_token("acme"));
        assert!(!FieldValue::List(vec![FieldValue::text("Acme")]).equals_token("Acme"));
    }

    #[test]
    fn timestamps_parse_from_common_shapes() {
        let rfc = FieldValue::text("2024-03-01T12:00:00Z").to_timestamp().unwrap();
        let spaced = FieldValue::text("2024-03-01 12:00:00").to_timestamp().unwrap();
        let date = FieldValue::text("2024-03-01").to_timestamp().unwrap();
        assert_eq!(rfc, spaced);
        assert_eq!(rfc - date, 12 * 3600 * 1000);
        assert_eq!(FieldValue::Number(1000.0).to_timestamp(), Some(1000));
        assert!(FieldValue::text("not a date").to_timestamp().is_none());
        assert_eq!(
            timestamp_to_date(date),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn numeric_strings_coerce_only_on_request() {
        let value = FieldValue::text(" 42.5 ");
        assert_eq!(value.as_number(), None);
        assert_eq!(value.to_number(), Some(42.5));
    }
}
