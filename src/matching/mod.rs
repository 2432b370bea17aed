//! Default matching, ordering and highlighting strategies.
//!
//! These are the rules the controller falls back to when the caller supplies
//! no predicate or comparator override.
//!
//! - [`rules`]: free-text search plus per-filter constraints
//! - [`sort`]: sort key extraction and the missing-last comparison
//! - [`highlight`]: character ranges of query matches for display

pub mod highlight;
pub mod rules;
pub mod sort;

pub use highlight::highlight_ranges;
pub use rules::{field_satisfies, MatchRules, PreparedQuery, DEFAULT_SEARCH_FIELDS};
pub use sort::{compare_keys, SortKey};
