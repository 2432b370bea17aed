//! Domain layer for facetkit.
//!
//! Core types shared by the controller, the matching rules and the widgets,
//! independent of rendering or configuration concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: The [`Record`] trait items implement and the [`FieldValue`] view
//! - [`value`]: Active filter values and the active-filter mapping
//! - [`descriptor`]: Filter descriptors and sort field declarations

pub mod descriptor;
pub mod error;
pub mod record;
pub mod value;

pub use descriptor::{FieldType, FilterDescriptor, FilterKind, FilterOption, RangeBounds, SortField};
pub use error::{FacetError, Result};
pub use record::{FieldValue, Record};
pub use value::{ActiveFilters, FilterValue};
