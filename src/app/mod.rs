//! Application layer: the filter controller and its reducer.
//!
//! This layer sits between the caller's item collection and the widgets. It
//! implements a unidirectional data flow:
//!
//! ```text
//! Widget → FilterAction → reduce → FilterState → derived view → Widget
//!                            ↑                                   │
//!                            └──────────── dispatch ─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: The closed set of state transitions
//! - [`handler`]: The reducer applying actions to state
//! - [`modes`]: View mode, sort direction and search mode enums
//! - [`state`]: The filter state container
//! - [`controller`]: The owner of items, state and the memoized derived view
//! - [`view`]: Composite view models built from a controller
//!
//! # Example
//!
//! ```rust
//! use facetkit::{Config, FilterAction, FilterController, FilterValue};
//! use serde_json::json;
//!
//! let items = vec![
//!     json!({"title": "Red Shirt", "brand": "Acme"}),
//!     json!({"title": "Green Shoes", "brand": "Zeta"}),
//! ];
//! let mut controller = FilterController::new(items, vec![], &Config::default());
//! controller.dispatch(FilterAction::set_filter("brand", FilterValue::set(["Zeta"])));
//! assert_eq!(controller.total_count(), 1);
//! ```

pub mod actions;
pub mod controller;
pub mod handler;
pub mod modes;
pub mod state;
pub mod view;

pub use actions::FilterAction;
pub use controller::{FilterController, FilterPredicate, SortComparator};
pub use handler::{reduce, Transition};
pub use modes::{SearchMode, SortDirection, ViewMode};
pub use state::FilterState;
