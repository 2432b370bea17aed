//! User interface layer: view models, themes and terminal rendering.
//!
//! View models are framework-neutral snapshots that any front end can draw.
//! The bundled renderer turns them into ANSI-styled text.
//!
//! ```text
//! FilterController → compute_viewmodel → FilterViewModel → render → ANSI String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready widget state and the actions widgets emit
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, truncation)
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    BadgeView, ControlView, DateView, EmptyState, FilterBarView, FilterViewModel, OptionView, RangeView,
    ResultCounterView, ResultRow, ResultsView, SearchBoxView, SelectView, SortOptionView, SortView,
};
