//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `FilterController` → `FilterViewModel`
//! 2. **Component Rendering**: delegate to the component renderers
//!
//! The output is a `String` of ANSI-styled lines, so callers decide where it
//! goes.
//!
//! # Example
//!
//! ```rust
//! use facetkit::{Config, FilterController, Theme};
//! use facetkit::ui::render;
//! use serde_json::json;
//!
//! let controller = FilterController::new(vec![json!({"title": "Red Shirt"})], vec![], &Config::default());
//! let screen = render(&controller, &Theme::default(), 80);
//! assert!(screen.contains("Showing 1-1 of 1 result"));
//! ```

use crate::domain::Record;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterViewModel;
use crate::FilterController;
use std::fmt::{self, Write};

/// Renders the controller's current view `cols` characters wide.
#[must_use]
pub fn render<T: Record>(controller: &FilterController<T>, theme: &Theme, cols: usize) -> String {
    let viewmodel = controller.compute_viewmodel();
    render_viewmodel(&viewmodel, theme, cols)
}

/// Renders an already computed view model.
#[must_use]
pub fn render_viewmodel(vm: &FilterViewModel, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();
    match render_to(&mut out, vm, theme, cols) {
        Ok(()) => out,
        Err(e) => {
            tracing::warn!(error = %e, "rendering failed");
            String::new()
        }
    }
}

/// Renders a view model into any [`fmt::Write`] sink.
///
/// # Errors
///
/// Propagates errors from the sink.
pub fn render_to<W: Write>(out: &mut W, vm: &FilterViewModel, theme: &Theme, cols: usize) -> fmt::Result {
    let _span = tracing::trace_span!("render", cols, rows = vm.results.rows.len()).entered();

    components::render_filter_bar(out, &vm.filter_bar, theme, cols)?;
    components::render_results(out, &vm.filter_bar, &vm.results, theme, cols)
}
