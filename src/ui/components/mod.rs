//! Composable UI component renderers.
//!
//! Each component renders one part of the view model into a [`fmt::Write`]
//! sink, one or more complete lines at a time.
//!
//! # Components
//!
//! - [`header`]: Result counter and sort summary
//! - [`search`]: Search input box
//! - [`controls`]: Select, range and date controls
//! - [`badges`]: Removable active filter chips
//! - [`table`]: Result rows in table, list or grid layout
//! - [`empty`]: Empty state message
//! - [`footer`]: Pager
//!
//! # Layout
//!
//! ```text
//! [Search Box - 3 lines]     (when a search descriptor exists)
//! [Controls]                 (one line each)
//! [Badges]                   (when filters are active)
//! [Border]
//! [Header]
//! [Rows or Empty State]
//! [Border]
//! [Footer]
//! ```

mod badges;
mod controls;
mod empty;
mod footer;
mod header;
mod search;
mod table;

pub use badges::render_badges;
pub use controls::render_controls;
pub use empty::render_empty_state;
pub use footer::render_footer;
pub use header::render_header;
pub use search::render_search_box;
pub use table::render_rows;

use crate::ui::helpers::write_border;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FilterBarView, ResultsView};
use std::fmt::{self, Write};

/// Renders the filter bar: search box, controls and badges.
pub fn render_filter_bar<W: Write>(out: &mut W, bar: &FilterBarView, theme: &Theme, cols: usize) -> fmt::Result {
    if let Some(search) = &bar.search {
        render_search_box(out, search, theme, cols)?;
    }
    render_controls(out, &bar.controls, theme, cols)?;
    render_badges(out, &bar.badges, theme, cols)
}

/// Renders the results readout framed by the header and the pager.
pub fn render_results<W: Write>(
    out: &mut W,
    bar: &FilterBarView,
    results: &ResultsView,
    theme: &Theme,
    cols: usize,
) -> fmt::Result {
    write_border(out, &theme.colors.border, cols)?;
    render_header(out, &bar.counter, &bar.sort, theme, cols)?;

    match &results.empty_state {
        Some(empty) => render_empty_state(out, empty, theme, cols)?,
        None => render_rows(out, results, theme, cols)?,
    }

    write_border(out, &theme.colors.border, cols)?;
    render_footer(out, &bar.counter, theme, cols)
}
