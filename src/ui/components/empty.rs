//! Empty state component renderer.
//!
//! Shown in place of the results when the current page has no rows.

use crate::ui::helpers::write_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;
use std::fmt::{self, Write};

/// Renders the centered two-line message, preceded by a blank line.
///
/// ```text
///
///                 No matching items
///             Nothing matches 'umbrella'
/// ```
pub fn render_empty_state<W: Write>(out: &mut W, empty: &EmptyState, theme: &Theme, cols: usize) -> fmt::Result {
    writeln!(out)?;
    write_centered(out, &empty.message, &theme.colors.empty_state_fg, cols)?;
    out.write_str(Theme::dim())?;
    write_centered(out, &empty.subtitle, &theme.colors.text_dim, cols)
}
