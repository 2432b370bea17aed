//! Search box component renderer.
//!
//! Renders the free-text query inside a bordered frame, or the placeholder
//! when the query is empty.

use crate::ui::helpers::{truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBoxView;
use std::fmt::{self, Write};

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the 3-line search box.
///
/// ```text
///   ┌──────────────────────┐
///   │ Products: red shirt  │
///   └──────────────────────┘
/// ```
pub fn render_search_box<W: Write>(out: &mut W, search: &SearchBoxView, theme: &Theme, cols: usize) -> fmt::Result {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let frame = Theme::fg(&theme.colors.search_bar_border);

    writeln!(out, "{margin}{frame}┌{}┐{}", "─".repeat(inner_width), Theme::reset())?;

    let (text, color) = if search.query.is_empty() {
        (format!(" {}", search.placeholder), &theme.colors.text_dim)
    } else {
        (format!(" {}: {}", search.label, search.query), &theme.colors.text_normal)
    };
    let text = truncate(&text, inner_width);
    let padding = inner_width.saturating_sub(width(&text));

    writeln!(
        out,
        "{margin}{frame}│{}{text}{}{frame}│{}",
        Theme::fg(color),
        " ".repeat(padding),
        Theme::reset()
    )?;

    writeln!(out, "{margin}{frame}└{}┘{}", "─".repeat(inner_width), Theme::reset())
}
