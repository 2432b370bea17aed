//! Footer component renderer.
//!
//! Renders the pager: previous and next hints, dimmed when unavailable, around
//! the page position.

use crate::ui::helpers::write_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ResultCounterView;
use std::fmt::{self, Write};

/// Renders `‹ prev | page 2 of 5 | next ›` centered.
pub fn render_footer<W: Write>(out: &mut W, counter: &ResultCounterView, theme: &Theme, cols: usize) -> fmt::Result {
    let prev = if counter.previous_page().is_some() { "‹ prev" } else { "      " };
    let next = if counter.next_page().is_some() { "next ›" } else { "      " };
    let text = format!("{prev} | page {} of {} | {next}", counter.page, counter.page_count.max(1));

    write_centered(out, &text, &theme.colors.text_dim, cols)
}
