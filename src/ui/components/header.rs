//! Header component renderer.
//!
//! Renders the result counter on the left and the active sort on the right of
//! a single bold line.

use crate::ui::helpers::{truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ResultCounterView, SortView};
use std::fmt::{self, Write};

/// Renders `Showing x-y of z results` plus the sort summary.
///
/// ```text
/// Showing 1-20 of 57 results                        sorted by Price (desc)
/// ```
pub fn render_header<W: Write>(
    out: &mut W,
    counter: &ResultCounterView,
    sort: &SortView,
    theme: &Theme,
    cols: usize,
) -> fmt::Result {
    let left = counter.text();
    let right = sort_summary(sort).unwrap_or_default();
    let left = truncate(&left, cols.saturating_sub(width(&right) + 1));
    let gap = cols.saturating_sub(width(&left) + width(&right));

    write!(out, "{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg))?;
    if let Some(bg) = &theme.colors.header_bg {
        out.write_str(&Theme::bg(bg))?;
    }
    writeln!(out, "{left}{}{right}{}", " ".repeat(gap), Theme::reset())
}

fn sort_summary(sort: &SortView) -> Option<String> {
    let field = sort.field.as_deref()?;
    let label = sort
        .options
        .iter()
        .find(|option| option.id == field)
        .map_or(field, |option| option.label.as_str());
    Some(format!("sorted by {label} ({})", sort.direction))
}
