//! Shared rendering utilities.
//!
//! Components write into any [`fmt::Write`] sink. Widths are measured in
//! characters, and highlight ranges are character indices, so multi-byte text
//! never splits inside a code point.

use crate::ui::theme::Theme;
use std::fmt::{self, Write};

/// Number of characters in `text`.
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` characters, ending with `…` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Truncates `text` like [`truncate`] and clips `ranges` to the characters
/// that survive, so the `…` marker is never highlighted.
pub fn truncate_highlighted(text: &str, ranges: &[(usize, usize)], max: usize) -> (String, Vec<(usize, usize)>) {
    let cut = truncate(text, max);
    if cut == text {
        return (cut, ranges.to_vec());
    }

    let visible = width(&cut).saturating_sub(1);
    let clipped = ranges
        .iter()
        .map(|&(start, end)| (start.min(visible), end.min(visible)))
        .filter(|(start, end)| start < end)
        .collect();
    (cut, clipped)
}

/// Writes `text` with `ranges` styled as query matches.
///
/// After each highlighted section the normal text color is restored.
pub fn write_highlighted<W: Write>(out: &mut W, text: &str, ranges: &[(usize, usize)], theme: &Theme) -> fmt::Result {
    if ranges.is_empty() {
        return out.write_str(text);
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        out.write_str(&normal_section)?;

        let highlighted_section: String = chars[start..end].iter().collect();
        write!(
            out,
            "{}{}{highlighted_section}{}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg),
            Theme::reset(),
            Theme::fg(&theme.colors.text_normal),
        )?;

        current_pos = end;
    }

    let remaining: String = chars[current_pos..].iter().collect();
    out.write_str(&remaining)
}

/// Writes `text` centered in `cols` columns, in `color`.
pub fn write_centered<W: Write>(out: &mut W, text: &str, color: &str, cols: usize) -> fmt::Result {
    let text = truncate(text, cols);
    let padding = cols.saturating_sub(width(&text)) / 2;
    writeln!(out, "{}{}{text}{}", Theme::fg(color), " ".repeat(padding), Theme::reset())
}

/// Writes a horizontal separator `cols` wide.
pub fn write_border<W: Write>(out: &mut W, color: &str, cols: usize) -> fmt::Result {
    writeln!(out, "{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset())
}
