//! Filter control renderers.
//!
//! One line per control: select lists show every option with a selection
//! marker and its count, range and date controls show the active bounds.

use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ControlView, DateView, OptionView, RangeView, SelectView};
use std::fmt::{self, Write};

/// Renders every control, in order.
pub fn render_controls<W: Write>(out: &mut W, controls: &[ControlView], theme: &Theme, cols: usize) -> fmt::Result {
    for control in controls {
        match control {
            ControlView::Select(select) => render_select(out, select, theme, cols)?,
            ControlView::Range(range) => render_range(out, range, theme)?,
            ControlView::Date(date) => render_date(out, date, theme)?,
        }
    }
    Ok(())
}

fn render_label<W: Write>(out: &mut W, label: &str, theme: &Theme) -> fmt::Result {
    write!(out, "{}{}{label}:{} ", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset())
}

fn render_select<W: Write>(out: &mut W, select: &SelectView, theme: &Theme, cols: usize) -> fmt::Result {
    render_label(out, &select.label, theme)?;

    let label_width = select.options.iter().map(|o| o.label.chars().count()).max().unwrap_or(0);
    let max_label = cols.saturating_sub(select.label.chars().count() + 12).max(1);

    for (i, option) in select.options.iter().enumerate() {
        if i > 0 {
            out.write_str("  ")?;
        }
        render_option(out, option, select.multiple, theme, label_width.min(max_label))?;
    }
    writeln!(out)
}

fn render_option<W: Write>(out: &mut W, option: &OptionView, multiple: bool, theme: &Theme, max: usize) -> fmt::Result {
    let marker = match (multiple, option.selected) {
        (true, true) => "[x]",
        (true, false) => "[ ]",
        (false, true) => "(•)",
        (false, false) => "( )",
    };
    let color = if option.selected {
        &theme.colors.option_selected_fg
    } else {
        &theme.colors.text_normal
    };

    write!(out, "{}{marker} {}{}", Theme::fg(color), truncate(&option.label, max), Theme::reset())?;
    if let Some(count) = option.count {
        write!(out, " {}({count}){}", Theme::fg(&theme.colors.count_fg), Theme::reset())?;
    }
    Ok(())
}

fn render_range<W: Write>(out: &mut W, range: &RangeView, theme: &Theme) -> fmt::Result {
    render_label(out, &range.label, theme)?;

    match range.current {
        Some((min, max)) => write!(out, "{}{min} to {max}{}", Theme::fg(&theme.colors.option_selected_fg), Theme::reset())?,
        None => write!(out, "{}any{}", Theme::fg(&theme.colors.text_dim), Theme::reset())?,
    }
    if let Some(bounds) = range.bounds {
        write!(out, " {}[{} to {}]{}", Theme::fg(&theme.colors.count_fg), bounds.min, bounds.max, Theme::reset())?;
    }
    writeln!(out)
}

fn render_date<W: Write>(out: &mut W, date: &DateView, theme: &Theme) -> fmt::Result {
    render_label(out, &date.label, theme)?;

    if date.from.is_none() && date.to.is_none() {
        return writeln!(out, "{}any{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    }

    let show = |d: Option<chrono::NaiveDate>| d.map_or_else(|| "any".to_string(), |d| d.format("%Y-%m-%d").to_string());
    writeln!(
        out,
        "{}{} to {}{}",
        Theme::fg(&theme.colors.option_selected_fg),
        show(date.from),
        show(date.to),
        Theme::reset()
    )
}
