//! Results renderer.
//!
//! Lays out the rows of the current page according to the view mode:
//!
//! - `table`: a TITLE column plus one column per configured field
//! - `list`: one line per row, extra fields joined after the title
//! - `grid`: titles arranged in fixed-width cells across the line

use crate::app::ViewMode;
use crate::ui::helpers::{self, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ResultRow, ResultsView};
use std::fmt::{self, Write};

/// Width of one grid cell, separator included.
const GRID_CELL_WIDTH: usize = 28;

/// Renders the rows of `results`. Rows must be non-empty.
pub fn render_rows<W: Write>(out: &mut W, results: &ResultsView, theme: &Theme, cols: usize) -> fmt::Result {
    match results.view_mode {
        ViewMode::Table => render_table(out, results, theme, cols),
        ViewMode::List => {
            for row in &results.rows {
                render_list_row(out, row, theme, cols)?;
            }
            Ok(())
        }
        ViewMode::Grid => render_grid(out, &results.rows, theme, cols),
    }
}

fn column_width(results: &ResultsView, cols: usize) -> usize {
    (cols / (results.columns.len() + 1)).max(4)
}

fn render_table<W: Write>(out: &mut W, results: &ResultsView, theme: &Theme, cols: usize) -> fmt::Result {
    let col_width = column_width(results, cols);

    write!(out, "{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg))?;
    write!(out, "{:<col_width$}", "TITLE")?;
    for column in &results.columns {
        let header = truncate(&column.to_uppercase(), col_width.saturating_sub(1));
        write!(out, "{header:<col_width$}")?;
    }
    writeln!(out, "{}", Theme::reset())?;

    for row in &results.rows {
        write!(out, "{}", Theme::fg(&theme.colors.text_normal))?;
        render_title(out, row, theme, col_width.saturating_sub(1))?;
        for cell in &row.cells {
            let cell = truncate(cell, col_width.saturating_sub(1));
            write!(out, "{cell:<col_width$}")?;
        }
        writeln!(out, "{}", Theme::reset())?;
    }
    Ok(())
}

/// Writes the title cell, highlighted, padded to `max + 1` characters.
fn render_title<W: Write>(out: &mut W, row: &ResultRow, theme: &Theme, max: usize) -> fmt::Result {
    let (title, ranges) = helpers::truncate_highlighted(&row.title, &row.highlight_ranges, max);
    helpers::write_highlighted(out, &title, &ranges, theme)?;
    write!(out, "{}", " ".repeat((max + 1).saturating_sub(width(&title))))
}

fn render_list_row<W: Write>(out: &mut W, row: &ResultRow, theme: &Theme, cols: usize) -> fmt::Result {
    let details: Vec<&str> = row.cells.iter().map(String::as_str).filter(|c| !c.is_empty()).collect();
    let details = details.join(" · ");
    let title_max = cols.saturating_sub(width(&details) + 3).max(cols / 2);

    write!(out, "{}", Theme::fg(&theme.colors.text_normal))?;
    let (title, ranges) = helpers::truncate_highlighted(&row.title, &row.highlight_ranges, title_max);
    helpers::write_highlighted(out, &title, &ranges, theme)?;
    if !details.is_empty() {
        let room = cols.saturating_sub(width(&title) + 3);
        write!(out, "{}  {}{}", Theme::fg(&theme.colors.text_dim), truncate(&details, room), Theme::reset())?;
    }
    writeln!(out, "{}", Theme::reset())
}

fn render_grid<W: Write>(out: &mut W, rows: &[ResultRow], theme: &Theme, cols: usize) -> fmt::Result {
    let per_line = (cols / GRID_CELL_WIDTH).max(1);

    for line in rows.chunks(per_line) {
        write!(out, "{}", Theme::fg(&theme.colors.text_normal))?;
        for row in line {
            render_title(out, row, theme, GRID_CELL_WIDTH - 1)?;
        }
        writeln!(out, "{}", Theme::reset())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str, cells: &[&str]) -> ResultRow {
        ResultRow {
            title: title.to_string(),
            highlight_ranges: vec![],
            cells: cells.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    fn results(view_mode: ViewMode) -> ResultsView {
        ResultsView {
            view_mode,
            columns: vec!["brand".to_string()],
            rows: vec![row("Red Shirt", &["Acme"]), row("Green Shoes", &["Zeta"]), row("Blue Hat", &[""])],
            empty_state: None,
        }
    }

    #[test]
    fn table_has_header_and_one_line_per_row() {
        let mut out = String::new();
        render_rows(&mut out, &results(ViewMode::Table), &Theme::default(), 40).unwrap();

        assert_eq!(out.lines().count(), 4);
        assert!(out.contains("TITLE"));
        assert!(out.contains("BRAND"));
        assert!(out.contains("Zeta"));
    }

    #[test]
    fn list_skips_empty_details() {
        let mut out = String::new();
        render_rows(&mut out, &results(ViewMode::List), &Theme::default(), 60).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Acme"));
        assert!(!lines[2].contains('·'));
    }

    #[test]
    fn grid_packs_cells_per_line() {
        let mut out = String::new();
        render_rows(&mut out, &results(ViewMode::Grid), &Theme::default(), 60).unwrap();
        assert_eq!(out.lines().count(), 2);
    }
}
