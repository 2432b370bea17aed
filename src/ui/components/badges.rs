//! Active filter badges.

use crate::ui::helpers::width;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BadgeView;
use std::fmt::{self, Write};

/// Renders the badges as chips, wrapping to a new line at `cols`.
///
/// Writes nothing when no filter is active.
pub fn render_badges<W: Write>(out: &mut W, badges: &[BadgeView], theme: &Theme, cols: usize) -> fmt::Result {
    if badges.is_empty() {
        return Ok(());
    }

    let style = format!("{}{}", Theme::fg(&theme.colors.badge_fg), Theme::bg(&theme.colors.badge_bg));
    let mut used = 0;

    for badge in badges {
        let chip = format!(" {}: {} × ", badge.label, badge.value_label);
        let chip_width = width(&chip) + 1;

        if used > 0 && used + chip_width > cols {
            writeln!(out)?;
            used = 0;
        }
        write!(out, "{style}{chip}{} ", Theme::reset())?;
        used += chip_width;
    }

    writeln!(out)
}
