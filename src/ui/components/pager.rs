//! Pager controls below the result grid.

use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PagerInfo;

/// Renders `‹ Prev   Page i of n   Next ›` centered, dimming unavailable sides.
///
/// Returns the next available row.
pub fn render_pager(row: usize, pager: &PagerInfo, theme: &Theme, cols: usize) -> usize {
    const PREVIOUS: &str = "‹ Prev";
    const NEXT: &str = "Next ›";
    const GAP: &str = "   ";

    let label = pager.label();
    let width = char_len(PREVIOUS) + char_len(NEXT) + char_len(&label) + 2 * GAP.len();
    let padding = cols.saturating_sub(width) / 2;

    let side_color = |enabled: bool| {
        if enabled {
            Theme::fg(&theme.colors.text_normal)
        } else {
            format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))
        }
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{}{PREVIOUS}{}", side_color(pager.has_previous), Theme::reset());
    print!("{GAP}");
    print!("{}{label}{}", Theme::fg(&theme.colors.header_fg), Theme::reset());
    print!("{GAP}");
    print!("{}{NEXT}{}", side_color(pager.has_next), Theme::reset());
    print!("{}", " ".repeat(cols.saturating_sub(padding + width)));
    row + 1
}
