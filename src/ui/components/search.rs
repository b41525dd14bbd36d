//! Search bar component renderer.
//!
//! A 3-line bordered input box followed by a single status line that shows
//! the loading indicator or the search error.

use crate::ui::helpers::{char_len, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, StatusKind, StatusLine};

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search input box at `row`.
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ Search: query▏   │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
///
/// The border uses `search_bar_focus` while the box has focus. Long queries
/// keep their tail visible. Returns the next available row.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border_color = if search.is_focused {
        &theme.colors.search_bar_focus
    } else {
        &theme.colors.search_bar_border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    const PROMPT: &str = " Search: ";
    let caret = if search.is_focused { "▏" } else { "" };
    let room = inner_width.saturating_sub(char_len(PROMPT) + char_len(caret));
    let query_len = char_len(&search.query);
    let shown: String = search.query.chars().skip(query_len.saturating_sub(room)).collect();
    let text_len = char_len(PROMPT) + char_len(&shown) + char_len(caret);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{PROMPT}");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{shown}{caret}");
    print!("{}", " ".repeat(inner_width.saturating_sub(text_len)));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Renders the status line at `row`, blank when there is nothing to report.
///
/// Returns the next available row.
pub fn render_status_line(row: usize, status: Option<&StatusLine>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let Some(status) = status else {
        print!("{}", " ".repeat(cols));
        return row + 1;
    };

    let color = match status.kind {
        StatusKind::Loading => &theme.colors.loading_fg,
        StatusKind::Error => &theme.colors.error_fg,
    };
    let message = truncate_chars(&status.message, cols.saturating_sub(SEARCH_BOX_MARGIN + 1));

    print!("{}", " ".repeat(SEARCH_BOX_MARGIN + 1));
    print!("{}", Theme::fg(color));
    if status.kind == StatusKind::Error {
        print!("{}", Theme::bold());
    }
    print!("{message}");
    print!("{}", Theme::reset());
    print!(
        "{}",
        " ".repeat(cols.saturating_sub(SEARCH_BOX_MARGIN + 1 + char_len(&message)))
    );
    row + 1
}
