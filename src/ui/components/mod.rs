//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: title bar with the result count
//! - [`search`]: query input box and status line
//! - [`table`]: numbered result grid (TITLE, DATE, IMG)
//! - [`pager`]: previous/next controls and page label
//! - [`empty`]: message shown when there is nothing to list
//! - [`detail`]: overlay for the selected item
//! - [`footer`]: keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Status Line]
//! [Table Headers]
//! [Table Rows | Empty State]
//! [Blank padding]
//! [Pager]
//! [Border]
//! [Footer]
//! ```
//!
//! The detail overlay, when open, is drawn last over the rows between the
//! search bar and the pager.

mod detail;
mod empty;
mod footer;
mod header;
mod pager;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use pager::render_pager;
use search::{render_search_bar, render_status_line};
use table::{render_table_headers, render_table_rows};

/// Rows taken by everything except the grid rows themselves.
const CHROME_ROWS: usize = 12;

/// Renders a horizontal border line. Returns the next available row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full layout for `vm` into a `rows` x `cols` pane.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    let overlay_top = current_row;
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_status_line(current_row, vm.status.as_ref(), theme, cols);
    current_row = render_table_headers(current_row, theme, cols);

    let grid_rows = rows.saturating_sub(CHROME_ROWS);
    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
    } else {
        render_table_rows(current_row, &vm.display_items, theme, cols, grid_rows);
    }

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let pager_row = border_row.saturating_sub(1);

    render_pager(pager_row, &vm.pager, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(detail) = &vm.detail {
        render_detail(detail, theme, overlay_top, pager_row.saturating_sub(1), cols);
    }
}
