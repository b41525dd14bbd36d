//! Result grid renderer.
//!
//! One row per item on the current page:
//!
//! ```text
//!   #  TITLE                                              DATE        IMG
//!   1  Apollo 11 Launch                                   1969-07-16   ◆
//! ```

use crate::ui::helpers::{self, char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Width of the `#` column including its separators.
const NUMBER_WIDTH: usize = 6;
const DATE_WIDTH: usize = 12;
const IMAGE_WIDTH: usize = 4;

fn title_width(cols: usize) -> usize {
    cols.saturating_sub(NUMBER_WIDTH + DATE_WIDTH + IMAGE_WIDTH)
}

/// Renders the column headers. Returns the next available row.
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:>4}  {:<title$}{:<DATE_WIDTH$}{:<IMAGE_WIDTH$}",
        "#",
        "TITLE",
        "DATE",
        "IMG",
        title = title_width(cols)
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders up to `max_rows` items starting at `row`.
///
/// Returns the next available row.
pub fn render_table_rows(
    row: usize,
    items: &[DisplayItem],
    theme: &Theme,
    cols: usize,
    max_rows: usize,
) -> usize {
    let mut current_row = row;
    for item in items.iter().take(max_rows) {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one item, padded to the full width so the cursor background
/// covers the whole line.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base_color = if item.is_cursor {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.cursor_fg),
            Theme::bg(&theme.colors.cursor_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    print!("{base_color}");

    print!("{:>4}  ", item.number);

    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_cursor);
    print!("{base_color}");
    print!(
        "{}",
        " ".repeat(title_width(cols).saturating_sub(char_len(&item.title)))
    );

    if !item.is_cursor {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{:<DATE_WIDTH$}", helpers::truncate_chars(&item.date, DATE_WIDTH - 1));

    if item.has_image {
        if !item.is_cursor {
            print!("{}", Theme::fg(&theme.colors.image_marker_fg));
        }
        print!(" ◆  ");
    } else {
        print!("    ");
    }

    let used = NUMBER_WIDTH + title_width(cols).max(char_len(&item.title)) + DATE_WIDTH + IMAGE_WIDTH;
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    print!("{}", Theme::reset());
    row + 1
}
