//! Detail overlay renderer.
//!
//! Draws a bordered box over the result grid with everything known about the
//! selected item. The box interior is cleared first so the grid underneath
//! does not bleed through.

use crate::ui::helpers::{char_len, position_cursor, truncate_chars, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

/// Horizontal margin between the pane edge and the overlay box.
const OVERLAY_MARGIN: usize = 3;
/// Width of the field label column inside the box.
const LABEL_WIDTH: usize = 10;

/// One line of overlay content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DetailLine {
    pub label: Option<&'static str>,
    pub text: String,
    pub emphasized: bool,
}

impl DetailLine {
    fn plain(text: impl Into<String>) -> Self {
        Self { label: None, text: text.into(), emphasized: false }
    }

    fn field(label: &'static str, text: impl Into<String>) -> Self {
        Self { label: Some(label), text: text.into(), emphasized: false }
    }
}

/// Lays out the overlay content for a box with `inner_width` columns.
pub(crate) fn layout_detail(detail: &DetailView, inner_width: usize) -> Vec<DetailLine> {
    let value_width = inner_width.saturating_sub(LABEL_WIDTH).max(1);
    let mut lines = Vec::new();

    if !detail.title.trim().is_empty() {
        lines.extend(wrap_text(&detail.title, inner_width).into_iter().map(|text| DetailLine {
            label: None,
            text,
            emphasized: true,
        }));
        lines.push(DetailLine::plain(""));
    }

    if let Some(image) = &detail.image_url {
        lines.push(DetailLine::field("Image", truncate_chars(image, value_width)));
    }
    if !detail.date_created.is_empty() {
        lines.push(DetailLine::field("Created", truncate_chars(&detail.date_created, value_width)));
    }
    if let Some(center) = &detail.center {
        lines.push(DetailLine::field("Center", truncate_chars(center, value_width)));
    }
    if let Some(asset_id) = &detail.asset_id {
        lines.push(DetailLine::field("ID", truncate_chars(asset_id, value_width)));
    }

    let mut keyword_lines = wrap_text(&detail.keywords, value_width).into_iter();
    if let Some(first) = keyword_lines.next() {
        lines.push(DetailLine::field("Keywords", first));
    }
    lines.extend(keyword_lines.map(|line| DetailLine::field("", line)));

    if !detail.description.trim().is_empty() {
        lines.push(DetailLine::plain(""));
        lines.extend(wrap_text(&detail.description, inner_width).into_iter().map(DetailLine::plain));
    }

    lines
}

/// Renders the overlay box from `top` down to `bottom` (inclusive rows).
pub fn render_detail(detail: &DetailView, theme: &Theme, top: usize, bottom: usize, cols: usize) {
    if bottom <= top + 1 || cols <= OVERLAY_MARGIN * 2 + 4 {
        return;
    }

    let box_width = cols - OVERLAY_MARGIN * 2;
    let inner_width = box_width - 4;
    let content_rows = bottom - top - 1;

    let mut lines = layout_detail(detail, inner_width);
    if lines.len() > content_rows {
        lines.truncate(content_rows);
        if let Some(last) = lines.last_mut() {
            last.text = truncate_chars(&format!("{}...", last.text), inner_width.saturating_sub(LABEL_WIDTH));
        }
    }

    let border = Theme::fg(&theme.colors.overlay_border);

    position_cursor(top, OVERLAY_MARGIN + 1);
    print!("{border}╭{}╮{}", "─".repeat(box_width - 2), Theme::reset());

    for offset in 0..content_rows {
        position_cursor(top + 1 + offset, OVERLAY_MARGIN + 1);
        print!("{border}│{} ", Theme::reset());

        let used = match lines.get(offset) {
            Some(line) => render_line(line, theme),
            None => 0,
        };
        print!("{}", " ".repeat(inner_width.saturating_sub(used)));
        print!(" {border}│{}", Theme::reset());
    }

    position_cursor(bottom, OVERLAY_MARGIN + 1);
    print!("{border}╰{}╯{}", "─".repeat(box_width - 2), Theme::reset());
}

/// Prints one content line and returns how many columns it used.
fn render_line(line: &DetailLine, theme: &Theme) -> usize {
    let mut used = 0;
    if let Some(label) = line.label {
        print!("{}", Theme::fg(&theme.colors.overlay_label_fg));
        print!("{label:<LABEL_WIDTH$}");
        used += LABEL_WIDTH.max(char_len(label));
    }

    print!("{}", Theme::fg(&theme.colors.text_normal));
    if line.emphasized {
        print!("{}", Theme::bold());
    }
    print!("{}", line.text);
    print!("{}", Theme::reset());
    used + char_len(&line.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> DetailView {
        DetailView {
            title: "Earthrise".to_string(),
            image_url: Some("https://images.example/earthrise.jpg".to_string()),
            description: "Earth rising over the lunar horizon".to_string(),
            date_created: "1968-12-24T00:00:00Z".to_string(),
            keywords: "Apollo 8, Earth, Moon".to_string(),
            asset_id: Some("as08-14-2383".to_string()),
            center: None,
        }
    }

    #[test]
    fn layout_lists_fields_in_order() {
        let lines = layout_detail(&detail(), 60);
        let labels: Vec<_> = lines.iter().filter_map(|line| line.label).collect();
        assert_eq!(labels, vec!["Image", "Created", "ID", "Keywords"]);
        assert!(lines[0].emphasized);
        assert_eq!(lines[0].text, "Earthrise");
        assert_eq!(lines.last().map(|line| line.text.as_str()), Some("Earth rising over the lunar horizon"));
    }

    #[test]
    fn missing_image_is_omitted() {
        let mut view = detail();
        view.image_url = None;
        let lines = layout_detail(&view, 60);
        assert!(lines.iter().all(|line| line.label != Some("Image")));
        assert!(lines.iter().all(|line| line.text != "none"));
    }

    #[test]
    fn missing_title_renders_nothing() {
        let mut view = detail();
        view.title = String::new();
        view.image_url = None;
        let lines = layout_detail(&view, 60);

        assert!(lines.iter().all(|line| !line.emphasized));
        assert!(lines.iter().all(|line| line.text != "Untitled"));
        assert_eq!(lines.first().and_then(|line| line.label), Some("Created"));
    }

    #[test]
    fn blank_description_adds_no_trailing_block() {
        let mut view = detail();
        view.description = String::new();
        let lines = layout_detail(&view, 60);
        assert_eq!(lines.last().and_then(|line| line.label), Some("Keywords"));
    }
}
