//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold no
//! business logic, only display-ready data: truncated titles, formatted dates,
//! highlight ranges and pager flags.
//!
//! # Example
//!
//! ```rust
//! use stargazer::ui::viewmodel::{PagerInfo, StatusKind, StatusLine};
//!
//! let pager = PagerInfo { page_index: 1, page_count: 3, has_previous: false, has_next: true };
//! assert_eq!(pager.label(), "Page 1 of 3");
//!
//! let status = StatusLine { kind: StatusKind::Loading, message: "Loading…".to_string() };
//! assert_eq!(status.kind, StatusKind::Loading);
//! ```

use crate::domain::ResultItem;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Rows of the current page.
    pub display_items: Vec<DisplayItem>,

    /// Index of the cursor row within `display_items`.
    pub cursor_index: usize,

    pub header: HeaderInfo,

    pub footer: FooterInfo,

    /// Search input box, always present.
    pub search_bar: SearchBarInfo,

    /// Loading indicator or error message under the search bar.
    pub status: Option<StatusLine>,

    /// Pager controls below the grid.
    pub pager: PagerInfo,

    /// Shown in place of the grid when there is nothing to list.
    pub empty_state: Option<EmptyState>,

    /// Detail overlay for the selected item.
    pub detail: Option<DetailView>,
}

/// One row of the result grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// 1-based number within the page; also the quick-open key.
    pub number: usize,

    /// Title, truncated to the column width.
    pub title: String,

    /// `YYYY-MM-DD` creation date, or empty.
    pub date: String,

    /// Whether the item has a preview image link.
    pub has_image: bool,

    /// Whether the cursor is on this row.
    pub is_cursor: bool,

    /// Character ranges of `title` matching the last query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the active focus.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No images found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current query text.
    pub query: String,

    /// Whether key input goes to the query box.
    pub is_focused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub message: String,
}

/// Pager state for the current result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerInfo {
    pub page_index: usize,
    pub page_count: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PagerInfo {
    #[must_use]
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page_index, self.page_count)
    }
}

/// Everything the detail overlay shows about one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub image_url: Option<String>,
    pub description: String,
    pub date_created: String,
    /// Comma-separated keywords, or the placeholder when there are none.
    pub keywords: String,
    pub asset_id: Option<String>,
    pub center: Option<String>,
}

impl DetailView {
    /// Builds the overlay content for `item`.
    #[must_use]
    pub fn from_item(item: &ResultItem) -> Self {
        Self {
            title: item.title().to_string(),
            image_url: item.primary_link().map(str::to_string),
            description: item.description().to_string(),
            date_created: item.date_created().to_string(),
            keywords: item.keywords_display(),
            asset_id: item.asset_id.clone(),
            center: item.metadata.center.clone(),
        }
    }
}
