//! Application state management and view model computation.
//!
//! [`AppState`] composes the three core pieces of the search client:
//!
//! - **Query controller**: query text, full result list, load state
//! - **Paginator**: which page of the result list is visible
//! - **Selection overlay**: the item shown in the detail view
//!
//! plus the transient UI state around them: input [`Focus`], the cursor row
//! within the visible page, and the theme.
//!
//! The composite operations here keep the pieces consistent: replacing the
//! result list resets the page to 1, clears the selection and resets the
//! cursor, while a failed search leaves all three untouched.
//!
//! # Example
//!
//! ```rust
//! use stargazer::app::AppState;
//! use stargazer::ui::theme::Theme;
//!
//! let mut state = AppState::new(5, Theme::default());
//! state.update_query("orion");
//! let request = state.submit_search();
//! assert_eq!(request.query, "orion");
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.status.is_some());
//! ```

use fuzzy_matcher::skim::SkimMatcherV2;

use super::modes::Focus;
use super::pagination::Paginator;
use super::query::{Completion, LoadState, QueryController, SearchOutcome};
use super::selection::SelectionOverlay;
use crate::domain::ResultItem;
use crate::service::{RequestSeq, SearchRequest};
use crate::ui::helpers::truncate_chars;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailView, DisplayItem, EmptyState, FooterInfo, HeaderInfo, PagerInfo, SearchBarInfo,
    StatusKind, StatusLine, UIViewModel,
};

/// Width of the number column plus separators in the result grid.
const NUMBER_COLUMN_WIDTH: usize = 6;
/// Width reserved for the date column.
const DATE_COLUMN_WIDTH: usize = 12;
/// Width reserved for the image marker column.
const IMAGE_COLUMN_WIDTH: usize = 4;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Query text, results and load state.
    pub controller: QueryController,

    /// Current page over `controller.results()`.
    pub pagination: Paginator,

    /// Item shown in the detail overlay.
    pub selection: SelectionOverlay,

    /// Which part of the UI receives key input.
    pub focus: Focus,

    /// Cursor row within the visible page.
    ///
    /// Reset to 0 whenever the page changes or the results are replaced.
    pub cursor: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates an idle state with no results, focused on the query box.
    #[must_use]
    pub fn new(page_size: usize, theme: Theme) -> Self {
        Self {
            controller: QueryController::new(),
            pagination: Paginator::new(page_size),
            selection: SelectionOverlay::new(),
            focus: Focus::Query,
            cursor: 0,
            theme,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        self.controller.query()
    }

    #[must_use]
    pub fn results(&self) -> &[ResultItem] {
        self.controller.results()
    }

    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        self.controller.load_state()
    }

    /// Replaces the query text without searching.
    pub fn update_query(&mut self, text: impl Into<String>) {
        self.controller.update_query(text);
    }

    /// Starts a search for the current query; see [`QueryController::submit_search`].
    pub fn submit_search(&mut self) -> SearchRequest {
        self.controller.submit_search()
    }

    /// Applies a search outcome to every piece of state that depends on it.
    pub fn complete_search(&mut self, seq: RequestSeq, outcome: SearchOutcome) -> Completion {
        let completion = self.controller.complete_search(seq, outcome);
        if let Completion::Applied { .. } = completion {
            self.pagination.reset();
            self.selection.clear();
            self.cursor = 0;
        }
        completion
    }

    /// Items on the current page.
    #[must_use]
    pub fn visible_items(&self) -> &[ResultItem] {
        self.pagination.visible(self.controller.results())
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.controller.results().len())
    }

    /// Advances one page if there is one. Returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        let changed = self.pagination.next_page(self.controller.results().len());
        if changed {
            self.cursor = 0;
            tracing::debug!(page = self.pagination.page_index(), "next page");
        }
        changed
    }

    /// Goes back one page if there is one. Returns whether the page changed.
    pub fn previous_page(&mut self) -> bool {
        let changed = self.pagination.previous_page();
        if changed {
            self.cursor = 0;
            tracing::debug!(page = self.pagination.page_index(), "previous page");
        }
        changed
    }

    /// Opens the detail overlay for `item`.
    ///
    /// The item must belong to the current result list; anything else is
    /// rejected and `false` is returned.
    pub fn select(&mut self, item: &ResultItem) -> bool {
        if self.controller.results().get(item.id.0) != Some(item) {
            tracing::debug!(item_id = item.id.0, "ignoring selection of unknown item");
            return false;
        }
        self.selection.select(item.clone());
        true
    }

    /// Opens the detail overlay for the `index`-th row of the visible page.
    pub fn select_visible(&mut self, index: usize) -> bool {
        let Some(item) = self.visible_items().get(index).cloned() else {
            tracing::debug!(index, "no visible item at index");
            return false;
        };
        self.cursor = index;
        self.select(&item)
    }

    /// Closes the detail overlay.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Item under the cursor, if the page has any items.
    #[must_use]
    pub fn item_under_cursor(&self) -> Option<&ResultItem> {
        self.visible_items().get(self.cursor)
    }

    /// Moves the cursor down by one row, wrapping to the top of the page.
    pub fn move_cursor_down(&mut self) {
        let len = self.visible_items().len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
    }

    /// Moves the cursor up by one row, wrapping to the bottom of the page.
    pub fn move_cursor_up(&mut self) {
        let len = self.visible_items().len();
        if len == 0 {
            return;
        }
        if self.cursor == 0 {
            self.cursor = len - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Computes a renderable UI view model for a `rows` x `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols).entered();

        let visible = self.visible_items();
        let matcher = self
            .controller
            .last_issued()
            .filter(|query| !query.trim().is_empty())
            .map(|query| (SkimMatcherV2::default(), query));

        let cursor_index = self.cursor.min(visible.len().saturating_sub(1));
        let display_items = visible
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let matcher = matcher.as_ref().map(|(m, q)| (m, *q));
                self.compute_display_item(item, index, index == cursor_index, cols, matcher)
            })
            .collect();

        let total = self.controller.results().len();

        UIViewModel {
            display_items,
            cursor_index,
            header: self.compute_header(),
            footer: self.compute_footer(),
            search_bar: SearchBarInfo {
                query: self.controller.query().to_string(),
                is_focused: self.focus == Focus::Query && !self.selection.is_open(),
            },
            status: self.compute_status(),
            pager: PagerInfo {
                page_index: self.pagination.page_index(),
                page_count: self.pagination.page_count(total),
                has_previous: self.pagination.has_previous(),
                has_next: self.pagination.has_next(total),
            },
            empty_state: self.compute_empty_state(),
            detail: self.selection.selected().map(DetailView::from_item),
        }
    }

    fn compute_display_item(
        &self,
        item: &ResultItem,
        index: usize,
        is_cursor: bool,
        cols: usize,
        matcher: Option<(&SkimMatcherV2, &str)>,
    ) -> DisplayItem {
        let title_width = cols
            .saturating_sub(NUMBER_COLUMN_WIDTH + DATE_COLUMN_WIDTH + IMAGE_COLUMN_WIDTH)
            .max(8);
        let title = truncate_chars(item.title(), title_width);
        let title_len = title.chars().count();

        let highlight_ranges = matcher
            .map(|(m, query)| compute_highlight_ranges(item.title(), query, m))
            .unwrap_or_default()
            .into_iter()
            .filter(|&(start, _)| start < title_len)
            .map(|(start, end)| (start, end.min(title_len)))
            .collect();

        DisplayItem {
            number: index + 1,
            title,
            date: item.short_date().unwrap_or_default(),
            has_image: item.primary_link().is_some(),
            is_cursor,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let count = self.controller.results().len();
        let title = match self.controller.load_state() {
            LoadState::Idle => " Image Search ".to_string(),
            _ => format!(" Image Search ({count} results) "),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.selection.is_open() {
            "Esc/q: close  h/l: page"
        } else {
            match self.focus {
                Focus::Query => "Enter: search  Tab: results  Type to edit query",
                Focus::Results => {
                    "j/k: move  h/l: page  Enter/1-9: open  /: edit query  r: retry  q: quit"
                }
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_status(&self) -> Option<StatusLine> {
        match self.controller.load_state() {
            LoadState::Loading => Some(StatusLine {
                kind: StatusKind::Loading,
                message: "Loading…".to_string(),
            }),
            LoadState::Error(message) => Some(StatusLine {
                kind: StatusKind::Error,
                message: message.clone(),
            }),
            LoadState::Idle | LoadState::Success => None,
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.controller.results().is_empty() {
            return None;
        }

        let last = self.controller.last_issued().unwrap_or_default();
        let (message, subtitle) = match self.controller.load_state() {
            LoadState::Idle => (
                "Search the image library".to_string(),
                "Type a query and press Enter".to_string(),
            ),
            LoadState::Loading => ("Searching…".to_string(), format!("Looking for \"{last}\"")),
            LoadState::Success => (
                "No images found".to_string(),
                format!("Nothing matched \"{last}\""),
            ),
            LoadState::Error(_) => (
                "Search failed".to_string(),
                "Press Enter to try again".to_string(),
            ),
        };
        Some(EmptyState { message, subtitle })
    }
}

/// Character ranges of `text` matched by `query`, coalesced into runs.
///
/// Ranges are `(start, end)` character indices with an exclusive end.
fn compute_highlight_ranges(text: &str, query: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    use fuzzy_matcher::FuzzyMatcher;

    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::query::SEARCH_FAILED_MESSAGE;

    fn items(count: usize) -> Vec<ResultItem> {
        (0..count).map(|i| ResultItem::new(i, format!("Image {i}"))).collect()
    }

    fn loaded(count: usize) -> AppState {
        let mut state = AppState::new(5, Theme::default());
        state.update_query("image");
        let request = state.submit_search();
        state.complete_search(request.seq, Ok(items(count)));
        state
    }

    #[test]
    fn replacement_resets_page_cursor_and_selection() {
        let mut state = loaded(12);
        state.next_page();
        state.move_cursor_down();
        let item = state.visible_items()[1].clone();
        assert!(state.select(&item));

        let request = state.submit_search();
        state.complete_search(request.seq, Ok(items(3)));

        assert_eq!(state.pagination.page_index(), 1);
        assert_eq!(state.cursor, 0);
        assert!(!state.selection.is_open());
    }

    #[test]
    fn failure_keeps_page_and_selection() {
        let mut state = loaded(12);
        state.next_page();
        let item = state.visible_items()[0].clone();
        state.select(&item);

        let request = state.submit_search();
        state.complete_search(request.seq, Err("HTTP 500".to_string()));

        assert_eq!(state.pagination.page_index(), 2);
        assert_eq!(state.selection.selected(), Some(&item));
        assert_eq!(state.results().len(), 12);
    }

    #[test]
    fn select_rejects_foreign_items() {
        let mut state = loaded(3);
        assert!(!state.select(&ResultItem::new(1, "not from this list")));
        assert!(!state.select(&ResultItem::new(10, "Image 10")));
        assert!(!state.selection.is_open());
    }

    #[test]
    fn select_visible_uses_page_offset() {
        let mut state = loaded(12);
        state.next_page();
        assert!(state.select_visible(2));
        assert_eq!(state.selection.selected().map(|item| item.id.0), Some(7));
        assert!(!state.select_visible(5));
    }

    #[test]
    fn paging_keeps_selection_open() {
        let mut state = loaded(12);
        state.select_visible(0);
        assert!(state.next_page());
        assert_eq!(state.selection.selected().map(|item| item.id.0), Some(0));
    }

    #[test]
    fn cursor_wraps_within_page() {
        let mut state = loaded(7);
        state.next_page();
        assert_eq!(state.visible_items().len(), 2);
        state.move_cursor_up();
        assert_eq!(state.cursor, 1);
        state.move_cursor_down();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn viewmodel_for_idle_state() {
        let state = AppState::new(5, Theme::default());
        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.header.title, " Image Search ");
        assert!(vm.status.is_none());
        assert!(vm.display_items.is_empty());
        assert_eq!(vm.pager.label(), "Page 1 of 1");
        assert_eq!(
            vm.empty_state.map(|empty| empty.message),
            Some("Search the image library".to_string())
        );
        assert!(vm.search_bar.is_focused);
    }

    #[test]
    fn viewmodel_lists_current_page() {
        let mut state = loaded(12);
        state.next_page();
        state.next_page();
        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.header.title, " Image Search (12 results) ");
        assert_eq!(vm.display_items.len(), 2);
        assert_eq!(vm.display_items[0].title, "Image 10");
        assert_eq!(vm.display_items[1].number, 2);
        assert!(vm.pager.has_previous);
        assert!(!vm.pager.has_next);
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn cursor_row_matches_clamped_cursor_index() {
        let mut state = loaded(3);
        state.cursor = 7;
        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.cursor_index, 2);
        let flagged: Vec<_> = vm
            .display_items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_cursor)
            .map(|(index, _)| index)
            .collect();
        assert_eq!(flagged, vec![vm.cursor_index]);
    }

    #[test]
    fn viewmodel_shows_error_status() {
        let mut state = loaded(2);
        let request = state.submit_search();
        state.complete_search(request.seq, Err("offline".to_string()));
        let vm = state.compute_viewmodel(24, 80);

        let status = vm.status.expect("error status");
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.message, SEARCH_FAILED_MESSAGE);
        assert_eq!(vm.display_items.len(), 2);
    }

    #[test]
    fn viewmodel_reports_no_results() {
        let state = loaded(0);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(
            vm.empty_state.map(|empty| empty.message),
            Some("No images found".to_string())
        );
    }

    #[test]
    fn viewmodel_highlights_last_query_in_titles() {
        let state = loaded(1);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(0, 5)]);
    }

    #[test]
    fn viewmodel_includes_detail_for_selection() {
        let mut state = loaded(3);
        state.select_visible(1);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.detail.map(|detail| detail.title), Some("Image 1".to_string()));
        assert!(!vm.search_bar.is_focused);
    }

    #[test]
    fn highlight_ranges_are_coalesced() {
        let matcher = SkimMatcherV2::default();
        let ranges = compute_highlight_ranges("apollo eleven", "apo", &matcher);
        assert_eq!(ranges, vec![(0, 3)]);
        assert!(compute_highlight_ranges("mars", "zzz", &matcher).is_empty());
    }
}
