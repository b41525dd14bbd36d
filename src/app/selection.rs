//! Detail overlay selection.
//!
//! Holds at most one result item shown in the detail overlay. Selection is
//! independent of pagination: paging while the overlay is open leaves it
//! alone. It is cleared when the user closes the overlay and whenever a new
//! result list replaces the one the item came from.

use crate::domain::ResultItem;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionOverlay {
    selected: Option<ResultItem>,
}

impl SelectionOverlay {
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// Shows `item` in the overlay, replacing any previous selection.
    pub fn select(&mut self, item: ResultItem) {
        tracing::debug!(item_id = item.id.0, title = %item.title(), "item selected");
        self.selected = Some(item);
    }

    /// Closes the overlay.
    pub fn clear(&mut self) {
        if self.selected.take().is_some() {
            tracing::debug!("selection cleared");
        }
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&ResultItem> {
        self.selected.as_ref()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}
