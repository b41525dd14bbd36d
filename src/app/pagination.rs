//! Fixed-size page windowing over the result list.
//!
//! [`Paginator`] only stores the 1-based page index and the page size. Page
//! counts and the visible slice are derived on demand from whatever list is
//! passed in, so they can never drift out of sync with the results.

/// Default number of results per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Page index bookkeeping for a result list.
///
/// Invariant: `1 <= page_index <= page_count(total)` for the list the index
/// was last navigated against. The index is reset to 1 whenever the list is
/// replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_index: usize,
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// Creates a paginator on page 1. A page size of 0 is treated as 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 1,
            page_size: page_size.max(1),
        }
    }

    /// Current 1-based page index.
    #[must_use]
    pub const fn page_index(&self) -> usize {
        self.page_index
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for `total` items; an empty list still has one page.
    ///
    /// ```
    /// use stargazer::app::Paginator;
    ///
    /// let pages = Paginator::new(5);
    /// assert_eq!(pages.page_count(0), 1);
    /// assert_eq!(pages.page_count(5), 1);
    /// assert_eq!(pages.page_count(12), 3);
    /// ```
    #[must_use]
    pub const fn page_count(&self, total: usize) -> usize {
        if total == 0 {
            1
        } else {
            (total + self.page_size - 1) / self.page_size
        }
    }

    /// Slice of `items` on the current page, clipped to the list bounds.
    #[must_use]
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page_index - 1).saturating_mul(self.page_size);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page_index > 1
    }

    #[must_use]
    pub const fn has_next(&self, total: usize) -> bool {
        self.page_index < self.page_count(total)
    }

    /// Advances one page. Returns `false` (and does nothing) on the last page.
    pub fn next_page(&mut self, total: usize) -> bool {
        if !self.has_next(total) {
            return false;
        }
        self.page_index += 1;
        true
    }

    /// Goes back one page. Returns `false` (and does nothing) on page 1.
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page_index -= 1;
        true
    }

    /// Returns to page 1.
    pub fn reset(&mut self) {
        self.page_index = 1;
    }
}
