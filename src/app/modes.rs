//! Input focus state.
//!
//! The plugin is either editing the query or browsing the result grid. The
//! detail overlay is not a focus of its own: it is open whenever a selection
//! exists and captures input on top of whichever focus is active.

/// Which part of the UI receives key input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Typing into the query box.
    ///
    /// Characters edit the query, Enter submits, Tab moves to the results.
    #[default]
    Query,

    /// Navigating the current page of results.
    ///
    /// j/k move the cursor, h/l change page, Enter or 1-9 open an item,
    /// `/` returns to the query box.
    Results,
}
