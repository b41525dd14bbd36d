//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never performs I/O. It mutates [`AppState`](crate::app::AppState)
//! and returns a `Vec<Action>` that the runtime executes in order after the
//! event has been fully applied.
//!
//! # Example
//!
//! ```rust
//! use stargazer::app::Action;
//! use stargazer::service::{RequestSeq, SearchRequest};
//!
//! let actions = vec![Action::IssueSearch(SearchRequest::new(RequestSeq(1), "nebula"))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::service::SearchRequest;

/// Commands for the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Sends a search request to the search service.
    ///
    /// The response must come back as
    /// [`Event::SearchCompleted`](crate::app::Event::SearchCompleted) carrying
    /// the same sequence number.
    IssueSearch(SearchRequest),
}
