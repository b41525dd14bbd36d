//! Query controller: the query/result lifecycle.
//!
//! [`QueryController`] owns the query text, the full result list and the
//! [`LoadState`]. Searches are fire-and-forget: [`QueryController::submit_search`]
//! hands back a tagged [`SearchRequest`] and the outcome arrives later through
//! [`QueryController::complete_search`].
//!
//! # State Machine
//!
//! ```text
//!            submit                 outcome Ok
//! Idle ───────────────► Loading ─────────────────► Success
//!                       ▲  │   outcome Err          │
//!               submit  │  └──────────────► Error   │
//!                       └───────────────────────────┘
//! ```
//!
//! Every submit increments the request sequence number. Only a completion for
//! the latest issued request is applied; anything older is superseded and
//! dropped without touching state.

use crate::domain::ResultItem;
use crate::service::{RequestSeq, SearchRequest};

/// Message shown for every kind of search failure.
pub const SEARCH_FAILED_MESSAGE: &str = "Error fetching images. Please try again later.";

/// Outcome of a search as delivered by the runtime.
///
/// The error side carries the underlying failure detail for logging; it is
/// never shown to the user.
pub type SearchOutcome = std::result::Result<Vec<ResultItem>, String>;

/// Status of the most recent search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// No search has been submitted yet.
    #[default]
    Idle,
    /// A search is in flight.
    Loading,
    /// The latest search returned a result list (possibly empty).
    Success,
    /// The latest search failed; holds the user-facing message.
    Error(String),
}

/// What [`QueryController::complete_search`] did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Results were replaced.
    Applied {
        /// Number of items in the new result list.
        item_count: usize,
    },
    /// The search failed; results were left untouched.
    Failed,
    /// The completion belonged to an older request and was discarded.
    Superseded,
}

/// Owner of the query text, the result list and the load state.
#[derive(Debug, Clone, Default)]
pub struct QueryController {
    query: String,
    last_issued: Option<String>,
    results: Vec<ResultItem>,
    load_state: LoadState,
    latest_seq: RequestSeq,
    in_flight: Option<RequestSeq>,
}

impl QueryController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Query text of the most recently submitted search.
    #[must_use]
    pub fn last_issued(&self) -> Option<&str> {
        self.last_issued.as_deref()
    }

    /// Full, unpaginated result list.
    #[must_use]
    pub fn results(&self) -> &[ResultItem] {
        &self.results
    }

    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.load_state, LoadState::Loading)
    }

    /// Sequence number of the most recently issued request.
    #[must_use]
    pub const fn latest_seq(&self) -> RequestSeq {
        self.latest_seq
    }

    /// Replaces the query text. Never triggers a search.
    ///
    /// ```
    /// use stargazer::app::QueryController;
    ///
    /// let mut controller = QueryController::new();
    /// controller.update_query("andromeda");
    /// assert_eq!(controller.query(), "andromeda");
    /// ```
    pub fn update_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        tracing::trace!(query = %self.query, "query updated");
    }

    /// Starts a search for the current query.
    ///
    /// Moves to [`LoadState::Loading`] and returns the request the runtime must
    /// dispatch. Any request still in flight is superseded by this one.
    pub fn submit_search(&mut self) -> SearchRequest {
        self.latest_seq = self.latest_seq.next();
        if let Some(previous) = self.in_flight.replace(self.latest_seq) {
            tracing::debug!(superseded = %previous, seq = %self.latest_seq, "superseding in-flight search");
        }

        self.load_state = LoadState::Loading;
        self.last_issued = Some(self.query.clone());

        tracing::info!(seq = %self.latest_seq, query = %self.query, "search submitted");
        SearchRequest::new(self.latest_seq, self.query.clone())
    }

    /// Applies the outcome of request `seq`.
    ///
    /// Outcomes for anything but the latest in-flight request are discarded.
    /// A success replaces the result list wholesale; a failure leaves it as it
    /// was and records [`SEARCH_FAILED_MESSAGE`].
    pub fn complete_search(&mut self, seq: RequestSeq, outcome: SearchOutcome) -> Completion {
        if self.in_flight != Some(seq) {
            tracing::debug!(
                seq = %seq,
                latest = %self.latest_seq,
                "discarding superseded search response"
            );
            return Completion::Superseded;
        }
        self.in_flight = None;

        match outcome {
            Ok(items) => {
                let item_count = items.len();
                self.results = items;
                self.load_state = LoadState::Success;
                tracing::info!(seq = %seq, item_count, "search succeeded");
                Completion::Applied { item_count }
            }
            Err(detail) => {
                self.load_state = LoadState::Error(SEARCH_FAILED_MESSAGE.to_string());
                tracing::warn!(seq = %seq, error = %detail, "search failed");
                Completion::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: usize) -> Vec<ResultItem> {
        (0..count).map(|i| ResultItem::new(i, format!("item {i}"))).collect()
    }

    #[test]
    fn starts_idle_and_empty() {
        let controller = QueryController::new();
        assert_eq!(controller.load_state(), &LoadState::Idle);
        assert!(controller.results().is_empty());
        assert!(controller.last_issued().is_none());
    }

    #[test]
    fn update_query_does_not_touch_load_state() {
        let mut controller = QueryController::new();
        for text in ["", "a", "horsehead nebula", "  spaced  ", "ünïcödé ☄"] {
            controller.update_query(text);
            assert_eq!(controller.query(), text);
        }
        assert_eq!(controller.load_state(), &LoadState::Idle);
        assert_eq!(controller.latest_seq(), RequestSeq(0));
    }

    #[test]
    fn submit_moves_to_loading_and_tags_request() {
        let mut controller = QueryController::new();
        controller.update_query("jupiter");
        let request = controller.submit_search();

        assert_eq!(request.seq, RequestSeq(1));
        assert_eq!(request.query, "jupiter");
        assert!(controller.is_loading());
        assert_eq!(controller.last_issued(), Some("jupiter"));
    }

    #[test]
    fn success_replaces_results() {
        let mut controller = QueryController::new();
        let first = controller.submit_search();
        controller.complete_search(first.seq, Ok(items(3)));

        let second = controller.submit_search();
        let completion = controller.complete_search(second.seq, Ok(items(1)));

        assert_eq!(completion, Completion::Applied { item_count: 1 });
        assert_eq!(controller.results().len(), 1);
        assert_eq!(controller.load_state(), &LoadState::Success);
    }

    #[test]
    fn failure_keeps_previous_results() {
        let mut controller = QueryController::new();
        let first = controller.submit_search();
        controller.complete_search(first.seq, Ok(items(4)));

        let second = controller.submit_search();
        let completion = controller.complete_search(second.seq, Err("HTTP 502".to_string()));

        assert_eq!(completion, Completion::Failed);
        assert_eq!(controller.results().len(), 4);
        assert_eq!(
            controller.load_state(),
            &LoadState::Error(SEARCH_FAILED_MESSAGE.to_string())
        );
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut controller = QueryController::new();
        let slow = controller.submit_search();
        let fast = controller.submit_search();

        assert_eq!(
            controller.complete_search(fast.seq, Ok(items(2))),
            Completion::Applied { item_count: 2 }
        );
        assert_eq!(
            controller.complete_search(slow.seq, Ok(items(7))),
            Completion::Superseded
        );
        assert_eq!(controller.results().len(), 2);
        assert_eq!(controller.load_state(), &LoadState::Success);
    }

    #[test]
    fn stale_failure_does_not_clobber_loading() {
        let mut controller = QueryController::new();
        let slow = controller.submit_search();
        let _current = controller.submit_search();

        assert_eq!(
            controller.complete_search(slow.seq, Err("timeout".to_string())),
            Completion::Superseded
        );
        assert!(controller.is_loading());
    }

    #[test]
    fn duplicate_completion_is_ignored() {
        let mut controller = QueryController::new();
        let request = controller.submit_search();
        controller.complete_search(request.seq, Ok(items(2)));

        assert_eq!(
            controller.complete_search(request.seq, Ok(items(9))),
            Completion::Superseded
        );
        assert_eq!(controller.results().len(), 2);
    }

    #[test]
    fn can_resubmit_after_failure() {
        let mut controller = QueryController::new();
        let failed = controller.submit_search();
        controller.complete_search(failed.seq, Err("offline".to_string()));

        let retry = controller.submit_search();
        assert!(controller.is_loading());
        assert_eq!(
            controller.complete_search(retry.seq, Ok(items(1))),
            Completion::Applied { item_count: 1 }
        );
    }
}
