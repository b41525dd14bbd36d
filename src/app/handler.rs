//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for everything that changes
//! application state: key input already translated by the runtime, and
//! completions of searches the runtime dispatched. It mutates
//! [`AppState`] and returns whether a re-render is needed plus the
//! [`Action`]s the runtime must execute.
//!
//! # Example
//!
//! ```rust
//! use stargazer::app::{handle_event, Action, AppState, Event};
//! use stargazer::ui::theme::Theme;
//!
//! let mut state = AppState::new(5, Theme::default());
//! handle_event(&mut state, &Event::Char('m'))?;
//! let (render, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(render);
//! assert!(matches!(actions.as_slice(), [Action::IssueSearch(_)]));
//! # Ok::<(), stargazer::domain::StargazerError>(())
//! ```

use crate::app::modes::Focus;
use crate::app::query::{Completion, SearchOutcome};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::service::{decode_response, RequestSeq};
use std::collections::BTreeMap;

/// Events triggered by user input or search completions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character from the query.
    Backspace,
    /// Submits the current query.
    Submit,
    /// Moves key input to the query box.
    FocusQuery,
    /// Moves key input to the result grid.
    FocusResults,
    /// Moves the cursor down one row (wraps to top).
    CursorDown,
    /// Moves the cursor up one row (wraps to bottom).
    CursorUp,
    NextPage,
    PreviousPage,
    /// Opens the detail overlay for the row under the cursor.
    OpenUnderCursor,
    /// Opens the detail overlay for the given 0-based row of the visible page.
    OpenVisible(usize),
    /// Closes the detail overlay.
    CloseDetail,
    /// Hides the plugin pane.
    CloseFocus,

    /// Result of a previously issued search.
    SearchCompleted {
        /// Sequence number of the request this outcome belongs to.
        seq: RequestSeq,
        outcome: SearchOutcome,
    },
}

impl Event {
    /// Builds the completion event for a web response.
    ///
    /// Returns `None` for responses whose context carries no request sequence
    /// number; those were not issued by this plugin.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use stargazer::app::Event;
    ///
    /// assert_eq!(Event::from_web_response(200, b"{}", &BTreeMap::new()), None);
    /// ```
    #[must_use]
    pub fn from_web_response(
        status: u16,
        body: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Self> {
        let seq = RequestSeq::from_context(context)?;
        let outcome = decode_response(status, body).map_err(|e| e.to_string());
        Some(Self::SearchCompleted { seq, outcome })
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the runtime's error path uniform.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::Char(c) => {
            if state.focus != Focus::Query {
                return Ok((false, vec![]));
            }
            let mut query = state.query().to_string();
            query.push(*c);
            state.update_query(query);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.focus != Focus::Query || state.query().is_empty() {
                return Ok((false, vec![]));
            }
            let mut query = state.query().to_string();
            query.pop();
            state.update_query(query);
            Ok((true, vec![]))
        }
        Event::Submit => {
            if state.query().trim().is_empty() {
                tracing::debug!("ignoring submit of blank query");
                return Ok((false, vec![]));
            }
            let request = state.submit_search();
            Ok((true, vec![Action::IssueSearch(request)]))
        }
        Event::FocusQuery => {
            state.focus = Focus::Query;
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            state.focus = Focus::Results;
            Ok((true, vec![]))
        }
        Event::CursorDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::NextPage => Ok((state.next_page(), vec![])),
        Event::PreviousPage => Ok((state.previous_page(), vec![])),
        Event::OpenUnderCursor => {
            let Some(item) = state.item_under_cursor().cloned() else {
                tracing::debug!("no item under cursor");
                return Ok((false, vec![]));
            };
            Ok((state.select(&item), vec![]))
        }
        Event::OpenVisible(index) => Ok((state.select_visible(*index), vec![])),
        Event::CloseDetail => {
            if !state.selection.is_open() {
                return Ok((false, vec![]));
            }
            state.clear_selection();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchCompleted { seq, outcome } => {
            match state.complete_search(*seq, outcome.clone()) {
                Completion::Superseded => Ok((false, vec![])),
                Completion::Applied { item_count } => {
                    if item_count > 0 && state.focus == Focus::Query {
                        state.focus = Focus::Results;
                    }
                    Ok((true, vec![]))
                }
                Completion::Failed => Ok((true, vec![])),
            }
        }
    }
}

/// Short event label for spans; avoids dumping whole result lists.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::Submit => "Submit",
        Event::FocusQuery => "FocusQuery",
        Event::FocusResults => "FocusResults",
        Event::CursorDown => "CursorDown",
        Event::CursorUp => "CursorUp",
        Event::NextPage => "NextPage",
        Event::PreviousPage => "PreviousPage",
        Event::OpenUnderCursor => "OpenUnderCursor",
        Event::OpenVisible(_) => "OpenVisible",
        Event::CloseDetail => "CloseDetail",
        Event::CloseFocus => "CloseFocus",
        Event::SearchCompleted { .. } => "SearchCompleted",
    }
}
