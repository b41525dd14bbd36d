//! Search service boundary.
//!
//! The application layer never talks HTTP. It produces [`SearchRequest`]s and
//! consumes decoded results; a [`SearchService`] implementation owned by the
//! plugin runtime moves the bytes.
//!
//! # Architecture
//!
//! ```text
//! AppState::submit_search ─► SearchRequest ─► SearchService::dispatch ─► host web request
//!                                                                             │
//! Event::SearchCompleted ◄── decode_response ◄── WebRequestResult(context) ◄──┘
//! ```
//!
//! - `gate`: Holds requests back until the host grants web access
//! - `request`: Request construction, URL encoding, sequence tagging
//! - `response`: Payload decoding into domain items
//! - `trace`: Span context propagation through the request context map

pub mod gate;
pub mod request;
pub mod response;
pub mod trace;

pub use gate::{PermissionGate, WebAccess};
pub use request::{MediaType, RequestSeq, SearchRequest, SEQ_CONTEXT_KEY};
pub use response::decode_response;
pub use trace::TraceContext;

use crate::domain::error::Result;

/// Fire-and-forget transport for search requests.
///
/// `dispatch` must not block; the outcome is delivered later as an event
/// carrying the request's sequence number. There is no cancellation: a
/// superseded request is simply ignored when it completes.
pub trait SearchService {
    /// Sends `request` to the service.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not even be handed to the
    /// transport. Failures after that point arrive as completions.
    fn dispatch(&mut self, request: &SearchRequest) -> Result<()>;
}
