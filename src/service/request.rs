//! Outgoing search requests.
//!
//! A [`SearchRequest`] is everything the host needs to perform one query
//! against the service: the URL, and a context map that Zellij hands back
//! untouched with the response. The context carries the request's
//! [`RequestSeq`] so the application can tell a current response from a
//! superseded one.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::trace::TraceContext;

/// Context key holding the request sequence number.
pub const SEQ_CONTEXT_KEY: &str = "stargazer_seq";

/// Media type filter sent with every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    Image,
}

impl MediaType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
        }
    }
}

/// Monotonically increasing tag for issued requests.
///
/// `RequestSeq(0)` is never issued; it is the value before the first search.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RequestSeq(pub u64);

impl RequestSeq {
    /// Returns the sequence number following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Recovers a sequence number from a web request context map.
    ///
    /// Returns `None` for responses that did not originate from a search
    /// request issued by this plugin.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use stargazer::service::{RequestSeq, SEQ_CONTEXT_KEY};
    ///
    /// let mut context = BTreeMap::new();
    /// context.insert(SEQ_CONTEXT_KEY.to_string(), "7".to_string());
    /// assert_eq!(RequestSeq::from_context(&context), Some(RequestSeq(7)));
    /// assert_eq!(RequestSeq::from_context(&BTreeMap::new()), None);
    /// ```
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        context
            .get(SEQ_CONTEXT_KEY)
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Self)
    }
}

impl std::fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One query to be sent to the search service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: RequestSeq,
    pub query: String,
    pub media_type: MediaType,
    /// Span that issued the request, so the response can be linked back to it.
    pub trace_context: Option<TraceContext>,
}

impl SearchRequest {
    /// Creates an image search request tagged with `seq`.
    #[must_use]
    pub fn new(seq: RequestSeq, query: impl Into<String>) -> Self {
        Self {
            seq,
            query: query.into(),
            media_type: MediaType::Image,
            trace_context: TraceContext::from_current(),
        }
    }

    /// Builds the full search URL against `endpoint`.
    ///
    /// ```
    /// use stargazer::service::{RequestSeq, SearchRequest};
    ///
    /// let request = SearchRequest::new(RequestSeq(1), "apollo 11");
    /// assert_eq!(
    ///     request.url("https://images-api.nasa.gov/"),
    ///     "https://images-api.nasa.gov/search?q=apollo%2011&media_type=image"
    /// );
    /// ```
    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/search?q={}&media_type={}",
            endpoint.trim_end_matches('/'),
            encode_query_component(&self.query),
            self.media_type.as_str()
        )
    }

    /// Context map to attach to the web request.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(SEQ_CONTEXT_KEY.to_string(), self.seq.0.to_string());
        if let Some(trace) = &self.trace_context {
            trace.write_to(&mut context);
        }
        context
    }
}

/// Percent-encodes a string for use as a URL query value.
///
/// Unreserved characters (RFC 3986) pass through, everything else is encoded
/// byte-wise from its UTF-8 form.
fn encode_query_component(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(char::from(byte));
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}
