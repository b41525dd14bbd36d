//! Trace context propagation across the web request boundary.
//!
//! A search is issued in one `update` call and completed in another, possibly
//! many events later. The issuing span's identifiers ride along in the web
//! request context map so the completion can be recorded as a child of the
//! span that started it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const TRACE_ID_KEY: &str = "stargazer_trace_id";
const SPAN_ID_KEY: &str = "stargazer_span_id";

/// OpenTelemetry identifiers of the span that issued a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// Trace ID as 32 hex characters.
    pub trace_id: String,

    /// Span ID of the issuing span as 16 hex characters.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the identifiers of the current tracing span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the span is
    /// not sampled, which is always the case in unit tests.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Stores the identifiers in a web request context map.
    pub fn write_to(&self, context: &mut BTreeMap<String, String>) {
        context.insert(TRACE_ID_KEY.to_string(), self.trace_id.clone());
        context.insert(SPAN_ID_KEY.to_string(), self.parent_span_id.clone());
    }

    /// Reads identifiers previously stored with [`TraceContext::write_to`].
    #[must_use]
    pub fn read_from(context: &BTreeMap<String, String>) -> Option<Self> {
        Some(Self {
            trace_id: context.get(TRACE_ID_KEY)?.clone(),
            parent_span_id: context.get(SPAN_ID_KEY)?.clone(),
        })
    }

    /// Makes the issuing span the remote parent of spans created while the
    /// returned guard is alive.
    #[must_use]
    pub fn attach(&self) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }
}
