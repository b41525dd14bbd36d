//! OTLP JSON encoding of finished spans.
//!
//! Each exported batch becomes one `resourceSpans` document. The structs here
//! mirror the OTLP/JSON field names so `serde_json` does the encoding.

use opentelemetry::trace::{SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Instrumentation scope name written into every document.
const SCOPE_NAME: &str = "stargazer";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    resource_spans: Vec<ResourceSpans>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceSpans {
    resource: ResourceAttributes,
    scope_spans: Vec<ScopeSpans>,
}

#[derive(Debug, Serialize)]
struct ResourceAttributes {
    attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
struct Scope {
    name: &'static str,
}

#[derive(Debug, Serialize)]
struct ScopeSpans {
    scope: Scope,
    spans: Vec<OtlpSpan>,
}

#[derive(Debug, Serialize, PartialEq)]
struct Attribute {
    key: String,
    value: AttributeValue,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
enum AttributeValue {
    BoolValue(bool),
    /// OTLP/JSON encodes 64-bit integers as strings.
    IntValue(String),
    DoubleValue(f64),
    StringValue(String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OtlpSpan {
    trace_id: String,
    span_id: String,
    parent_span_id: String,
    name: String,
    kind: u8,
    start_time_unix_nano: String,
    end_time_unix_nano: String,
    attributes: Vec<Attribute>,
    events: Vec<OtlpEvent>,
    status: OtlpStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OtlpEvent {
    time_unix_nano: String,
    name: String,
    attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
struct OtlpStatus {
    code: u8,
    message: String,
}

/// Encodes span batches together with the process resource.
pub struct SpanFormatter {
    resource: Resource,
}

impl SpanFormatter {
    pub const fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Encodes `batch` as a single-line OTLP JSON document.
    pub fn format_batch(&self, batch: &[SpanData]) -> serde_json::Result<String> {
        let document = Document {
            resource_spans: vec![ResourceSpans {
                resource: ResourceAttributes {
                    attributes: self
                        .resource
                        .iter()
                        .map(|(key, value)| attribute(key.to_string(), value))
                        .collect(),
                },
                scope_spans: vec![ScopeSpans {
                    scope: Scope { name: SCOPE_NAME },
                    spans: batch.iter().map(encode_span).collect(),
                }],
            }],
        };
        serde_json::to_string(&document)
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter").finish_non_exhaustive()
    }
}

fn encode_span(span: &SpanData) -> OtlpSpan {
    let (code, message) = match &span.status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    };

    OtlpSpan {
        trace_id: format!("{:032x}", span.span_context.trace_id()),
        span_id: format!("{:016x}", span.span_context.span_id()),
        parent_span_id: if span.parent_span_id == SpanId::INVALID {
            String::new()
        } else {
            format!("{:016x}", span.parent_span_id)
        },
        name: span.name.to_string(),
        kind: span_kind_code(&span.span_kind),
        start_time_unix_nano: unix_nanos(span.start_time),
        end_time_unix_nano: unix_nanos(span.end_time),
        attributes: attributes(&span.attributes),
        events: span
            .events
            .iter()
            .map(|event| OtlpEvent {
                time_unix_nano: unix_nanos(event.timestamp),
                name: event.name.to_string(),
                attributes: attributes(&event.attributes),
            })
            .collect(),
        status: OtlpStatus { code, message },
    }
}

const fn span_kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn attributes(pairs: &[KeyValue]) -> Vec<Attribute> {
    pairs
        .iter()
        .map(|kv| attribute(kv.key.to_string(), &kv.value))
        .collect()
}

fn attribute(key: String, value: &Value) -> Attribute {
    let value = match value {
        Value::Bool(b) => AttributeValue::BoolValue(*b),
        Value::I64(i) => AttributeValue::IntValue(i.to_string()),
        Value::F64(f) => AttributeValue::DoubleValue(*f),
        Value::String(s) => AttributeValue::StringValue(s.to_string()),
        Value::Array(_) => AttributeValue::StringValue(value.to_string()),
    };
    Attribute { key, value }
}

/// Nanoseconds since the Unix epoch as a decimal string; 0 for pre-epoch times.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default()
        .to_string()
}
