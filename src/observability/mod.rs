//! Tracing with local OTLP file export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter → JSON lines
//! ```
//!
//! Spans land in `~/.local/share/zellij/stargazer/stargazer-otlp.json`
//! (seen as `/host/...` inside the sandbox), rotated at 10 MiB with 3 backups.
//! The level comes from the `trace_level` plugin option and defaults to
//! `info`.
//!
//! - [`init`]: subscriber setup
//! - `tracer`: provider and file span exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: rotating line writer

mod file_writer;
pub mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
