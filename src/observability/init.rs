//! Tracing subscriber setup.

use super::tracer;
use crate::domain::Result;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the OTLP trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "stargazer-otlp.json";

const SERVICE_NAME: &str = "stargazer";

/// Installs the global subscriber: `EnvFilter` at `config.trace_level`
/// feeding an OpenTelemetry layer that exports to the trace file.
///
/// Returns the trace file path. Calling this again after a subscriber is
/// installed is a no-op.
///
/// # Errors
///
/// Fails if the data directory cannot be created.
pub fn init_tracing(config: &Config) -> Result<PathBuf> {
    let data_dir = crate::infrastructure::paths::get_data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let trace_file = data_dir.join(TRACE_FILE_NAME);
    let provider = tracer::create_tracer_provider(trace_file.clone(), resource);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(&config.trace_level))
        .with(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)));

    if subscriber.try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }

    Ok(trace_file)
}
