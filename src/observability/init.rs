//! Tracing subscriber setup.

use super::file_writer::RotationPolicy;
use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and scope name attached to every exported span.
pub const SERVICE_NAME: &str = "country-picker";

/// File name of the active trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "country-picker-otlp.json";

/// Installs the global subscriber: an [`EnvFilter`] at `config.trace_level`
/// feeding an OpenTelemetry layer that exports to
/// `<config.data_dir>/country-picker-otlp.json`.
///
/// Tracing is optional: if the directory cannot be created or a subscriber is
/// already installed, this returns without doing anything. Returns `true` when
/// the subscriber was installed.
pub fn init_tracing(config: &Config) -> bool {
    let data_dir = &config.data_dir;
    if std::fs::create_dir_all(data_dir).is_err() {
        return false;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", SERVICE_NAME),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::create_tracer_provider(
        data_dir.join(TRACE_FILE_NAME),
        resource,
        SERVICE_NAME,
        RotationPolicy::default(),
    );
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init()
        .is_ok()
}
