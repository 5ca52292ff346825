//! Tracing initialization and subscriber setup.

use super::exporter;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and tracer name recorded on every span.
const SERVICE_NAME: &str = "Draftboard";

/// Installs the global subscriber exporting spans to the trace file.
///
/// The filter comes from `config.trace_level`; an unparsable directive falls
/// back to `info`. Tracing stays disabled when the data directory cannot be
/// created. Only the first call in a process takes effect.
///
/// # Example
///
/// ```rust,no_run
/// use draftboard::observability::init_tracing;
/// use draftboard::Config;
///
/// let config = Config {
///     trace_level: "debug".to_string(),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    if std::fs::create_dir_all(paths::data_dir()).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = exporter::create_tracer_provider(paths::trace_file(), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
