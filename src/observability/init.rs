//! Tracing initialization and subscriber setup.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::exporter::{create_tracer_provider, SCOPE_NAME};
use crate::Config;

/// File name of the live trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "eventdesk-otlp.json";

/// Installs the global subscriber: `EnvFilter` from `config.trace_level`, then an
/// OpenTelemetry layer exporting to the trace file.
///
/// The trace file lives at `<data dir>/eventdesk-otlp.json`, which maps to
/// `~/.local/share/zellij/eventdesk/` on the host.
///
/// Observability is optional: if the data directory cannot be created the
/// plugin runs without a subscriber. Later calls after a successful one are
/// no-ops.
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SCOPE_NAME)]);
    let provider = create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let tracer = provider.tracer(SCOPE_NAME);

    let _ = tracing_subscriber::registry()
        .with(env_filter(&config.trace_level))
        .with(OpenTelemetryLayer::new(tracer))
        .try_init();
}

/// Filter for a configured level directive, falling back to `info` when the
/// directive does not parse.
fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(crate::DEFAULT_TRACE_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_accepts_levels_and_directives() {
        assert_eq!(env_filter("debug").to_string(), "debug");
        assert_eq!(env_filter("eventdesk=trace").to_string(), "eventdesk=trace");
    }

    #[test]
    fn bad_directive_falls_back_to_info() {
        assert_eq!(env_filter("eventdesk=loud").to_string(), "info");
    }
}
