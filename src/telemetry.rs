use anyhow::Context;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::Tracer;
use secrecy::ExposeSecret;
use tonic::metadata::MetadataMap;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

use crate::configuration::TelemetrySettings;

/// Installs the global subscriber: `RUST_LOG` (or `env_filter`) filtering,
/// formatted output into `sink`, plus OTLP export when enabled.
pub fn init_subscriber<Sink>(
    env_filter: String,
    sink: Sink,
    settings: &TelemetrySettings,
) -> anyhow::Result<()>
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    LogTracer::init().context("Failed to set logger")?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = fmt::layer().with_writer(sink);

    let registry = Registry::default().with(env_filter).with(formatting_layer);
    if let Some(open_telemetry_tracer) = telemetry_layer(settings)? {
        let telemetry_layer = tracing_opentelemetry::layer().with_tracer(open_telemetry_tracer);
        set_global_default(registry.with(telemetry_layer)).context("Failed to set subscriber")?;
    } else {
        set_global_default(registry).context("Failed to set subscriber")?;
    }
    Ok(())
}

fn telemetry_layer(settings: &TelemetrySettings) -> anyhow::Result<Option<Tracer>> {
    if !settings.enabled {
        return Ok(None);
    }
    let mut meta_data = MetadataMap::new();
    meta_data.insert(
        "x-honeycomb-team",
        settings
            .api_key
            .expose_secret()
            .parse()
            .context("Failed to parse honeycomb api key")?,
    );
    let open_telemetry_tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(
            opentelemetry_otlp::new_exporter()
                .tonic()
                .with_metadata(meta_data)
                .with_endpoint(&settings.endpoint)
                .with_tls_config(Default::default()),
        )
        .install_batch(opentelemetry_sdk::runtime::Tokio)
        .context("Failed to install the opentelemetry tracer")?;
    Ok(Some(open_telemetry_tracer))
}
