use opentelemetry::trace::{TraceError, TracerProvider as _};
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::{BatchConfigBuilder, Config, TracerProvider};
use opentelemetry_sdk::{runtime, Resource};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use url::Url;

#[derive(Debug, Clone)]
pub struct InstrumentationParams {
    pub otel_service_name: String,
    pub otel_collector_endpoint: Option<Url>,
    pub log_level: Level,
}

/// Installs the global subscriber. Logs always go to stderr; traces are also
/// exported over OTLP when a collector endpoint is configured.
pub fn setup_analytics(instrumentation: &InstrumentationParams) -> Option<TracerProvider> {
    let level = LevelFilter::from_level(instrumentation.log_level);
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false);

    let provider = match &instrumentation.otel_collector_endpoint {
        Some(endpoint) => match init_tracer_provider(&instrumentation.otel_service_name, endpoint) {
            Ok(provider) => Some(provider),
            Err(err) => {
                eprintln!("Failed to start the OTLP trace exporter: {err}");
                None
            }
        },
        None => None,
    };

    let otel_layer = provider.as_ref().map(|provider| {
        let tracer = provider.tracer(format!("{}{}", instrumentation.otel_service_name, "_subscriber"));
        tracing_opentelemetry::layer().with_tracer(tracer)
    });

    tracing_subscriber::registry().with(level).with(fmt_layer).with(otel_layer).init();

    provider
}

fn init_tracer_provider(service_name: &str, endpoint: &Url) -> Result<TracerProvider, TraceError> {
    let provider = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(opentelemetry_otlp::new_exporter().tonic().with_endpoint(endpoint.to_string()))
        .with_trace_config(Config::default().with_resource(Resource::new(vec![KeyValue::new(
            opentelemetry_semantic_conventions::resource::SERVICE_NAME,
            format!("{}{}", service_name, "_trace_service"),
        )])))
        .with_batch_config(BatchConfigBuilder::default().build())
        .install_batch(runtime::Tokio)?;

    global::set_tracer_provider(provider.clone());
    Ok(provider)
}

/// Flushes pending spans. A no-op when no exporter was started.
pub fn shutdown_analytics(provider: Option<TracerProvider>) {
    if provider.is_some() {
        global::shutdown_tracer_provider();
    }
}
