//! Tracing setup: console logging plus optional OpenTelemetry span export.
//!
//! Console output goes through a `tracing-subscriber` fmt layer, filtered by `RUST_LOG`
//! (default `info`) and formatted as text or JSON per `log_format`.
//!
//! OTLP export is off unless `enable_otel_export` is set. It is configured with the standard
//! OpenTelemetry environment variables:
//!
//! - `OTEL_EXPORTER_OTLP_ENDPOINT` - OTLP/HTTP endpoint (default `http://localhost:4318`)
//! - `OTEL_EXPORTER_OTLP_PROTOCOL` - `http/protobuf` (default) or `http/json`
//! - `OTEL_EXPORTER_OTLP_HEADERS` - comma-separated `key=value` pairs, `%20` decodes to a space
//! - `OTEL_SERVICE_NAME` - service name resource attribute (default `catalog`)
//!
//! If the exporter can't be built the service keeps running with console logging only.
//!
//! The tracer provider is kept in a `OnceLock` so [`shutdown_telemetry`] can flush pending
//! spans; `tracing-opentelemetry` only holds the tracer.

use crate::config::{Config, LogFormat};
use opentelemetry::KeyValue;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::{Protocol, WithExportConfig, WithHttpConfig};
use opentelemetry_sdk::trace::SdkTracerProvider;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

const DEFAULT_SERVICE_NAME: &str = "catalog";
const DEFAULT_OTLP_ENDPOINT: &str = "http://localhost:4318";

/// Install the global subscriber described by `config`.
///
/// Fails if a global subscriber is already installed.
pub fn init_telemetry(config: &Config) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (text_layer, json_layer) = match config.log_format {
        LogFormat::Text => (Some(tracing_subscriber::fmt::layer()), None),
        LogFormat::Json => (None, Some(tracing_subscriber::fmt::layer().json())),
    };

    let (tracer, otel_error) = if config.enable_otel_export {
        match create_otlp_tracer() {
            Ok(tracer) => (Some(tracer), None),
            Err(e) => (None, Some(e)),
        }
    } else {
        (None, None)
    };
    let otel_layer = tracer.map(|tracer| tracing_opentelemetry::layer().with_tracer(tracer));
    let otel_enabled = otel_layer.is_some();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .with(otel_layer)
        .try_init()?;

    match (otel_enabled, otel_error) {
        (true, _) => info!("Telemetry initialized with OTLP export enabled"),
        (false, Some(e)) => warn!("Telemetry initialized without OTLP export: {e:#}"),
        (false, None) => info!("Telemetry initialized (OTLP export disabled)"),
    }

    Ok(())
}

/// Parse `OTEL_EXPORTER_OTLP_HEADERS`-style `key=value,key=value` pairs
fn parse_otlp_headers(raw: &str) -> HashMap<String, String> {
    raw.replace("%20", " ")
        .split(',')
        .filter_map(|pair| pair.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

fn otlp_protocol(raw: Option<&str>) -> Protocol {
    match raw {
        Some("http/json") => Protocol::HttpJson,
        _ => Protocol::HttpBinary,
    }
}

fn create_otlp_tracer() -> anyhow::Result<opentelemetry_sdk::trace::Tracer> {
    let service_name = std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string());
    let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT").unwrap_or_else(|_| DEFAULT_OTLP_ENDPOINT.to_string());
    let headers = std::env::var("OTEL_EXPORTER_OTLP_HEADERS")
        .map(|raw| parse_otlp_headers(&raw))
        .unwrap_or_default();
    let protocol = otlp_protocol(std::env::var("OTEL_EXPORTER_OTLP_PROTOCOL").ok().as_deref());

    // The subscriber isn't installed yet, so this goes to stderr directly
    eprintln!(
        "[OTLP] service={service_name} endpoint={endpoint} headers={}",
        headers.len()
    );

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_http()
        .with_endpoint(&endpoint)
        .with_protocol(protocol)
        .with_headers(headers)
        .build()?;

    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(
            opentelemetry_sdk::Resource::builder()
                .with_attribute(KeyValue::new("service.name", service_name.clone()))
                .build(),
        )
        .build();

    let tracer = provider.tracer(service_name);
    let _ = TRACER_PROVIDER.set(provider);

    Ok(tracer)
}

/// Flush and stop the OTLP exporter, if one was started
pub fn shutdown_telemetry() {
    if let Some(provider) = TRACER_PROVIDER.get()
        && let Err(e) = provider.shutdown()
    {
        tracing::error!("Failed to shutdown tracer provider: {}", e);
    }
}
