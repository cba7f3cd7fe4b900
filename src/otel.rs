//! OpenTelemetry and logging integration.
//!
//! Bridges resolved attribute sets into the OpenTelemetry SDK
//! ([`build_resource`]) and sets up structured `tracing` output for the CLI
//! and for embedders that want the same defaults (JSON for production,
//! pretty-print for development, selected via `RESATTR_LOG_FORMAT`).

use crate::attributes::AttributeSet;
use anyhow::{Context, Result};
use opentelemetry::KeyValue;
use opentelemetry_sdk::Resource;
use opentelemetry_semantic_conventions::attribute as semconv;
use std::env;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Build an SDK [`Resource`] carrying every attribute in `attributes`.
///
/// One [`KeyValue`] per entry; SDK-provided defaults (such as the
/// `telemetry.sdk.*` attributes) are kept, with resolved attributes
/// overriding them on key collision.
pub fn build_resource(attributes: &AttributeSet) -> Resource {
    Resource::builder()
        .with_attributes(
            attributes
                .iter()
                .map(|(key, value)| KeyValue::new(key.to_string(), value.to_string())),
        )
        .build()
}

/// Service name recorded in `attributes`, looked up under the semantic
/// convention key.
pub fn service_name(attributes: &AttributeSet) -> Option<&str> {
    attributes.get(semconv::SERVICE_NAME)
}

/// Log format: JSON for production, pretty-print for development
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Json, // Default to JSON
        }
    }
}

/// Logging configuration, loaded from `RESATTR_LOG_*` environment
/// variables.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level: trace/debug/info/warn/error
    pub log_level: String,
    /// Log format: json/pretty
    pub format: LogFormat,
    /// Enable non-blocking buffered output
    pub non_blocking: bool,
    /// Include file:line location (dev only)
    pub include_location: bool,
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("RESATTR_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: LogFormat::parse(
                &env::var("RESATTR_LOG_FORMAT").unwrap_or_else(|_| "json".to_string()),
            ),
            non_blocking: env::var("RESATTR_LOG_NON_BLOCKING")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(false),
            include_location: env::var("RESATTR_LOG_INCLUDE_LOCATION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Create a default configuration for development and tests
    pub fn default_dev() -> Self {
        Self {
            log_level: "debug".to_string(),
            format: LogFormat::Pretty,
            non_blocking: false,
            include_location: true,
        }
    }
}

/// Initialize structured logging with the given configuration.
///
/// `RUST_LOG` wins over `config.log_level` when set. Fails if a global
/// subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.non_blocking {
        let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        let fmt_layer = match config.format {
            LogFormat::Json => tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_writer(writer)
                .boxed(),
            LogFormat::Pretty => tracing_subscriber::fmt::layer()
                .pretty()
                .with_target(true)
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_writer(writer)
                .boxed(),
        };
        registry
            .with(fmt_layer)
            .try_init()
            .context("failed to initialize non-blocking logging")?;
        // Keep the flush guard alive for the process lifetime.
        std::mem::forget(guard);
    } else {
        let fmt_layer = match config.format {
            LogFormat::Json => tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .boxed(),
            LogFormat::Pretty => tracing_subscriber::fmt::layer()
                .pretty()
                .with_target(true)
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .boxed(),
        };
        registry
            .with(fmt_layer)
            .try_init()
            .context("failed to initialize logging")?;
    }

    Ok(())
}
