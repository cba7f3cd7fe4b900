//! # resattr
//!
//! **resattr** resolves OpenTelemetry-style resource attributes (service
//! identity metadata) from three layered sources with strict precedence:
//!
//! 1. **Explicit attributes** from application configuration — highest
//!    precedence, fully shadowing the environment when non-empty.
//! 2. **Reserved environment variables** — `OTEL_RESOURCE_ATTRIBUTES`
//!    (comma-separated `key=value` pairs) and `OTEL_SERVICE_NAME` (single
//!    service-name override), consulted only when no explicit attributes
//!    are configured.
//! 3. **Application metadata** (`application.name` / `application.group`)
//!    — backfills the two identity keys `service.name` and `service.group`
//!    on either path above.
//!
//! The resolved set always carries a non-empty `service.name`
//! (`unknown_service` when nothing else supplies one) and never holds null
//! values. Resolution is a pure function of its inputs: no I/O, no
//! mutation, no failure modes.
//!
//! ## Architecture
//!
//! - **[`attributes`]** - Insertion-ordered [`AttributeSet`] data model
//! - **[`env`]** - [`EnvSource`] seam over the process environment
//! - **[`config`]** - [`AppConfig`] loading from YAML/JSON files
//! - **[`resolver`]** - [`ResourceAttributes`], the layered resolver
//! - **[`otel`]** - OpenTelemetry `Resource` building and logging setup
//! - **[`cli`]** - `resattr` binary for inspecting resolution output
//!
//! ## Quick Start
//!
//! ```
//! use resattr::{ApplicationMetadata, ResourceAttributes};
//! use std::collections::HashMap;
//!
//! let metadata = ApplicationMetadata {
//!     name: Some("checkout".to_string()),
//!     group: None,
//! };
//! let mut env = HashMap::new();
//! env.insert(
//!     "OTEL_RESOURCE_ATTRIBUTES".to_string(),
//!     "deployment.environment=staging".to_string(),
//! );
//!
//! let attributes = ResourceAttributes::new(&metadata, None, &env).resolve();
//! assert_eq!(attributes.get("deployment.environment"), Some("staging"));
//! assert_eq!(attributes.get("service.name"), Some("checkout"));
//! ```
//!
//! Against the live process environment, pass [`SystemEnv`] instead of a
//! map. To hand the result to the OpenTelemetry SDK:
//!
//! ```no_run
//! use resattr::{otel, AppConfig, ResourceAttributes, SystemEnv};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = AppConfig::from_file("application.yaml")?;
//! let attributes = ResourceAttributes::from_config(&config, &SystemEnv).resolve();
//! let resource = otel::build_resource(&attributes);
//! # Ok(())
//! # }
//! ```

pub mod attributes;
pub mod cli;
pub mod config;
pub mod env;
pub mod otel;
pub mod resolver;

pub use attributes::AttributeSet;
pub use config::{AppConfig, ApplicationMetadata};
pub use env::{EnvSource, SystemEnv, OTEL_RESOURCE_ATTRIBUTES, OTEL_SERVICE_NAME};
pub use resolver::{ResourceAttributes, DEFAULT_SERVICE_NAME, SERVICE_GROUP, SERVICE_NAME};
