//! # CLI Module
//!
//! Command-line interface for inspecting resource attribute resolution.
//!
//! ## Commands
//!
//! ### `resolve`
//!
//! Resolve resource attributes against the live process environment,
//! optionally layered with a config file:
//!
//! ```bash
//! resattr resolve --config config/application.yaml --format json
//! ```
//!
//! Options:
//! - `--config <FILE>` - Application config file, YAML or JSON (optional)
//! - `--format <FORMAT>` - Output format: `plain` (key=value lines) or `json`
//!
//! ### `check`
//!
//! Load a config file and report what it would contribute to resolution:
//!
//! ```bash
//! resattr check --config config/application.yaml
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! resattr::cli::run_cli()?;
//! ```

mod commands;


pub use commands::{run_cli, Cli, Commands, OutputFormat};
