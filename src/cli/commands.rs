use crate::config::AppConfig;
use crate::env::SystemEnv;
use crate::otel;
use crate::resolver::ResourceAttributes;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line interface for resattr
///
/// Provides commands for resolving resource attributes against the live
/// environment and for checking configuration files.
#[derive(Parser)]
#[command(name = "resattr")]
#[command(about = "Resource attribute resolution CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve resource attributes against the live environment
    Resolve {
        /// Path to an application config file (YAML or JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format for the resolved attribute set
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// Load a config file and report what it contributes to resolution
    Check {
        /// Path to an application config file (YAML or JSON)
        #[arg(short, long)]
        config: PathBuf,
    },
}

/// Output format for `resolve`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `key=value` line per attribute
    Plain,
    /// A single pretty-printed JSON object
    Json,
}

/// Parse arguments from the process command line and run the selected
/// command.
pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run_command(&cli.command)
}

pub(crate) fn run_command(command: &Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Resolve { config, format } => {
            let config = match config {
                Some(path) => AppConfig::from_file(path)?,
                None => AppConfig::default(),
            };
            let env = SystemEnv;
            let attributes = ResourceAttributes::from_config(&config, &env).resolve();
            tracing::info!(
                service_name = otel::service_name(&attributes).unwrap_or_default(),
                attribute_count = attributes.len(),
                "resolved resource attributes"
            );
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&attributes)?);
                }
                OutputFormat::Plain => {
                    for (key, value) in attributes.iter() {
                        println!("{key}={value}");
                    }
                }
            }
            Ok(())
        }
        Commands::Check { config } => {
            let loaded = AppConfig::from_file(config)?;
            println!(
                "application.name: {}",
                loaded.application.name().unwrap_or("<unset>")
            );
            println!(
                "application.group: {}",
                loaded.application.group().unwrap_or("<unset>")
            );
            println!(
                "explicit attributes: {}",
                loaded.resource_attributes.len()
            );
            if !loaded.resource_attributes.is_empty() {
                println!("note: explicit attributes shadow OTEL_* environment variables");
            }
            Ok(())
        }
    }
}
