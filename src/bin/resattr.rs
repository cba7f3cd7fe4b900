use resattr::cli::run_cli;
use resattr::otel::{init_logging, LogConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&LogConfig::from_env())?;
    run_cli()
}
