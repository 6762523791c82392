pub mod config;
pub mod models;
pub mod catalog;
pub mod specialty;
pub mod recommend;
pub mod shell;
pub mod validate;
pub mod console;
pub mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub fn run() -> ExitCode {
    let args = cli::Cli::parse();

    // Initialize tracing
    let filter = match &args.log_level {
        Some(level) => EnvFilter::try_new(level)
            .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("MediGuide starting v{}", config::APP_VERSION);

    cli::execute(args)
}
