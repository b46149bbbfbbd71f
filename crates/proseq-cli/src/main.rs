mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::Cli;
use crate::error::Result;
use clap::Parser;
use tracing::{debug, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("🚀 Proseq CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = commands::extract::run(&cli);

    if command_result.is_ok() {
        info!("✅ Command completed successfully.");
    }

    command_result
}
