#![doc = include_str!("../README.md")]

mod commands;
mod config;
mod telemetry;

use clap::Parser;
use config::{CliArgs, CliConfig};
use telemetry::init_telemetry;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    init_telemetry(args.verbose)?;

    let config = CliConfig::try_from(&args)?;
    tracing::debug!(?config, "resolved configuration");

    let stdout = std::io::stdout();
    commands::run(args.command, &config, &mut stdout.lock())
}
