use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use checkerboard::{print, Cli, GeneratorConfig, PatternGenerator};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = GeneratorConfig::from(&cli);
    info!(size = config.size, format = ?config.format, "starting");

    let grid = PatternGenerator::new(config.clone())
        .generate()
        .context("failed to generate checkerboard")?;
    print(&grid, config.format).context("failed to write checkerboard")?;

    Ok(())
}
