// refilter/src/main.rs
//! Refilter entry point.
//!
//! Loads the filter configuration, builds the engine facade, and dispatches
//! to the selected command.

use anyhow::{Context, Result};
use clap::Parser;

use refilter::cli::{Cli, Commands};
use refilter::commands;
use refilter::logger;
use refilter_core::{FilterConfig, RegexFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        log::LevelFilter::Off
    } else if cli.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logger::init_logger(Some(level));

    let mut config = match &cli.config {
        Some(path) => FilterConfig::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => FilterConfig::default(),
    };
    if !cli.enable.is_empty() {
        config.enable_presets(&cli.enable);
    }

    let filter = RegexFilter::new(config);

    match &cli.command {
        Commands::Filter(cmd) => commands::filter::run(&filter, cmd),
        Commands::Rules => commands::rules::run(&filter),
        Commands::Test(cmd) => commands::test::run(&filter, cmd),
    }
}
