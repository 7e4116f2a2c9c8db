#![doc = include_str!("../README.md")]

mod config;
mod output;
mod telemetry;

use anyhow::Context;
use clap::Parser;
use config::{AppConfig, CliArgs, OutputTarget};
use telemetry::REPORT_TARGET;

// Using mimalloc for better performance under contention between workers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    telemetry::init_logging(args.verbose)?;

    let config = AppConfig::try_from(args)?;
    log_startup_info(&config);

    let writer = output::open(&config.output)?;
    let report = wordgen::generate(&config.generation, writer).context("generation failed")?;

    tracing::info!(target: REPORT_TARGET, "Generated {} lines.", report.lines());
    Ok(())
}

fn log_startup_info(config: &AppConfig) {
    if cfg!(debug_assertions) {
        tracing::debug!("Resolved configuration: {:#?}", config);
    }

    let generation = &config.generation;
    let output = match &config.output {
        OutputTarget::Stdout => "<stdout>".to_owned(),
        OutputTarget::File(path) => path.display().to_string(),
    };
    let max_lines = generation
        .max_lines()
        .map_or_else(|| "unbounded".to_owned(), |n| n.to_string());
    let expected = generation
        .expected_lines()
        .map_or_else(|| "more than u128::MAX".to_owned(), |n| n.to_string());

    tracing::info!(
        target: REPORT_TARGET,
        charset = %generation.charset(),
        min_len = generation.min_len(),
        max_len = generation.max_len(),
        max_lines = %max_lines,
        threads = generation.num_threads(),
        output = %output,
        "Starting generation of {expected} lines"
    );
}
