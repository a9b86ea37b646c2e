//! SpriteForge: command-line sprite extraction.
//!
//! Crops regions, lists region-exclusive colors, and builds transparent
//! sprites from still images or frame sequences. Logs go to stderr through
//! `tracing`; JSON reports go to stdout.

mod cli;
mod commands;
mod config;
mod error;
mod worker;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::{AppConfig, DEFAULT_LOG_FILTER};

/// Conventional exit status after SIGINT.
const EXIT_INTERRUPTED: u8 = 130;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let defaults = AppConfig::default();
    init_tracing(&defaults.log_filter);

    let config = match defaults.resolve(&cli.global) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match commands::run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_canceled() => {
            tracing::warn!("canceled");
            ExitCode::from(EXIT_INTERRUPTED)
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
