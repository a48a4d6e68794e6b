//! Tally CLI - Transaction CSV analyzer
//!
//! Usage:
//!   tally analyze data.csv            Show inferred columns and sign policy
//!   tally report data.csv --year 2024 Spending tables for a period
//!   tally summary data.csv            Plain-language summary
//!   tally forecast data.csv           Next-month spending prediction
//!   tally chat -f data.csv "message"  One-shot Q&A over the data

mod cli;
mod commands;


use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;
use tally_core::QueryFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = tally_core::config::load_config(cli.config.as_deref())
        .context("Failed to load tuning file")?;

    match cli.command {
        Commands::Analyze { file } => commands::cmd_analyze(&file, &config),
        Commands::Report {
            file,
            year,
            month,
            from,
            to,
            top,
            format,
        } => {
            let filter = QueryFilter::new().year(year).month(month).start(from).end(to);
            commands::cmd_report(&file, &config, filter, top, &format)
        }
        Commands::Summary {
            file,
            year,
            month,
            from,
            to,
        } => {
            let filter = QueryFilter::new().year(year).month(month).start(from).end(to);
            commands::cmd_summary(&file, &config, filter)
        }
        Commands::Forecast { file } => commands::cmd_forecast(&file, &config),
        Commands::Chat { file, message } => commands::cmd_chat(file.as_deref(), &message, &config),
    }
}
