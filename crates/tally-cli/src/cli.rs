//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Make sense of any transaction CSV
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Transaction CSV analyzer: spending reports, forecasts, and tips", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Tuning file (TOML) overriding the built-in defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show how a CSV's columns and sign convention were inferred
    Analyze {
        /// CSV file to analyze
        file: PathBuf,
    },

    /// Spending report: monthly, category, peak-day, and yearly tables
    Report {
        /// CSV file to report on
        file: PathBuf,

        /// Only include this calendar year, e.g. 2024
        #[arg(long)]
        year: Option<String>,

        /// Only include this month of the year, 1-12
        #[arg(long)]
        month: Option<String>,

        /// Only include rows on or after this date
        #[arg(long)]
        from: Option<String>,

        /// Only include rows on or before this date
        #[arg(long)]
        to: Option<String>,

        /// Number of peak days to show
        #[arg(long)]
        top: Option<usize>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Plain-language summary of spending in a period
    Summary {
        /// CSV file to summarize
        file: PathBuf,

        /// Only include this calendar year, e.g. 2024
        #[arg(long)]
        year: Option<String>,

        /// Only include this month of the year, 1-12
        #[arg(long)]
        month: Option<String>,

        /// Only include rows on or after this date
        #[arg(long)]
        from: Option<String>,

        /// Only include rows on or before this date
        #[arg(long)]
        to: Option<String>,
    },

    /// Predict next month's spending from the recent trend
    Forecast {
        /// CSV file to extrapolate from
        file: PathBuf,
    },

    /// Ask a one-shot question about budgeting or a loaded CSV
    Chat {
        /// CSV file to ground answers in (optional)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// The question to ask
        message: String,
    },
}
