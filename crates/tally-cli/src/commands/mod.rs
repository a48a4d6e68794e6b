//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analyze` - Schema inspection (columns, sign policy, row counts)
//! - `report` - Spending report tables and JSON output
//! - `summary` - Plain-language insight lines
//! - `forecast` - Next-month prediction
//! - `chat` - One-shot Q&A

pub mod analyze;
pub mod chat;
pub mod forecast;
pub mod report;
pub mod summary;

// Re-export command functions for main.rs
pub use analyze::*;
pub use chat::*;
pub use forecast::*;
pub use report::*;
pub use summary::*;

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::config::AnalyzerConfig;
use tally_core::models::{DatasetMeta, NormalizedTransaction};

/// Normalize a CSV file, wrapping failures with the offending path.
pub(crate) fn load_rows(
    file: &Path,
    config: &AnalyzerConfig,
) -> Result<(Vec<NormalizedTransaction>, DatasetMeta)> {
    tally_core::normalize_file(file, &config.sign)
        .with_context(|| format!("Failed to analyze {}", file.display()))
}

/// Truncate a string to a maximum number of characters, adding "..." if
/// truncated.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
