//! Plain-language summary command

use std::path::Path;

use anyhow::Result;
use tally_core::config::AnalyzerConfig;
use tally_core::{insights, QueryFilter};

use super::load_rows;

pub fn cmd_summary(file: &Path, config: &AnalyzerConfig, filter: QueryFilter) -> Result<()> {
    let (rows, _) = load_rows(file, config)?;
    let rows = filter.apply(&rows);

    println!();
    println!("🧠 Spending Summary");
    println!("   ─────────────────────────────────────────────");
    for line in insights::summary_lines(&rows) {
        println!("   {}", line);
    }

    Ok(())
}
