//! Schema inspection command

use std::path::Path;

use anyhow::Result;
use tally_core::config::AnalyzerConfig;

use super::load_rows;

pub fn cmd_analyze(file: &Path, config: &AnalyzerConfig) -> Result<()> {
    let (_, meta) = load_rows(file, config)?;

    println!();
    println!("🔍 Dataset Analysis");
    println!("   File: {}", file.display());
    println!("   ─────────────────────────────────────────────");
    println!("   {:12} │ {}", "Role", "Column");
    println!("   ─────────────┼───────────────────────────────");
    println!("   {:12} │ {}", "date", meta.date_column);
    println!("   {:12} │ {}", "amount", meta.amount_column);
    println!(
        "   {:12} │ {}",
        "category",
        meta.category_column.as_deref().unwrap_or("(none)")
    );
    println!();
    println!("   Sign policy: {}", meta.sign_policy);
    println!(
        "   Rows: {} read, {} kept, {} dropped",
        meta.rows_read, meta.rows_kept, meta.rows_dropped
    );

    Ok(())
}
