//! Spending report command

use std::path::Path;

use anyhow::Result;
use tally_core::analytics::{self, SpendingReport};
use tally_core::config::AnalyzerConfig;
use tally_core::QueryFilter;

use super::{load_rows, truncate};

pub fn cmd_report(
    file: &Path,
    config: &AnalyzerConfig,
    filter: QueryFilter,
    top: Option<usize>,
    format: &str,
) -> Result<()> {
    let (rows, _) = load_rows(file, config)?;
    let rows = filter.apply(&rows);

    let peak_count = top.unwrap_or(config.report.peak_days);
    let report = analytics::report(&rows, peak_count);

    match format {
        "table" => print_report(&report),
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        other => anyhow::bail!("Unknown format: {}. Available: table, json", other),
    }

    Ok(())
}

fn print_report(report: &SpendingReport) {
    println!();
    println!("📊 Spending Report");
    println!("   ─────────────────────────────────────────────");

    if report.category.is_empty() {
        println!("   No spending found in this period.");
        return;
    }

    println!("   Total: ${:.2}", report.summary.total);
    if let Some(top) = &report.summary.top_category {
        println!("   Top category: {}", top);
    }
    println!(
        "   Peak day: {} (${:.2})",
        report.summary.peak_day, report.summary.peak_amount
    );

    println!();
    println!("📅 Monthly Spending");
    println!("   {:12} │ {:>10}", "Month", "Amount");
    println!("   ─────────────┼────────────");
    for row in &report.monthly {
        println!("   {:12} │ {:>10.2}", row.month, row.amount);
    }

    println!();
    println!("🏷️  Spending by Category");
    println!("   {:25} │ {:>10}", "Category", "Amount");
    println!("   ──────────────────────────┼────────────");
    for row in &report.category {
        println!("   {:25} │ {:>10.2}", truncate(&row.category, 25), row.amount);
    }

    println!();
    println!("🔥 Peak Spending Days");
    println!("   {:12} │ {:>10}", "Day", "Amount");
    println!("   ─────────────┼────────────");
    for row in &report.peak {
        println!("   {:12} │ {:>10.2}", row.day, row.amount);
    }

    println!();
    println!("📆 Yearly Spending");
    println!("   {:12} │ {:>10}", "Year", "Amount");
    println!("   ─────────────┼────────────");
    for row in &report.yearly {
        println!("   {:12} │ {:>10.2}", row.year, row.amount);
    }
}
