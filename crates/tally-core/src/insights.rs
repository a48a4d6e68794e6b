//! Plain-language spending summary
//!
//! Renders a handful of sentences about a period. The wording is part of the
//! product surface, so tests pin it exactly.

use crate::analytics::{self, MomComparison};
use crate::models::NormalizedTransaction;

/// Human-readable summary lines for a set of rows, in display order.
pub fn summary_lines(rows: &[NormalizedTransaction]) -> Vec<String> {
    let category = analytics::by_category(rows);
    let top = match category.first() {
        Some(top) => top,
        None => return vec!["No data available for the selected period.".to_string()],
    };

    let mut lines = vec![
        format!("Total spending: ${:.2}", analytics::total_expense(rows)),
        format!("Top category: {} (${:.2})", top.category, top.amount),
    ];
    let monthly = analytics::by_month(rows);
    if let Some(advisory) = advisory_line(analytics::mom_comparison(&monthly), &top.category) {
        lines.push(advisory);
    }
    lines.push("Suggestion: set a limit for the top category to reduce recurring spend.".to_string());
    lines
}

fn advisory_line(mom: Option<MomComparison>, top_category: &str) -> Option<String> {
    let mom = mom?;
    if mom.percent_change > 10.0 {
        Some(format!(
            "Spending increased ~{:.0}% vs previous months — review {}.",
            mom.percent_change, top_category
        ))
    } else if mom.percent_change < -10.0 {
        Some("Spending decreased compared with previous months — good job!".to_string())
    } else {
        None
    }
}
