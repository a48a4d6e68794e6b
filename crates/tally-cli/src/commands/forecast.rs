//! Next-month forecast command

use std::path::Path;

use anyhow::Result;
use tally_core::config::AnalyzerConfig;
use tally_core::forecast;

use super::load_rows;

pub fn cmd_forecast(file: &Path, config: &AnalyzerConfig) -> Result<()> {
    let (rows, _) = load_rows(file, config)?;
    let series = forecast::monthly_series(&rows, config.forecast.months_back);

    println!();
    println!("🔮 Next Month Forecast");
    println!("   ─────────────────────────────────────────────");

    if series.is_empty() {
        println!("   No expense data to extrapolate from.");
        return Ok(());
    }

    let predicted = forecast::predict_next(&series);
    println!("   Based on the last {} month(s) of spending.", series.len());
    println!("   Predicted spending: ${:.2}", predicted);
    println!();
    println!("   This is a naive linear trend, not a seasonal model.");

    Ok(())
}
