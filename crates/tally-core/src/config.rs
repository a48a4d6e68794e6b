//! Analyzer tuning configuration
//!
//! The heuristics (negative-fraction threshold, expense keywords, forecast
//! window, peak-day count) ship with defaults that match most exports. An
//! optional TOML tuning file overrides any subset of them:
//!
//! ```toml
//! [sign]
//! negative_fraction_threshold = 0.5
//! expense_keywords = ["expense", "debit", "withdrawal", "payment", "spent"]
//!
//! [forecast]
//! months_back = 6
//!
//! [report]
//! peak_days = 10
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Tunable constants for one analysis run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyzerConfig {
    pub sign: SignConfig,
    pub forecast: ForecastConfig,
    pub report: ReportConfig,
}

/// Sign-convention classifier tuning
#[derive(Debug, Clone, PartialEq)]
pub struct SignConfig {
    /// Fraction of non-zero amounts that must be negative before the
    /// negative-means-expense convention is assumed
    pub negative_fraction_threshold: f64,
    /// Lowercased type-column values marking a row as an expense
    pub expense_keywords: Vec<String>,
}

impl Default for SignConfig {
    fn default() -> Self {
        Self {
            negative_fraction_threshold: 0.5, // majority convention wins
            expense_keywords: ["expense", "debit", "withdrawal", "payment", "spent"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

/// Forecaster tuning
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastConfig {
    /// Trailing months fed into the trend fit
    pub months_back: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self { months_back: 6 }
    }
}

/// Report rendering tuning
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Peak-spend days listed by default
    pub peak_days: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { peak_days: 10 }
    }
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    sign: Option<RawSign>,
    forecast: Option<RawForecast>,
    report: Option<RawReport>,
}

#[derive(Debug, Deserialize)]
struct RawSign {
    negative_fraction_threshold: Option<f64>,
    expense_keywords: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawForecast {
    months_back: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct RawReport {
    peak_days: Option<usize>,
}

/// Parse tuning TOML, applying it over the defaults.
fn parse_config(content: &str) -> Result<AnalyzerConfig> {
    let raw: RawConfig =
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid tuning TOML: {}", e)))?;

    let mut config = AnalyzerConfig::default();

    if let Some(sign) = raw.sign {
        if let Some(threshold) = sign.negative_fraction_threshold {
            config.sign.negative_fraction_threshold = threshold;
        }
        if let Some(keywords) = sign.expense_keywords {
            config.sign.expense_keywords = keywords.iter().map(|k| k.to_lowercase()).collect();
        }
    }
    if let Some(forecast) = raw.forecast {
        if let Some(months_back) = forecast.months_back {
            config.forecast.months_back = months_back;
        }
    }
    if let Some(report) = raw.report {
        if let Some(peak_days) = report.peak_days {
            config.report.peak_days = peak_days;
        }
    }

    Ok(config)
}

/// Load the tuning file, or the defaults when no path is given.
///
/// A path that was passed explicitly must exist; a missing file is an error
/// rather than a silent fallback.
pub fn load_config(path: Option<&Path>) -> Result<AnalyzerConfig> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
            parse_config(&content)
        }
        None => Ok(AnalyzerConfig::default()),
    }
}
