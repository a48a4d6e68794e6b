//! Report-period filtering
//!
//! Filters come straight from user input (CLI flags today, request params in
//! an earlier life) and are deliberately forgiving: a value that does not
//! parse is logged and ignored rather than failing the whole report.

use tracing::debug;

use crate::clean::parse_date;
use crate::models::NormalizedTransaction;

/// A set of optional row filters, applied in sequence.
#[derive(Debug, Default, Clone)]
pub struct QueryFilter {
    year: Option<String>,
    month: Option<String>,
    start: Option<String>,
    end: Option<String>,
}

impl QueryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep rows from one calendar year, e.g. "2024".
    pub fn year(mut self, year: Option<String>) -> Self {
        self.year = year;
        self
    }

    /// Keep rows from one month of the year, 1 through 12.
    pub fn month(mut self, month: Option<String>) -> Self {
        self.month = month;
        self
    }

    /// Keep rows on or after a date, in any accepted date format.
    pub fn start(mut self, start: Option<String>) -> Self {
        self.start = start;
        self
    }

    /// Keep rows on or before a date, in any accepted date format.
    pub fn end(mut self, end: Option<String>) -> Self {
        self.end = end;
        self
    }

    /// Apply every set filter and return the surviving rows.
    pub fn apply(&self, rows: &[NormalizedTransaction]) -> Vec<NormalizedTransaction> {
        let mut filtered: Vec<NormalizedTransaction> = rows.to_vec();

        if let Some(raw) = &self.year {
            match raw.trim().parse::<i32>() {
                Ok(year) => filtered.retain(|r| r.year == year),
                Err(_) => debug!("Ignoring unparseable year filter {:?}", raw),
            }
        }
        if let Some(raw) = &self.month {
            match raw.trim().parse::<i32>() {
                Ok(month) => filtered.retain(|r| r.month as i32 == month),
                Err(_) => debug!("Ignoring unparseable month filter {:?}", raw),
            }
        }
        if let Some(raw) = &self.start {
            match parse_date(raw) {
                Some(start) => filtered.retain(|r| r.timestamp >= start),
                None => debug!("Ignoring unparseable start date {:?}", raw),
            }
        }
        if let Some(raw) = &self.end {
            match parse_date(raw) {
                Some(end) => filtered.retain(|r| r.timestamp <= end),
                None => debug!("Ignoring unparseable end date {:?}", raw),
            }
        }

        filtered
    }
}
