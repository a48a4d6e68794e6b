//! Spending aggregations
//!
//! Pure queries over normalized rows. Every operation counts the expense
//! side only; income rows stay in the dataset but never show up as spending.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::models::NormalizedTransaction;

// ========== Aggregate Rows ==========

/// Total spent in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub month: String,
    pub amount: f64,
}

/// Total spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Total spent on one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayTotal {
    pub day: String,
    pub amount: f64,
}

/// Total spent in one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyTotal {
    pub year: i32,
    pub amount: f64,
}

/// The latest month's spend against the mean of all months before it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MomComparison {
    pub latest_month: String,
    pub latest_total: f64,
    pub prior_mean: f64,
    pub percent_change: f64,
}

/// Headline numbers for a period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingSummary {
    pub total: f64,
    pub top_category: Option<String>,
    pub peak_day: String,
    pub peak_amount: f64,
}

/// The full analytics bundle for a period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingReport {
    pub monthly: Vec<MonthlyTotal>,
    pub category: Vec<CategoryTotal>,
    pub peak: Vec<DayTotal>,
    pub yearly: Vec<YearlyTotal>,
    pub summary: SpendingSummary,
}

// ========== Operations ==========

fn expense_rows(
    rows: &[NormalizedTransaction],
) -> impl Iterator<Item = &NormalizedTransaction> {
    rows.iter().filter(|r| r.expense > 0.0)
}

/// Sum of all expenses, 0 when there are none.
pub fn total_expense(rows: &[NormalizedTransaction]) -> f64 {
    expense_rows(rows).map(|r| r.expense).sum()
}

/// Spending per month bucket, ascending by month.
pub fn by_month(rows: &[NormalizedTransaction]) -> Vec<MonthlyTotal> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for row in expense_rows(rows) {
        *totals.entry(row.month_bucket.clone()).or_insert(0.0) += row.expense;
    }
    totals
        .into_iter()
        .map(|(month, amount)| MonthlyTotal { month, amount })
        .collect()
}

/// Spending per category, descending by amount. Ties keep the order the
/// categories first appeared in.
pub fn by_category(rows: &[NormalizedTransaction]) -> Vec<CategoryTotal> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, f64> = HashMap::new();
    for row in expense_rows(rows) {
        if !totals.contains_key(&row.category) {
            order.push(row.category.clone());
        }
        *totals.entry(row.category.clone()).or_insert(0.0) += row.expense;
    }
    let mut result: Vec<CategoryTotal> = order
        .into_iter()
        .map(|category| {
            let amount = totals[&category];
            CategoryTotal { category, amount }
        })
        .collect();
    result.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    result
}

/// Spending per calendar year, ascending by year.
pub fn by_year(rows: &[NormalizedTransaction]) -> Vec<YearlyTotal> {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    for row in expense_rows(rows) {
        *totals.entry(row.year).or_insert(0.0) += row.expense;
    }
    totals
        .into_iter()
        .map(|(year, amount)| YearlyTotal { year, amount })
        .collect()
}

/// The heaviest spending days, descending, at most `n` of them. Ties fall
/// back to day order. With no expense rows at all this returns the single
/// "No Data" sentinel so renderers always have something to show.
pub fn peak_days(rows: &[NormalizedTransaction], n: usize) -> Vec<DayTotal> {
    let mut totals: BTreeMap<chrono::NaiveDate, f64> = BTreeMap::new();
    for row in expense_rows(rows) {
        *totals.entry(row.day_bucket).or_insert(0.0) += row.expense;
    }
    let mut days: Vec<DayTotal> = totals
        .into_iter()
        .map(|(day, amount)| DayTotal {
            day: day.to_string(),
            amount,
        })
        .collect();
    days.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if days.is_empty() {
        days.push(DayTotal {
            day: "No Data".to_string(),
            amount: 0.0,
        });
    }
    days.truncate(n);
    days
}

/// The category with the highest spend, if any spending exists.
pub fn top_category(rows: &[NormalizedTransaction]) -> Option<String> {
    by_category(rows).first().map(|c| c.category.clone())
}

/// Latest month against the mean of all prior months. Absent with fewer
/// than two months of spending.
pub fn mom_comparison(monthly: &[MonthlyTotal]) -> Option<MomComparison> {
    let (latest, prior) = monthly.split_last()?;
    if prior.is_empty() {
        return None;
    }
    let prior_mean = prior.iter().map(|m| m.amount).sum::<f64>() / prior.len() as f64;
    if prior_mean <= 0.0 {
        return None;
    }
    Some(MomComparison {
        latest_month: latest.month.clone(),
        latest_total: latest.amount,
        prior_mean,
        percent_change: (latest.amount - prior_mean) / prior_mean * 100.0,
    })
}

/// Build the full report bundle for a set of rows.
pub fn report(rows: &[NormalizedTransaction], peak_count: usize) -> SpendingReport {
    let monthly = by_month(rows);
    let category = by_category(rows);
    let peak = peak_days(rows, peak_count);
    let yearly = by_year(rows);

    let (peak_day, peak_amount) = match peak.first() {
        Some(top) => (top.day.clone(), top.amount),
        None => ("No Data".to_string(), 0.0),
    };
    let summary = SpendingSummary {
        total: total_expense(rows),
        top_category: category.first().map(|c| c.category.clone()),
        peak_day,
        peak_amount,
    };

    SpendingReport {
        monthly,
        category,
        peak,
        yearly,
        summary,
    }
}
