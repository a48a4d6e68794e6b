//! Column-role inference
//!
//! Maps arbitrary CSV headers to the fixed semantic roles (date, amount,
//! category, description, type) using priority-ordered candidate name lists.
//! Matching is two-pass: exact header equality first, then substring
//! containment, both case-insensitive. The candidate tables are data; the
//! matcher never needs to change when a list grows.

use csv::StringRecord;

use crate::error::{Error, Result};
use crate::models::Role;

const DATE_CANDIDATES: &[&str] = &["date", "transaction_date", "txn_date", "posted_date", "timestamp"];
const AMOUNT_CANDIDATES: &[&str] = &["amount", "amt", "value", "transaction_amount", "debit", "credit"];
const CATEGORY_CANDIDATES: &[&str] = &[
    "category",
    "cat",
    "expense_category",
    "merchant_category",
    "type",
    "merchant",
];
const DESCRIPTION_CANDIDATES: &[&str] = &["description", "memo", "narration", "details"];
const TYPE_CANDIDATES: &[&str] = &["type", "transaction_type", "kind"];

/// Candidate column names for a role, in priority order.
pub fn candidates(role: Role) -> &'static [&'static str] {
    match role {
        Role::Date => DATE_CANDIDATES,
        Role::Amount => AMOUNT_CANDIDATES,
        Role::Category => CATEGORY_CANDIDATES,
        Role::Description => DESCRIPTION_CANDIDATES,
        Role::Type => TYPE_CANDIDATES,
    }
}

/// Resolved column indices for one file's header row.
///
/// `date` and `amount` are mandatory; the rest fall back to defaults during
/// normalization when absent. `kind` is the type-flag column (`type` is a
/// reserved word).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: usize,
    pub amount: usize,
    pub category: Option<usize>,
    pub description: Option<usize>,
    pub kind: Option<usize>,
}

/// Header cells trimmed and stripped of a leading UTF-8 BOM.
pub fn clean_headers(headers: &StringRecord) -> Vec<String> {
    headers
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect()
}

/// Find the column filling `role`, or `None` when nothing matches.
///
/// Pass 1 returns the first candidate equal to some column; pass 2 returns
/// the first column containing a candidate, scanning candidates in priority
/// order and columns in file order.
pub fn infer_column(role: Role, columns: &[String]) -> Option<usize> {
    let lower: Vec<String> = columns.iter().map(|c| c.to_lowercase()).collect();

    for candidate in candidates(role) {
        if let Some(idx) = lower.iter().position(|col| col == candidate) {
            return Some(idx);
        }
    }
    for candidate in candidates(role) {
        if let Some(idx) = lower.iter().position(|col| col.contains(candidate)) {
            return Some(idx);
        }
    }
    None
}

/// Resolve every role against the header, failing when date or amount is
/// missing.
pub fn resolve_columns(columns: &[String]) -> Result<ColumnMap> {
    let date = infer_column(Role::Date, columns);
    let amount = infer_column(Role::Amount, columns);

    let (date, amount) = match (date, amount) {
        (Some(date), Some(amount)) => (date, amount),
        _ => {
            let mut missing = Vec::new();
            if date.is_none() {
                missing.push(Role::Date.as_str().to_string());
            }
            if amount.is_none() {
                missing.push(Role::Amount.as_str().to_string());
            }
            return Err(Error::Schema(missing));
        }
    };

    Ok(ColumnMap {
        date,
        amount,
        category: infer_column(Role::Category, columns),
        description: infer_column(Role::Description, columns),
        kind: infer_column(Role::Type, columns),
    })
}
