//! Data models for tally

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

// ========== Schema Inference Models ==========

/// Semantic role a CSV column can play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Date,
    Amount,
    Category,
    Description,
    Type,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Date => "date",
            Role::Amount => "amount",
            Role::Category => "category",
            Role::Description => "description",
            Role::Type => "type",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sign convention detected for a dataset, fixed for all rows in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SignPolicy {
    /// Negative amounts are expenses, positive amounts are income
    #[serde(rename = "expenses_negative")]
    ExpensesNegative,
    /// A type column flags expense rows; amounts are magnitudes
    #[serde(rename = "type_based")]
    TypeBased,
    /// Positive amounts are expenses (single-column spend ledgers)
    #[serde(rename = "positive_expense")]
    PositiveIsExpense,
}

impl SignPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignPolicy::ExpensesNegative => "expenses_negative",
            SignPolicy::TypeBased => "type_based",
            SignPolicy::PositiveIsExpense => "positive_expense",
        }
    }
}

impl fmt::Display for SignPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ========== Normalized Transactions ==========

/// One canonical transaction row surviving normalization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedTransaction {
    /// Transaction date (time of day discarded)
    pub timestamp: NaiveDate,
    /// Original amount cell text
    pub raw_amount: String,
    /// Signed numeric amount after cleaning
    pub clean_amount: f64,
    /// Category label, "Uncategorized" when the file has none
    pub category: String,
    /// Free-text description, empty when the file has none
    pub description: String,
    pub year: i32,
    /// Month number 1-12
    pub month: u32,
    /// Grouping key "YYYY-MM"
    pub month_bucket: String,
    /// Grouping key for per-day totals
    pub day_bucket: NaiveDate,
    /// Non-negative spend portion of the amount
    pub expense: f64,
    /// Non-negative income portion of the amount
    pub income: f64,
}

/// Summary of one normalization pass over a file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetMeta {
    /// Column resolved for the date role
    pub date_column: String,
    /// Column resolved for the amount role
    pub amount_column: String,
    /// Column resolved for the category role, if any
    pub category_column: Option<String>,
    /// Sign convention applied to every row
    pub sign_policy: SignPolicy,
    /// Data rows read from the file
    pub rows_read: usize,
    /// Rows surviving date and amount parsing
    pub rows_kept: usize,
    /// Rows dropped for an unparseable date or amount
    pub rows_dropped: usize,
}
