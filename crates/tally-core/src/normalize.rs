//! CSV ingestion and row normalization
//!
//! One pass materializes rows with parsed dates and cleaned amounts, dropping
//! what cannot be parsed. The sign policy needs the whole file's amounts, so
//! the expense/income split is back-filled once classification has run.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::Datelike;
use csv::ReaderBuilder;
use tracing::{debug, info, warn};

use crate::clean::{clean_amount, parse_date};
use crate::config::SignConfig;
use crate::error::Result;
use crate::models::{DatasetMeta, NormalizedTransaction};
use crate::schema::{clean_headers, resolve_columns};
use crate::sign::{classify_amounts, split_amount};

/// Read, clean, and normalize transactions from any CSV source.
///
/// Rows whose date or amount cell fails to parse are dropped and logged at
/// debug level; everything else is kept. Returns the surviving rows together
/// with the [`DatasetMeta`] describing the resolved columns and the sign
/// policy that was applied.
pub fn normalize_reader<R: Read>(
    reader: R,
    sign: &SignConfig,
) -> Result<(Vec<NormalizedTransaction>, DatasetMeta)> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = clean_headers(rdr.headers()?);
    let map = resolve_columns(&headers)?;
    if map.category.is_none() {
        warn!("No category column found, every row will be Uncategorized");
    }

    let mut rows: Vec<NormalizedTransaction> = Vec::new();
    let mut type_cells: Vec<Option<String>> = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_dropped = 0usize;

    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        rows_read += 1;

        let date_cell = record.get(map.date).unwrap_or("");
        let date = match parse_date(date_cell) {
            Some(date) => date,
            None => {
                rows_dropped += 1;
                debug!("Dropping row {}: unparseable date {:?}", i + 2, date_cell);
                continue;
            }
        };

        let amount_cell = record.get(map.amount).unwrap_or("");
        let amount = match clean_amount(amount_cell) {
            Some(amount) => amount,
            None => {
                rows_dropped += 1;
                debug!(
                    "Dropping row {}: unparseable amount {:?}",
                    i + 2,
                    amount_cell
                );
                continue;
            }
        };

        let category = map
            .category
            .and_then(|idx| record.get(idx))
            .filter(|s| !s.is_empty())
            .unwrap_or("Uncategorized")
            .to_string();
        let description = map
            .description
            .and_then(|idx| record.get(idx))
            .unwrap_or("")
            .to_string();

        type_cells.push(
            map.kind
                .and_then(|idx| record.get(idx))
                .map(str::to_string),
        );
        rows.push(NormalizedTransaction {
            timestamp: date,
            raw_amount: amount_cell.to_string(),
            clean_amount: amount,
            category,
            description,
            year: date.year(),
            month: date.month(),
            month_bucket: date.format("%Y-%m").to_string(),
            day_bucket: date,
            expense: 0.0,
            income: 0.0,
        });
    }

    let amounts: Vec<f64> = rows.iter().map(|r| r.clean_amount).collect();
    let policy = classify_amounts(&amounts, map.kind.is_some(), sign);
    for (row, kind) in rows.iter_mut().zip(type_cells.iter()) {
        let (expense, income) = split_amount(policy, row.clean_amount, kind.as_deref(), sign);
        row.expense = expense;
        row.income = income;
    }

    let meta = DatasetMeta {
        date_column: headers[map.date].clone(),
        amount_column: headers[map.amount].clone(),
        category_column: map.category.map(|idx| headers[idx].clone()),
        sign_policy: policy,
        rows_read,
        rows_kept: rows.len(),
        rows_dropped,
    };
    info!(
        "Normalized {}/{} rows under {} policy ({} dropped)",
        meta.rows_kept, meta.rows_read, meta.sign_policy, meta.rows_dropped
    );

    Ok((rows, meta))
}

/// Normalize transactions from a CSV file on disk.
pub fn normalize_file(
    path: &Path,
    sign: &SignConfig,
) -> Result<(Vec<NormalizedTransaction>, DatasetMeta)> {
    let file = File::open(path)?;
    normalize_reader(file, sign)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SignPolicy;

    fn normalize(csv: &str) -> (Vec<NormalizedTransaction>, DatasetMeta) {
        normalize_reader(csv.as_bytes(), &SignConfig::default())
            .expect("normalization should succeed")
    }

    #[test]
    fn test_negative_amounts_classified_as_expenses() {
        let csv = "\
Date,Amount,Category
2024-01-15,-50.00,Food
2024-01-20,2000.00,Salary
2024-02-01,-30.00,Transport
";
        let (rows, meta) = normalize(csv);
        assert_eq!(meta.sign_policy, SignPolicy::ExpensesNegative);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].expense, 50.0);
        assert_eq!(rows[0].income, 0.0);
        assert_eq!(rows[1].expense, 0.0);
        assert_eq!(rows[1].income, 2000.0);
    }

    #[test]
    fn test_type_column_drives_split() {
        let csv = "\
Date,Amount,Type,Category
2024-01-15,50.00,Debit,Food
2024-01-20,2000.00,Credit,Salary
";
        let (rows, meta) = normalize(csv);
        assert_eq!(meta.sign_policy, SignPolicy::TypeBased);
        assert_eq!(rows[0].expense, 50.0);
        assert_eq!(rows[1].income, 2000.0);
    }

    #[test]
    fn test_positive_spend_log() {
        let csv = "\
Date,Amount,Category
2024-01-15,50.00,Food
2024-01-20,30.00,Transport
";
        let (rows, meta) = normalize(csv);
        assert_eq!(meta.sign_policy, SignPolicy::PositiveIsExpense);
        assert_eq!(rows[0].expense, 50.0);
        assert_eq!(rows[1].expense, 30.0);
    }

    #[test]
    fn test_bad_rows_dropped_and_counted() {
        let csv = "\
Date,Amount,Category
2024-01-15,-50.00,Food
not-a-date,-10.00,Food
2024-01-20,oops,Food
2024-02-01,-30.00,Transport
";
        let (rows, meta) = normalize(csv);
        assert_eq!(meta.rows_read, 4);
        assert_eq!(meta.rows_kept, 2);
        assert_eq!(meta.rows_dropped, 2);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_missing_category_defaults_to_uncategorized() {
        let csv = "\
Date,Amount,Category
2024-01-15,-50.00,
2024-01-20,-30.00,Transport
";
        let (rows, _) = normalize(csv);
        assert_eq!(rows[0].category, "Uncategorized");
        assert_eq!(rows[1].category, "Transport");
    }

    #[test]
    fn test_no_category_column_at_all() {
        let csv = "\
Date,Amount
2024-01-15,-50.00
";
        let (rows, meta) = normalize(csv);
        assert_eq!(meta.category_column, None);
        assert_eq!(rows[0].category, "Uncategorized");
    }

    #[test]
    fn test_derived_buckets() {
        let csv = "\
Date,Amount
2024-01-15,-50.00
";
        let (rows, _) = normalize(csv);
        assert_eq!(rows[0].year, 2024);
        assert_eq!(rows[0].month, 1);
        assert_eq!(rows[0].month_bucket, "2024-01");
        assert_eq!(rows[0].day_bucket.to_string(), "2024-01-15");
    }

    #[test]
    fn test_short_record_dropped_not_fatal() {
        // flexible(true) tolerates the truncated row; its missing amount
        // cell then fails cleaning and the row is dropped.
        let csv = "\
Date,Amount,Category
2024-01-15,-50.00,Food
2024-01-16
2024-01-17,-20.00,Transport
";
        let (rows, meta) = normalize(csv);
        assert_eq!(rows.len(), 2);
        assert_eq!(meta.rows_dropped, 1);
    }

    #[test]
    fn test_missing_required_column_is_schema_error() {
        let csv = "\
When,Notes
2024-01-15,lunch
";
        let result = normalize_reader(csv.as_bytes(), &SignConfig::default());
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("amount"));
    }

    #[test]
    fn test_bom_and_messy_headers() {
        let csv = "\u{feff}Transaction Date , Amt ,Category\n2024-01-15,-50.00,Food\n";
        let (rows, meta) = normalize(csv);
        assert_eq!(meta.date_column, "Transaction Date");
        assert_eq!(meta.amount_column, "Amt");
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_parenthesized_amounts_flow_through() {
        let csv = "\
Date,Amount
2024-01-15,\"(1,234.50)\"
2024-01-20,500.00
";
        let (rows, meta) = normalize(csv);
        assert_eq!(meta.sign_policy, SignPolicy::ExpensesNegative);
        assert_eq!(rows[0].clean_amount, -1234.5);
        assert_eq!(rows[0].expense, 1234.5);
        assert_eq!(rows[0].raw_amount, "(1,234.50)");
    }
}
