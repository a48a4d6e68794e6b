//! Next-month spend forecasting
//!
//! A least-squares line through the trailing monthly totals, extrapolated one
//! month ahead. Deliberately naive: no seasonality, no outlier handling. The
//! CLI says as much next to every number it prints.

use crate::analytics::by_month;
use crate::models::NormalizedTransaction;

/// The trailing monthly expense totals, oldest first, at most `months_back`
/// of them. Months with no spending at all do not appear.
pub fn monthly_series(rows: &[NormalizedTransaction], months_back: usize) -> Vec<f64> {
    let monthly = by_month(rows);
    let skip = monthly.len().saturating_sub(months_back);
    monthly.into_iter().skip(skip).map(|m| m.amount).collect()
}

/// Extrapolate the next value of a series.
///
/// Fits `total = slope * index + intercept` over indices `0..n` and evaluates
/// at `n`, floored at zero. One point predicts itself; an empty series
/// predicts zero.
pub fn predict_next(series: &[f64]) -> f64 {
    match series.len() {
        0 => 0.0,
        1 => series[0],
        len => {
            let n = len as f64;
            let sum_x: f64 = (0..len).map(|i| i as f64).sum();
            let sum_y: f64 = series.iter().sum();
            let sum_xy: f64 = series.iter().enumerate().map(|(i, y)| i as f64 * y).sum();
            let sum_xx: f64 = (0..len).map(|i| (i * i) as f64).sum();
            // Indices are distinct, so the denominator cannot vanish.
            let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x);
            let intercept = (sum_y - slope * sum_x) / n;
            (slope * n + intercept).max(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SignConfig;
    use crate::normalize::normalize_reader;

    #[test]
    fn test_empty_series_predicts_zero() {
        assert_eq!(predict_next(&[]), 0.0);
    }

    #[test]
    fn test_single_point_predicts_itself() {
        assert_eq!(predict_next(&[100.0]), 100.0);
    }

    #[test]
    fn test_linear_trend_extrapolates() {
        let predicted = predict_next(&[100.0, 200.0]);
        assert!((predicted - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_flat_series_stays_flat() {
        let predicted = predict_next(&[50.0, 50.0, 50.0]);
        assert!((predicted - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_steep_decline_floors_at_zero() {
        assert_eq!(predict_next(&[100.0, 10.0]), 0.0);
    }

    #[test]
    fn test_longer_series_fits_through_noise() {
        // A perfect line through 10, 20, 30, 40 continues to 50.
        let predicted = predict_next(&[10.0, 20.0, 30.0, 40.0]);
        assert!((predicted - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_series_keeps_trailing_window() {
        let csv = "\
Date,Amount
2023-09-01,-10.00
2023-10-01,-20.00
2023-11-01,-30.00
2023-12-01,-40.00
2024-01-01,-50.00
2024-02-01,-60.00
2024-03-01,-70.00
2024-04-01,-80.00
";
        let (rows, _) = normalize_reader(csv.as_bytes(), &SignConfig::default())
            .expect("fixture should normalize");
        let series = monthly_series(&rows, 6);
        assert_eq!(series, vec![30.0, 40.0, 50.0, 60.0, 70.0, 80.0]);
    }

    #[test]
    fn test_monthly_series_shorter_than_window() {
        let csv = "\
Date,Amount
2024-01-01,-50.00
2024-02-01,-60.00
";
        let (rows, _) = normalize_reader(csv.as_bytes(), &SignConfig::default())
            .expect("fixture should normalize");
        assert_eq!(monthly_series(&rows, 6), vec![50.0, 60.0]);
    }
}
