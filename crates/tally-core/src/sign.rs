//! Sign-convention classification
//!
//! Bank exports disagree on what a sign means. Most write debits as negative
//! amounts; some write magnitudes plus a type flag; single-column spend logs
//! write expenses as positive. The classifier inspects the cleaned amounts of
//! a whole file once and picks one [`SignPolicy`]; the per-row split then
//! dispatches on that policy, so the threshold logic lives in exactly one
//! place.

use crate::config::SignConfig;
use crate::models::SignPolicy;

/// Decide the sign convention for a file from its cleaned amounts.
///
/// The negative fraction is computed over non-zero amounts only, 0 when none
/// exist. At or above the threshold the file is treated as
/// negative-means-expense; below it, a resolved type column wins; the
/// positive-means-expense convention is the last resort.
pub fn classify_amounts(amounts: &[f64], has_type_column: bool, config: &SignConfig) -> SignPolicy {
    let nonzero = amounts.iter().filter(|a| **a != 0.0).count();
    let negative = amounts.iter().filter(|a| **a < 0.0).count();
    let neg_frac = if nonzero == 0 {
        0.0
    } else {
        negative as f64 / nonzero as f64
    };

    if neg_frac >= config.negative_fraction_threshold {
        SignPolicy::ExpensesNegative
    } else if has_type_column {
        SignPolicy::TypeBased
    } else {
        SignPolicy::PositiveIsExpense
    }
}

/// Split one signed amount into its (expense, income) parts under a policy.
///
/// Exactly one side is ever non-zero. Under [`SignPolicy::TypeBased`] the
/// type cell decides the side and the amount contributes its magnitude; a
/// missing cell counts as income.
pub fn split_amount(
    policy: SignPolicy,
    amount: f64,
    type_value: Option<&str>,
    config: &SignConfig,
) -> (f64, f64) {
    match policy {
        SignPolicy::ExpensesNegative => ((-amount).max(0.0), amount.max(0.0)),
        SignPolicy::PositiveIsExpense => (amount.max(0.0), (-amount).max(0.0)),
        SignPolicy::TypeBased => {
            let kind = type_value.unwrap_or("").to_lowercase();
            if config.expense_keywords.iter().any(|k| *k == kind) {
                (amount.abs(), 0.0)
            } else {
                (0.0, amount.abs())
            }
        }
    }
}
