//! Cell-level cleaning: amount and date parsing
//!
//! Exports arrive with currency symbols, thousands separators,
//! parentheses-negatives, and a dozen date spellings. The cleaners here turn
//! one raw cell into a value or `None`; callers decide what a `None` means
//! (the normalizer drops the row).

use chrono::{NaiveDate, NaiveDateTime};

/// Date formats tried in order. ISO first, then US-style, then day-first.
/// %m/%d/%y must sit before %m/%d/%Y: chrono's %Y accepts fewer than four
/// digits, so the four-digit form would swallow "1/15/24" as year 24.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%y",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%Y/%m/%d",
    "%b %d, %Y",
    "%d %b %Y",
];

/// Datetime formats accepted for date cells; the time of day is discarded.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse an amount-like cell into a signed number.
///
/// Handles parentheses-negatives ("(123.45)" is -123.45), thousands
/// separators, and arbitrary currency symbols or other junk characters,
/// which get stripped. Returns `None` for anything that does not contain a
/// parseable number.
pub fn clean_amount(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    // Accounting convention: balanced parentheses mean negative.
    let s = if s.starts_with('(') && s.ends_with(')') {
        format!("-{}", &s[1..s.len() - 1])
    } else {
        s.to_string()
    };

    let s = s.replace(',', "");
    let filtered: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
        .collect();

    // Nothing numeric left after stripping.
    if matches!(filtered.as_str(), "" | "." | "+" | "-" | "+." | "-.") {
        return None;
    }

    filtered.parse::<f64>().ok()
}

/// Parse a date cell, trying each supported format in order.
///
/// A leading UTF-8 BOM is stripped so the first cell of a file still parses.
/// Returns `None` when no format matches.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim_start_matches('\u{feff}').trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_amount_plain() {
        assert_eq!(clean_amount("123.45"), Some(123.45));
        assert_eq!(clean_amount("-50"), Some(-50.0));
        assert_eq!(clean_amount("+7.5"), Some(7.5));
        assert_eq!(clean_amount("0"), Some(0.0));
    }

    #[test]
    fn test_clean_amount_parentheses_negative() {
        assert_eq!(clean_amount("(123.45)"), Some(-123.45));
        assert_eq!(clean_amount("(1,234.50)"), Some(-1234.50));
        assert_eq!(clean_amount("($99.00)"), Some(-99.0));
    }

    #[test]
    fn test_clean_amount_unbalanced_parens_are_just_junk() {
        // Only balanced parens flip the sign; a stray one is stripped.
        assert_eq!(clean_amount("(123"), Some(123.0));
        assert_eq!(clean_amount("123)"), Some(123.0));
    }

    #[test]
    fn test_clean_amount_thousands_separators() {
        assert_eq!(clean_amount("1,234"), Some(1234.0));
        assert_eq!(clean_amount("12,345,678.90"), Some(12345678.9));
    }

    #[test]
    fn test_clean_amount_currency_symbols() {
        assert_eq!(clean_amount("$100.00"), Some(100.0));
        assert_eq!(clean_amount("€50.25"), Some(50.25));
        assert_eq!(clean_amount("₹2,500"), Some(2500.0));
        assert_eq!(clean_amount("USD 45.10"), Some(45.10));
    }

    #[test]
    fn test_clean_amount_unparseable() {
        assert_eq!(clean_amount(""), None);
        assert_eq!(clean_amount("   "), None);
        assert_eq!(clean_amount("-"), None);
        assert_eq!(clean_amount("+"), None);
        assert_eq!(clean_amount("."), None);
        assert_eq!(clean_amount("+."), None);
        assert_eq!(clean_amount("-."), None);
        assert_eq!(clean_amount("abc"), None);
        assert_eq!(clean_amount("()"), None);
        assert_eq!(clean_amount("N/A"), None);
    }

    #[test]
    fn test_clean_amount_malformed_number() {
        // Stripping leaves digit/sign soup that still fails to parse.
        assert_eq!(clean_amount("1-2"), None);
        assert_eq!(clean_amount("1.2.3"), None);
    }

    #[test]
    fn test_parse_date_iso() {
        assert_eq!(
            parse_date("2024-01-05"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
    }

    #[test]
    fn test_parse_date_us_slash() {
        assert_eq!(
            parse_date("01/15/2024"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(parse_date("1/15/24"), NaiveDate::from_ymd_opt(2024, 1, 15));
    }

    #[test]
    fn test_parse_date_day_first() {
        // 25 can only be a day, so the day-first format catches it.
        assert_eq!(
            parse_date("25/12/2024"),
            NaiveDate::from_ymd_opt(2024, 12, 25)
        );
        assert_eq!(
            parse_date("25-12-2024"),
            NaiveDate::from_ymd_opt(2024, 12, 25)
        );
    }

    #[test]
    fn test_parse_date_named_month() {
        assert_eq!(
            parse_date("Jan 05, 2024"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
        assert_eq!(
            parse_date("05 Jan 2024"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
    }

    #[test]
    fn test_parse_date_datetime_discards_time() {
        assert_eq!(
            parse_date("2024-01-05 13:45:00"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
        assert_eq!(
            parse_date("2024-01-05T13:45:00"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
    }

    #[test]
    fn test_parse_date_bom_and_whitespace() {
        assert_eq!(
            parse_date("\u{feff}2024-01-05"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
        assert_eq!(
            parse_date("  2024-01-05  "),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
    }

    #[test]
    fn test_parse_date_unparseable() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date("02/30/2024"), None);
    }
}
