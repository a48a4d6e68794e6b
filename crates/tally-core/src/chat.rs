//! Rule-based chat replies
//!
//! A keyword cascade, checked in priority order with plain substring
//! matching. No model behind it; the replies either render analytics over
//! the loaded rows or fall back to canned budgeting tips.

use crate::analytics;
use crate::config::AnalyzerConfig;
use crate::forecast;
use crate::models::NormalizedTransaction;

/// Answer one chat message, with or without a loaded dataset.
pub fn respond(
    message: &str,
    rows: Option<&[NormalizedTransaction]>,
    config: &AnalyzerConfig,
) -> String {
    let msg = message.trim().to_lowercase();

    if contains_any(&msg, &["top category", "top categories", "top spend"]) {
        return match rows {
            None => "I don't see a dataset yet. Upload your CSV to get started.".to_string(),
            Some(rows) => {
                let mut reply = "Top spending categories:".to_string();
                for total in analytics::by_category(rows).iter().take(3) {
                    reply.push_str(&format!("\n• {}: ${:.2}", total.category, total.amount));
                }
                reply
            }
        };
    }

    if contains_any(&msg, &["monthly", "trend"]) {
        return match rows {
            None => "No data yet — upload a CSV to get monthly trends.".to_string(),
            Some(rows) => {
                let monthly = analytics::by_month(rows);
                match monthly.split_last() {
                    None => "No expense data found in the file.".to_string(),
                    Some((latest, _)) => match analytics::mom_comparison(&monthly) {
                        Some(mom) => format!(
                            "Latest month total: ${:.2}. That's {:+.0}% vs average of prior months.",
                            latest.amount, mom.percent_change
                        ),
                        None => format!("Latest month total: ${:.2}.", latest.amount),
                    },
                }
            }
        };
    }

    if contains_any(&msg, &["reduce", "save", "cut"]) {
        let mut tips = vec![
            "Track subscriptions and cancel unused ones.".to_string(),
            "Set a weekly dining out limit and carry cash for it.".to_string(),
            "Automate a small transfer to savings each payday.".to_string(),
        ];
        if let Some(top) = rows.and_then(analytics::top_category) {
            tips.insert(
                0,
                format!(
                    "You spend most on '{}'. Consider a spending cap or alternative cheaper choices for this category.",
                    top
                ),
            );
        }
        return format!("Suggestions:\n• {}", tips.join("\n• "));
    }

    if contains_any(&msg, &["prediction", "forecast"]) {
        return match rows {
            None => "Upload your CSV data to get expense predictions.".to_string(),
            Some(rows) => {
                let series = forecast::monthly_series(rows, config.forecast.months_back);
                format!(
                    "Predicted spending for next month: ${:.2}",
                    forecast::predict_next(&series)
                )
            }
        };
    }

    if contains_any(&msg, &["hello", "hi", "hey"]) {
        return "Hi! I'm tally. Ask me about 'top categories', 'monthly trend', 'predictions', or say 'reduce dining' to get tips.".to_string();
    }

    if msg.contains("help") {
        return "I can help with:\n• Analyzing your spending patterns\n• Predicting future expenses\n• Budgeting tips\n• Understanding your top categories\nTry asking: 'What are my top categories?' or 'How can I save money?'".to_string();
    }

    if contains_any(&msg, &["dining", "food", "restaurants"]) {
        return "Dining tips: set a weekly limit, prefer home-cooked meals, and track small purchases — they add up.".to_string();
    }
    if msg.contains("subscription") {
        return "Check your recurring charges: map them and cancel ones you rarely use.".to_string();
    }
    if msg.contains("budget") {
        return "Budgeting tip: Use the 50/30/20 rule - 50% needs, 30% wants, 20% savings.".to_string();
    }

    match rows {
        Some(rows) => format!(
            "I analyzed your data: total recorded spending: ${:.2}. Ask 'top categories' or 'monthly trend' for more details.",
            analytics::total_expense(rows)
        ),
        None => {
            "I can provide budget tips and analyze uploaded CSVs. Upload a CSV to get personalized suggestions."
                .to_string()
        }
    }
}

fn contains_any(msg: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| msg.contains(needle))
}
