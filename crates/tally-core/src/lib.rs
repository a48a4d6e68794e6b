//! Tally Core Library
//!
//! Everything needed to turn a messy transaction CSV into answers:
//!
//! - Schema inference over real-world header names
//! - Amount cleaning and sign-convention normalization
//! - Spending aggregations and report bundles
//! - Naive next-month forecasting
//! - Plain-language summaries and rule-based chat replies

pub mod analytics;
pub mod chat;
pub mod clean;
pub mod config;
pub mod error;
pub mod forecast;
pub mod insights;
pub mod models;
pub mod normalize;
pub mod query;
pub mod schema;
pub mod sign;

pub use config::AnalyzerConfig;
pub use error::{Error, Result};
pub use models::{DatasetMeta, NormalizedTransaction, Role, SignPolicy};
pub use normalize::{normalize_file, normalize_reader};
pub use query::QueryFilter;
