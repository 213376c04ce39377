//! Nudge Core Library
//!
//! Shared functionality for the Nudge personal finance tracker:
//! - Transaction models and required-field validation
//! - In-memory ledger and tracking session
//! - Insight engine (nudges, category trends, what-if savings)
//! - Threshold configuration with file overrides
//! - CSV/JSON fixture import

pub mod config;
pub mod error;
pub mod import;
pub mod insights;
pub mod ledger;
pub mod models;
pub mod session;

pub use config::{InsightConfig, NudgeThresholds, WhatIfConfig};
pub use error::{Error, Result};
pub use insights::{
    compute_what_if, evaluate_nudges, project_trends, AnalysisContext, InsightEngine, Insights,
    Nudge, NudgeKind, TrendProjection, WhatIfProjection,
};
pub use ledger::Ledger;
pub use models::{Category, LedgerSummary, NewTransaction, Transaction, TransactionId, YearMonth};
pub use session::Session;
