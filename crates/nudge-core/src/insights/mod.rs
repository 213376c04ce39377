//! Insight Engine - derived views over the transaction list
//!
//! Three independent, pure computations over the same transactions:
//!
//! - **Nudges** - advisory messages about the current month's spending
//! - **Trends** - projected next-month spend per category
//! - **What-if** - six-month savings projection with an extra monthly saving
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use nudge_core::insights::{AnalysisContext, InsightEngine};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
//! let engine = InsightEngine::new();
//! let insights = engine.analyze(&AnalysisContext::new(&[], today));
//! assert_eq!(insights.nudges.len(), 1);
//! ```

pub mod engine;
pub mod nudges;
pub mod summary;
pub mod trends;
pub mod types;
pub mod what_if;

pub use engine::{AnalysisContext, InsightEngine};
pub use nudges::{evaluate_nudges, NudgeEvaluator, NudgeRule};
pub use summary::MonthSummary;
pub use trends::{project_trends, CategoryHistory};
pub use types::{Insights, Nudge, NudgeKind, TrendProjection, WhatIfProjection};
pub use what_if::{compute_what_if, parse_extra_saving, project_savings, validate_extra_saving};
