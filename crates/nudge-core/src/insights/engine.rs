//! Insight Engine - bundles the nudge evaluator and the projectors

use chrono::NaiveDate;

use crate::config::InsightConfig;
use crate::error::Result;
use crate::models::Transaction;

use super::nudges::NudgeEvaluator;
use super::trends::project_trends;
use super::types::{Insights, WhatIfProjection};
use super::what_if::project_savings;

/// Inputs shared by every insight computation
#[derive(Debug, Clone, Copy)]
pub struct AnalysisContext<'a> {
    /// Transactions to analyze (never mutated during analysis)
    pub transactions: &'a [Transaction],
    /// Reference date that defines the "current month"
    pub today: NaiveDate,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(transactions: &'a [Transaction], today: NaiveDate) -> Self {
        Self {
            transactions,
            today,
        }
    }
}

/// The main insight engine
pub struct InsightEngine {
    evaluator: NudgeEvaluator,
    what_if_months: u32,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with default thresholds
    pub fn new() -> Self {
        Self::with_config(&InsightConfig::default())
    }

    pub fn with_config(config: &InsightConfig) -> Self {
        Self {
            evaluator: NudgeEvaluator::new(&config.nudges),
            what_if_months: config.what_if.months,
        }
    }

    /// Create an engine around a custom evaluator
    pub fn with_evaluator(evaluator: NudgeEvaluator, what_if_months: u32) -> Self {
        Self {
            evaluator,
            what_if_months,
        }
    }

    /// Recompute the views that follow every ledger change
    pub fn analyze(&self, ctx: &AnalysisContext<'_>) -> Insights {
        let insights = Insights {
            nudges: self.evaluator.evaluate(ctx.transactions, ctx.today),
            trends: project_trends(ctx.transactions),
        };

        tracing::debug!(
            transactions = ctx.transactions.len(),
            nudges = insights.nudges.len(),
            categories = insights.trends.len(),
            "Insight analysis complete"
        );

        insights
    }

    /// Run the what-if projector on request
    pub fn what_if(&self, ctx: &AnalysisContext<'_>, extra_saving: f64) -> Result<WhatIfProjection> {
        project_savings(ctx.transactions, ctx.today, extra_saving, self.what_if_months)
    }

    /// Names of the registered nudge rules
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.evaluator.rule_names()
    }

    pub fn what_if_months(&self) -> u32 {
        self.what_if_months
    }
}
