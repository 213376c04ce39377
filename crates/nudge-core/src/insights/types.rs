//! Core types for the Insight Engine

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Category, YearMonth};

/// Kinds of nudge the rule evaluator can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NudgeKind {
    /// Not enough transactions to say anything yet
    NeedMoreData,
    /// Dining out spend this month is high
    DiningOut,
    /// Many entertainment purchases this month
    EntertainmentFrequency,
    /// Spending is under half of income
    HealthyRatio,
    /// Spending with no recorded income
    NoIncomeSpending,
    /// Spending spread across many categories
    CategoryDiversity,
    /// Nothing notable; keep going
    KeepTracking,
}

impl NudgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NudgeKind::NeedMoreData => "need_more_data",
            NudgeKind::DiningOut => "dining_out",
            NudgeKind::EntertainmentFrequency => "entertainment_frequency",
            NudgeKind::HealthyRatio => "healthy_ratio",
            NudgeKind::NoIncomeSpending => "no_income_spending",
            NudgeKind::CategoryDiversity => "category_diversity",
            NudgeKind::KeepTracking => "keep_tracking",
        }
    }
}

impl fmt::Display for NudgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NudgeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "need_more_data" => Ok(NudgeKind::NeedMoreData),
            "dining_out" => Ok(NudgeKind::DiningOut),
            "entertainment_frequency" => Ok(NudgeKind::EntertainmentFrequency),
            "healthy_ratio" => Ok(NudgeKind::HealthyRatio),
            "no_income_spending" => Ok(NudgeKind::NoIncomeSpending),
            "category_diversity" => Ok(NudgeKind::CategoryDiversity),
            "keep_tracking" => Ok(NudgeKind::KeepTracking),
            _ => Err(format!("Unknown nudge kind: {}", s)),
        }
    }
}

/// An advisory message produced by a nudge rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nudge {
    pub kind: NudgeKind,
    pub message: String,
}

impl Nudge {
    pub fn new(kind: NudgeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Nudge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Projected next-month spend per category
pub type TrendProjection = BTreeMap<Category, f64>;

/// Result of a what-if savings projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatIfProjection {
    /// Month whose net is extrapolated
    pub month: YearMonth,
    pub income: f64,
    pub expenses: f64,
    pub monthly_net: f64,
    pub extra_saving: f64,
    /// Projection horizon
    pub months: u32,
    pub projected_savings: f64,
}

/// Derived views recomputed after every ledger change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub nudges: Vec<Nudge>,
    pub trends: TrendProjection,
}
