//! Nudge rule evaluator
//!
//! Turns the current month's transactions into short advisory messages.
//! Rules run in a fixed registration order and each may contribute at most
//! one nudge:
//!
//! 1. Dining out over the monthly limit
//! 2. Frequent entertainment purchases
//! 3. Income balance (healthy ratio, else spending with no income)
//! 4. Spending spread across many categories
//!
//! Lists that are too short short-circuit to a single "need more data"
//! nudge, and a month where no rule fires yields a single "keep tracking"
//! nudge.

use chrono::NaiveDate;

use crate::config::NudgeThresholds;
use crate::models::{Category, Transaction};

use super::summary::MonthSummary;
use super::types::{Nudge, NudgeKind};

/// A single nudge rule evaluated against the reference month
pub trait NudgeRule {
    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Inspect the month and produce at most one nudge
    fn evaluate(&self, month: &MonthSummary) -> Option<Nudge>;
}

/// Dining Out spend above the monthly limit
pub struct DiningOutRule {
    limit: f64,
}

impl DiningOutRule {
    pub fn new(limit: f64) -> Self {
        Self { limit }
    }
}

impl NudgeRule for DiningOutRule {
    fn name(&self) -> &'static str {
        "Dining Out"
    }

    fn evaluate(&self, month: &MonthSummary) -> Option<Nudge> {
        if month.spent_on(Category::DiningOut) > self.limit {
            Some(Nudge::new(
                NudgeKind::DiningOut,
                "Dining out is adding up this month. Cooking at home a few more nights could save you money.",
            ))
        } else {
            None
        }
    }
}

/// Many separate entertainment purchases in the month
pub struct EntertainmentFrequencyRule {
    min_count: usize,
}

impl EntertainmentFrequencyRule {
    pub fn new(min_count: usize) -> Self {
        Self { min_count }
    }
}

impl NudgeRule for EntertainmentFrequencyRule {
    fn name(&self) -> &'static str {
        "Entertainment Frequency"
    }

    fn evaluate(&self, month: &MonthSummary) -> Option<Nudge> {
        let count = month.expense_count(Category::Entertainment);
        if count >= self.min_count {
            Some(Nudge::new(
                NudgeKind::EntertainmentFrequency,
                format!(
                    "You've made {} entertainment purchases this month. A set fun budget could keep them in check.",
                    count
                ),
            ))
        } else {
            None
        }
    }
}

/// Income vs spending balance
///
/// Praises spending under half of income; otherwise, only when there is no
/// income at all, warns about spending past the limit. Partial income with
/// spending at or above half of it produces nothing.
pub struct IncomeBalanceRule {
    no_income_limit: f64,
}

impl IncomeBalanceRule {
    pub fn new(no_income_limit: f64) -> Self {
        Self { no_income_limit }
    }
}

impl NudgeRule for IncomeBalanceRule {
    fn name(&self) -> &'static str {
        "Income Balance"
    }

    fn evaluate(&self, month: &MonthSummary) -> Option<Nudge> {
        let income = month.income;
        let expenses = month.total_expenses();

        if income > 0.0 && expenses < income / 2.0 {
            Some(Nudge::new(
                NudgeKind::HealthyRatio,
                "Nice work! You've spent less than half of your income this month. Consider moving the difference into savings.",
            ))
        } else if income == 0.0 && expenses > self.no_income_limit {
            Some(Nudge::new(
                NudgeKind::NoIncomeSpending,
                "You're spending this month without any recorded income. Keep a close eye on your balance.",
            ))
        } else {
            None
        }
    }
}

/// Spending spread over many categories once the total is significant
pub struct CategoryDiversityRule {
    max_categories: usize,
    min_spending: f64,
}

impl CategoryDiversityRule {
    pub fn new(max_categories: usize, min_spending: f64) -> Self {
        Self {
            max_categories,
            min_spending,
        }
    }
}

impl NudgeRule for CategoryDiversityRule {
    fn name(&self) -> &'static str {
        "Category Diversity"
    }

    fn evaluate(&self, month: &MonthSummary) -> Option<Nudge> {
        if month.expense_categories() > self.max_categories
            && month.total_expenses() > self.min_spending
        {
            Some(Nudge::new(
                NudgeKind::CategoryDiversity,
                "Your spending is spread across many categories this month. Reviewing the smaller ones could reveal easy savings.",
            ))
        } else {
            None
        }
    }
}

/// Runs the registered rules in order
pub struct NudgeEvaluator {
    min_transactions: usize,
    rules: Vec<Box<dyn NudgeRule>>,
}

impl Default for NudgeEvaluator {
    fn default() -> Self {
        Self::new(&NudgeThresholds::default())
    }
}

impl NudgeEvaluator {
    /// Create an evaluator with the built-in rules
    pub fn new(thresholds: &NudgeThresholds) -> Self {
        let mut evaluator = Self::empty(thresholds.min_transactions);

        // Registration order is output order
        evaluator.register(Box::new(DiningOutRule::new(thresholds.dining_out_limit)));
        evaluator.register(Box::new(EntertainmentFrequencyRule::new(
            thresholds.entertainment_count,
        )));
        evaluator.register(Box::new(IncomeBalanceRule::new(
            thresholds.no_income_spending_limit,
        )));
        evaluator.register(Box::new(CategoryDiversityRule::new(
            thresholds.diversity_categories,
            thresholds.diversity_spending,
        )));

        evaluator
    }

    /// Create an evaluator with no rules registered
    pub fn empty(min_transactions: usize) -> Self {
        Self {
            min_transactions,
            rules: vec![],
        }
    }

    /// Register a rule; it runs after every rule registered before it
    pub fn register(&mut self, rule: Box<dyn NudgeRule>) {
        self.rules.push(rule);
    }

    /// Evaluate all rules against the month containing `today`
    pub fn evaluate(&self, transactions: &[Transaction], today: NaiveDate) -> Vec<Nudge> {
        if transactions.len() < self.min_transactions {
            return vec![Nudge::new(
                NudgeKind::NeedMoreData,
                format!(
                    "Add at least {} transactions to start getting personalized nudges.",
                    self.min_transactions
                ),
            )];
        }

        let month = MonthSummary::for_month_of(transactions, today);

        let mut nudges: Vec<Nudge> = self
            .rules
            .iter()
            .filter_map(|rule| {
                let nudge = rule.evaluate(&month);
                if let Some(ref n) = nudge {
                    tracing::debug!(rule = rule.name(), kind = n.kind.as_str(), "Nudge rule fired");
                }
                nudge
            })
            .collect();

        if nudges.is_empty() {
            nudges.push(Nudge::new(
                NudgeKind::KeepTracking,
                "Keep tracking your transactions to unlock more insights.",
            ));
        }

        nudges
    }

    /// Names of the registered rules, in evaluation order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }
}

/// Evaluate the built-in rules with default thresholds
pub fn evaluate_nudges(transactions: &[Transaction], today: NaiveDate) -> Vec<Nudge> {
    NudgeEvaluator::default().evaluate(transactions, today)
}
