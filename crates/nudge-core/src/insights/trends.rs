//! Predictive monthly-average projector
//!
//! Projects next month's spend per category from every month present in the
//! data. Each category's total is divided by the number of distinct months
//! with any expense at all, not by the months the category itself appears
//! in, so categories seen only occasionally are discounted.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Category, Transaction, YearMonth};

use super::types::TrendProjection;

/// Running totals for one category across months
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryHistory {
    /// Sum of the category's monthly spend
    pub total: f64,
    /// Months in which the category had any spend
    pub months: usize,
}

/// Expense magnitudes bucketed as month -> category -> sum
pub fn monthly_spending(transactions: &[Transaction]) -> BTreeMap<YearMonth, BTreeMap<Category, f64>> {
    let mut by_month: BTreeMap<YearMonth, BTreeMap<Category, f64>> = BTreeMap::new();

    for tx in transactions.iter().filter(|t| t.is_expense()) {
        *by_month
            .entry(tx.month())
            .or_default()
            .entry(tx.category)
            .or_insert(0.0) += tx.magnitude();
    }

    by_month
}

/// Per-category totals and month counts from the monthly buckets
pub fn category_history(
    by_month: &BTreeMap<YearMonth, BTreeMap<Category, f64>>,
) -> BTreeMap<Category, CategoryHistory> {
    let mut history: BTreeMap<Category, CategoryHistory> = BTreeMap::new();

    for categories in by_month.values() {
        for (category, amount) in categories {
            let entry = history.entry(*category).or_default();
            entry.total += amount;
            entry.months += 1;
        }
    }

    history
}

/// Project next month's spend per category
///
/// Returns an empty projection when there are no expenses.
pub fn project_trends(transactions: &[Transaction]) -> TrendProjection {
    let by_month = monthly_spending(transactions);
    let months_considered: BTreeSet<YearMonth> = by_month.keys().copied().collect();

    if months_considered.is_empty() {
        return TrendProjection::new();
    }

    let divisor = months_considered.len() as f64;
    let history = category_history(&by_month);

    tracing::debug!(
        months = months_considered.len(),
        categories = history.len(),
        "Projected category trends"
    );

    history
        .into_iter()
        .map(|(category, h)| (category, h.total / divisor))
        .collect()
}
