//! Per-month aggregation shared by the nudge rules and the what-if projector

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Category, Transaction, YearMonth};

/// Aggregates for the transactions that fall in one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub month: YearMonth,
    /// Sum of positive amounts
    pub income: f64,
    /// Summed expense magnitude per category
    pub spending: BTreeMap<Category, f64>,
    /// Number of expense transactions per category
    pub expense_counts: BTreeMap<Category, usize>,
}

impl MonthSummary {
    /// Summarize the month containing `reference`
    pub fn for_month_of(transactions: &[Transaction], reference: NaiveDate) -> Self {
        let month = YearMonth::of(reference);
        let mut summary = Self {
            month,
            income: 0.0,
            spending: BTreeMap::new(),
            expense_counts: BTreeMap::new(),
        };

        for tx in transactions.iter().filter(|t| month.contains(t.date)) {
            if tx.is_income() {
                summary.income += tx.amount;
            } else if tx.is_expense() {
                *summary.spending.entry(tx.category).or_insert(0.0) += tx.magnitude();
                *summary.expense_counts.entry(tx.category).or_insert(0) += 1;
            }
        }

        summary
    }

    /// Total expense magnitude across all categories
    pub fn total_expenses(&self) -> f64 {
        self.spending.values().sum()
    }

    pub fn spent_on(&self, category: Category) -> f64 {
        self.spending.get(&category).copied().unwrap_or(0.0)
    }

    pub fn expense_count(&self, category: Category) -> usize {
        self.expense_counts.get(&category).copied().unwrap_or(0)
    }

    /// Number of distinct categories with at least one expense
    pub fn expense_categories(&self) -> usize {
        self.spending.len()
    }

    pub fn net(&self) -> f64 {
        self.income - self.total_expenses()
    }
}
