//! What-if savings projector
//!
//! Linear extrapolation: the reference month's net repeats unchanged for the
//! horizon, plus a hypothetical extra monthly saving. No compounding.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::models::Transaction;

use super::summary::MonthSummary;
use super::types::WhatIfProjection;

/// Default projection horizon in months
pub const DEFAULT_MONTHS: u32 = 6;

/// Parse a user-entered extra saving amount
pub fn parse_extra_saving(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| Error::InvalidSaving(format!("'{}' is not a number", trimmed)))?;
    validate_extra_saving(value)?;
    Ok(value)
}

/// The extra saving must be finite and strictly positive
pub fn validate_extra_saving(extra_saving: f64) -> Result<()> {
    if !extra_saving.is_finite() {
        return Err(Error::InvalidSaving(format!(
            "{} is not a finite number",
            extra_saving
        )));
    }
    if extra_saving <= 0.0 {
        return Err(Error::InvalidSaving(format!(
            "{} must be greater than zero",
            extra_saving
        )));
    }
    Ok(())
}

/// Project savings over `months` from the month containing `today`
pub fn project_savings(
    transactions: &[Transaction],
    today: NaiveDate,
    extra_saving: f64,
    months: u32,
) -> Result<WhatIfProjection> {
    validate_extra_saving(extra_saving)?;

    let summary = MonthSummary::for_month_of(transactions, today);
    let income = summary.income;
    let expenses = summary.total_expenses();
    let monthly_net = summary.net();

    Ok(WhatIfProjection {
        month: summary.month,
        income,
        expenses,
        monthly_net,
        extra_saving,
        months,
        projected_savings: (monthly_net + extra_saving) * f64::from(months),
    })
}

/// Project savings over the default six months
pub fn compute_what_if(
    transactions: &[Transaction],
    today: NaiveDate,
    extra_saving: f64,
) -> Result<WhatIfProjection> {
    project_savings(transactions, today, extra_saving, DEFAULT_MONTHS)
}
