//! Shared command utilities
//!
//! This module contains:
//! - `open_session` - Build a session from config, fixture and reference date
//! - `money` - Currency formatting for display

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use nudge_core::{import, InsightConfig, Session};

/// Parse the --today flag
pub fn parse_reference_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .context("Invalid --today date format (use YYYY-MM-DD)")
}

/// Load config (explicit path, then override location, then defaults)
pub fn load_config(config_path: Option<&Path>) -> Result<InsightConfig> {
    match config_path {
        Some(path) => InsightConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => InsightConfig::load().context("Failed to load insight config"),
    }
}

/// Build a session, optionally seeded from a fixture file
pub fn open_session(
    file: Option<&Path>,
    today: Option<&str>,
    config_path: Option<&Path>,
) -> Result<Session> {
    let config = load_config(config_path)?;
    let mut session = Session::with_config(&config);

    if let Some(today) = today {
        session = session.with_reference_date(parse_reference_date(today)?);
    }

    if let Some(path) = file {
        let transactions = import::load_file(path)
            .with_context(|| format!("Failed to load transactions from {}", path.display()))?;
        session.load(transactions)?;
    }

    tracing::debug!(
        today = %session.today(),
        transactions = session.transactions().len(),
        "Session ready"
    );
    Ok(session)
}

/// Format an amount as dollars with two decimals
pub fn money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}
