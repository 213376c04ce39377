//! Insight configuration
//!
//! Thresholds for the nudge rules and the what-if horizon.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. Check for an explicit path, else the override in the data dir
//!    (~/.local/share/nudge/config/insights.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! Override files may set any subset of keys; the rest keep their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/insights.toml");

/// Thresholds used by the nudge rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NudgeThresholds {
    /// Below this many transactions only the "add more data" nudge is produced
    pub min_transactions: usize,
    pub dining_out_limit: f64,
    pub entertainment_count: usize,
    pub no_income_spending_limit: f64,
    /// Distinct expense categories must exceed this for the diversity nudge
    pub diversity_categories: usize,
    pub diversity_spending: f64,
}

impl Default for NudgeThresholds {
    fn default() -> Self {
        Self {
            min_transactions: 3,
            dining_out_limit: 100.0,
            entertainment_count: 3,
            no_income_spending_limit: 100.0,
            diversity_categories: 4,
            diversity_spending: 200.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhatIfConfig {
    /// Projection horizon in months
    pub months: u32,
}

impl Default for WhatIfConfig {
    fn default() -> Self {
        Self { months: 6 }
    }
}

/// Top-level insight configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    pub nudges: NudgeThresholds,
    pub what_if: WhatIfConfig,
}

impl InsightConfig {
    /// Load from the default override location, falling back to embedded defaults
    pub fn load() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Self::parse(DEFAULT_CONFIG),
        }
    }

    /// Load from an explicit path (the file must exist)
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "Loaded insight config override");
        Ok(config)
    }

    /// Parse TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.what_if.months == 0 {
            return Err(Error::Config("what_if.months must be at least 1".into()));
        }
        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("nudge").join("config").join("insights.toml"))
}
