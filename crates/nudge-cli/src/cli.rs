//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nudge - Track spending and get gentle nudges
#[derive(Parser)]
#[command(name = "nudge")]
#[command(about = "Personal finance tracker with spending nudges and projections", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Transaction fixture to start the session from (.csv or .json)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Reference date for the "current month" (YYYY-MM-DD, default: today)
    #[arg(long, global = true)]
    pub today: Option<String>,

    /// Insight config file (default: ~/.local/share/nudge/config/insights.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List transactions with income, expense and balance totals
    List,

    /// Show spending nudges for the current month
    Nudges,

    /// Show projected next-month spend per category
    Trends,

    /// Project six months of savings with an extra monthly saving
    WhatIf {
        /// Extra amount saved each month (must be greater than zero)
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
    },

    /// List the available categories
    Categories,

    /// Start an interactive session (add, delete, nudges, trends, what-if)
    Shell,
}
