//! Nudge CLI - Personal finance tracker
//!
//! Usage:
//!   nudge nudges --file history.csv      Show nudges for this month
//!   nudge trends --file history.csv      Project next month's spend
//!   nudge what-if --amount 50            Six-month savings projection
//!   nudge shell                          Interactive session

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let open = || {
        commands::open_session(cli.file.as_deref(), cli.today.as_deref(), cli.config.as_deref())
    };

    match cli.command {
        Commands::Categories => commands::cmd_categories(cli.json),
        Commands::List => commands::cmd_list(&open()?, cli.json),
        Commands::Nudges => commands::cmd_nudges(&open()?, cli.json),
        Commands::Trends => commands::cmd_trends(&open()?, cli.json),
        Commands::WhatIf { amount } => commands::cmd_what_if(&mut open()?, &amount, cli.json),
        Commands::Shell => commands::cmd_shell(&mut open()?),
    }
}
