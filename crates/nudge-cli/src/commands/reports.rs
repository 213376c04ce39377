//! Report command implementations

use anyhow::Result;
use nudge_core::{Category, Nudge, Session, Transaction, TrendProjection, WhatIfProjection};

use super::{money, truncate};

pub fn render_transactions(session: &Session) -> String {
    let transactions = session.transactions();
    let summary = session.summary();

    let mut out = format!("📒 Transactions ({})\n", transactions.len());
    out.push_str("   ─────────────────────────────────────────────────────────────\n");

    if transactions.is_empty() {
        out.push_str("   No transactions yet.\n");
    } else {
        for tx in transactions {
            out.push_str(&transaction_line(tx));
            out.push('\n');
        }
    }

    out.push_str(&format!(
        "\n   Income: {}   Expenses: {}   Balance: {}\n",
        money(summary.income),
        money(summary.expenses),
        money(summary.balance)
    ));
    out
}

fn transaction_line(tx: &Transaction) -> String {
    format!(
        "   {} │ {:25} │ {:13} │ {:>11} │ {}",
        tx.date,
        truncate(&tx.description, 25),
        tx.category.as_str(),
        format!("{:+.2}", tx.amount),
        tx.id
    )
}

pub fn render_nudges(nudges: &[Nudge]) -> String {
    let mut out = String::from("💡 Nudges\n");
    for nudge in nudges {
        out.push_str(&format!("   • {}\n", nudge));
    }
    out
}

pub fn render_trends(trends: &TrendProjection) -> String {
    let mut out = String::from("📈 Projected Monthly Spend\n");

    if trends.is_empty() {
        out.push_str("   No expense data yet.\n");
        return out;
    }

    out.push_str(&format!("   {:15} │ {:>10}\n", "Category", "Amount"));
    out.push_str("   ────────────────┼───────────\n");
    for (category, amount) in trends {
        out.push_str(&format!("   {:15} │ {:>10}\n", category.as_str(), money(*amount)));
    }
    out
}

pub fn render_what_if(projection: &WhatIfProjection) -> String {
    format!(
        "🔮 What-If Savings ({} months)\n   \
         Based on: {}\n   \
         Income: {}   Expenses: {}   Net: {}\n   \
         Extra saving: {}/month\n   \
         Projected savings: {}\n",
        projection.months,
        projection.month,
        money(projection.income),
        money(projection.expenses),
        money(projection.monthly_net),
        money(projection.extra_saving),
        money(projection.projected_savings)
    )
}

pub fn cmd_list(session: &Session, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(session.transactions())?);
    } else {
        print!("{}", render_transactions(session));
    }
    Ok(())
}

pub fn cmd_nudges(session: &Session, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(session.nudges())?);
    } else {
        print!("{}", render_nudges(session.nudges()));
    }
    Ok(())
}

pub fn cmd_trends(session: &Session, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(session.trends())?);
    } else {
        print!("{}", render_trends(session.trends()));
    }
    Ok(())
}

pub fn cmd_what_if(session: &mut Session, amount: &str, json: bool) -> Result<()> {
    let projection = session.run_what_if_text(amount)?;
    if json {
        println!("{}", serde_json::to_string_pretty(projection)?);
    } else {
        print!("{}", render_what_if(projection));
    }
    Ok(())
}

pub fn cmd_categories(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(Category::all())?);
    } else {
        for category in Category::all() {
            println!("{}", category);
        }
    }
    Ok(())
}
