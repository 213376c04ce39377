//! Interactive session
//!
//! Reads one command per line. Nudges and trends are reprinted after every
//! successful add or delete; rejected input is reported and the session
//! carries on unchanged.

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Result};
use nudge_core::{Category, NewTransaction, Session, TransactionId};

use super::{render_nudges, render_transactions, render_trends, render_what_if};

const HELP: &str = "\
Commands:
  add <amount> <category> <description...>   e.g. add -12.50 dining_out Lunch
  delete <id or id prefix>
  list
  nudges
  trends
  what-if <amount>
  categories
  help
  quit
";

/// What the shell should do after a line
#[derive(Debug, PartialEq, Eq)]
pub enum ShellControl {
    Continue,
    Quit,
}

pub fn cmd_shell(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_shell(session, stdin.lock(), stdout.lock())
}

/// Drive a session from line-oriented input
pub fn run_shell<R: BufRead, W: Write>(session: &mut Session, input: R, mut output: W) -> Result<()> {
    writeln!(
        output,
        "Nudge session for {}. Type 'help' for commands.",
        session.today().format("%B %Y")
    )?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match execute_line(session, &line) {
            Ok((text, control)) => {
                write!(output, "{}", text)?;
                if control == ShellControl::Quit {
                    return Ok(());
                }
            }
            Err(e) => writeln!(output, "❌ {}", e)?,
        }
        write!(output, "> ")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}

/// Execute one shell line, returning the text to print
pub fn execute_line(session: &mut Session, line: &str) -> Result<(String, ShellControl)> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok((String::new(), ShellControl::Continue));
    };
    let args: Vec<&str> = words.collect();

    let text = match command.to_lowercase().as_str() {
        "add" => {
            let new = parse_add(&args)?;
            let tx = session.add_transaction(new)?;
            format!(
                "✅ Added {} ({})\n{}{}",
                tx.description,
                tx.id,
                render_nudges(session.nudges()),
                render_trends(session.trends())
            )
        }
        "delete" | "rm" => {
            let token = args
                .first()
                .ok_or_else(|| anyhow!("Usage: delete <id>"))?;
            let deleted = match resolve_id(session, token)? {
                Some(id) => session.delete_transaction(&id),
                None => None,
            };
            match deleted {
                Some(tx) => format!(
                    "🗑️  Deleted {}\n{}{}",
                    tx.description,
                    render_nudges(session.nudges()),
                    render_trends(session.trends())
                ),
                None => format!("No transaction matches '{}'\n", token),
            }
        }
        "list" | "ls" => render_transactions(session),
        "nudges" => render_nudges(session.nudges()),
        "trends" => render_trends(session.trends()),
        "what-if" | "whatif" => {
            let amount = args.first().copied().unwrap_or("");
            render_what_if(session.run_what_if_text(amount)?)
        }
        "categories" => Category::all()
            .iter()
            .map(|c| format!("{}\n", c))
            .collect(),
        "help" | "?" => HELP.to_string(),
        "quit" | "exit" | "q" => return Ok((String::new(), ShellControl::Quit)),
        other => bail!("Unknown command: {}. Type 'help' for commands.", other),
    };

    Ok((text, ShellControl::Continue))
}

/// Parse `add <amount> <category> <description...>`
///
/// A missing or unparseable amount becomes a missing amount so the core
/// validation reports it.
fn parse_add(args: &[&str]) -> Result<NewTransaction> {
    let amount = args.first().and_then(|a| a.parse::<f64>().ok());
    let category = match args.get(1) {
        Some(raw) => Some(raw.parse::<Category>()?),
        None => None,
    };
    let description = args.get(2..).map(|rest| rest.join(" ")).unwrap_or_default();

    Ok(NewTransaction {
        description,
        amount,
        category,
    })
}

/// Resolve a full id or a unique id prefix; `None` when nothing matches
fn resolve_id(session: &Session, token: &str) -> Result<Option<TransactionId>> {
    if let Ok(id) = token.parse::<TransactionId>() {
        return Ok(Some(id));
    }

    let token = token.to_lowercase();
    let matches: Vec<TransactionId> = session
        .transactions()
        .iter()
        .map(|t| t.id)
        .filter(|id| id.to_string().starts_with(&token))
        .collect();

    match matches.as_slice() {
        [id] => Ok(Some(*id)),
        [] => Ok(None),
        _ => bail!("'{}' matches {} transactions; use more characters", token, matches.len()),
    }
}
