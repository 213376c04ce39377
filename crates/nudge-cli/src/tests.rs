//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;

use chrono::NaiveDate;
use nudge_core::{Category, NewTransaction, NudgeKind, Session};

use crate::commands::{self, execute_line, money, run_shell, truncate, ShellControl};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, 15).unwrap()
}

fn setup_session() -> Session {
    Session::default().with_reference_date(today())
}

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

const FIXTURE: &str = "Date,Description,Amount,Category
2026-04-01,Paycheck,2000,Salary
2026-04-03,Bistro,-150,Dining Out
2026-04-04,Bus,-30,Transport
";

// ========== Session Setup Tests ==========

#[test]
fn test_open_session_from_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "history.csv", FIXTURE);

    let session = commands::open_session(Some(&path), Some("2026-04-15"), None).unwrap();
    assert_eq!(session.transactions().len(), 3);
    assert_eq!(session.today(), today());

    let kinds: Vec<NudgeKind> = session.nudges().iter().map(|n| n.kind).collect();
    assert_eq!(kinds, vec![NudgeKind::DiningOut, NudgeKind::HealthyRatio]);
}

#[test]
fn test_open_session_with_config() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(&dir, "history.csv", FIXTURE);
    let config = write_fixture(&dir, "insights.toml", "[nudges]\ndining_out_limit = 1000.0\n");

    let session =
        commands::open_session(Some(&fixture), Some("2026-04-15"), Some(&config)).unwrap();
    let kinds: Vec<NudgeKind> = session.nudges().iter().map(|n| n.kind).collect();
    assert_eq!(kinds, vec![NudgeKind::HealthyRatio]);
}

#[test]
fn test_open_session_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.csv");
    assert!(commands::open_session(Some(&missing), None, None).is_err());
    assert!(commands::parse_reference_date("15/04/2026").is_err());

    let bad = write_fixture(&dir, "bad.csv", "Date,Description,Amount,Category\n2026-04-01,Oops,0,Other\n");
    let Err(err) = commands::open_session(Some(&bad), None, None) else {
        panic!("fixture with a zero amount was accepted");
    };
    assert!(err.to_string().contains("Failed to load transactions"));
    assert!(format!("{:#}", err).contains("Line 2"));
}

// ========== Report Command Tests ==========

#[test]
fn test_report_commands() {
    let mut session = setup_session();
    assert!(commands::cmd_list(&session, false).is_ok());
    assert!(commands::cmd_nudges(&session, true).is_ok());
    assert!(commands::cmd_trends(&session, false).is_ok());
    assert!(commands::cmd_categories(false).is_ok());
    assert!(commands::cmd_what_if(&mut session, "50", false).is_ok());
    assert!(commands::cmd_what_if(&mut session, "0", false).is_err());
    assert!(session.what_if().is_none());
}

#[test]
fn test_render_transactions() {
    let mut session = setup_session();
    let empty = commands::render_transactions(&session);
    assert!(empty.starts_with("📒 Transactions (0)\n"));
    assert!(empty.contains("No transactions yet."));

    session
        .add_transaction(NewTransaction::new("Paycheck", 500.0, Category::Salary))
        .unwrap();
    session
        .add_transaction(NewTransaction::new("Bistro", -42.0, Category::DiningOut))
        .unwrap();
    let text = commands::render_transactions(&session);
    assert!(text.contains("Bistro"));
    assert!(text.contains("-42.00"));
    assert!(text.ends_with("Income: $500.00   Expenses: $42.00   Balance: $458.00\n"));
}

#[test]
fn test_render_trends() {
    let mut session = setup_session();
    assert!(commands::render_trends(session.trends()).contains("No expense data yet"));

    session
        .add_transaction(NewTransaction::new("Power", -75.5, Category::Utilities))
        .unwrap();
    let text = commands::render_trends(session.trends());
    assert!(text.contains("Utilities"));
    assert!(text.contains("$75.50"));
}

#[test]
fn test_render_what_if() {
    let mut session = setup_session();
    session
        .add_transaction(NewTransaction::new("Pay", 1000.0, Category::Salary))
        .unwrap();
    session
        .add_transaction(NewTransaction::new("Rent", -800.0, Category::Rent))
        .unwrap();
    let text = commands::render_what_if(session.run_what_if(50.0).unwrap());
    assert!(text.contains("6 months"));
    assert!(text.contains("Projected savings: $1500.00"));
    assert!(text.contains("2026-04"));
}

// ========== Shell Tests ==========

#[test]
fn test_shell_add_and_delete() {
    let mut session = setup_session();

    let (text, control) = execute_line(&mut session, "add 2000 salary Paycheck").unwrap();
    assert_eq!(control, ShellControl::Continue);
    assert!(text.contains("Added Paycheck"));

    execute_line(&mut session, "add -150 dining_out Dinner with friends").unwrap();
    let (text, _) = execute_line(&mut session, "add -30 Transport Bus").unwrap();
    assert!(text.contains("Dining out is adding up"));
    assert_eq!(session.transactions()[1].description, "Dinner with friends");
    assert_eq!(session.transactions()[1].category, Category::DiningOut);

    let id = session.transactions()[2].id.to_string();
    let (text, _) = execute_line(&mut session, &format!("delete {}", &id[..8])).unwrap();
    assert!(text.contains("Deleted Bus"));
    assert_eq!(session.transactions().len(), 2);
}

#[test]
fn test_shell_rejections_leave_state_unchanged() {
    let mut session = setup_session();
    execute_line(&mut session, "add -20 groceries Market").unwrap();

    assert!(execute_line(&mut session, "add -20 groceries").is_err());
    assert!(execute_line(&mut session, "add abc groceries Market").is_err());
    assert!(execute_line(&mut session, "add 0 groceries Market").is_err());
    assert!(execute_line(&mut session, "add -5 travel Flight").is_err());
    assert!(execute_line(&mut session, "frobnicate").is_err());
    assert_eq!(session.transactions().len(), 1);
}

#[test]
fn test_shell_delete_unknown_id_is_noop() {
    let mut session = setup_session();
    execute_line(&mut session, "add -20 groceries Market").unwrap();

    let (text, control) = execute_line(&mut session, "delete zzzzzzzz").unwrap();
    assert_eq!(control, ShellControl::Continue);
    assert!(text.contains("No transaction matches 'zzzzzzzz'"));

    let unknown = nudge_core::TransactionId::new().to_string();
    let (text, _) = execute_line(&mut session, &format!("delete {}", unknown)).unwrap();
    assert!(text.contains("No transaction matches"));

    assert!(execute_line(&mut session, "delete").is_err());
    assert_eq!(session.transactions().len(), 1);
}

#[test]
fn test_shell_what_if_clears_on_rejection() {
    let mut session = setup_session();
    execute_line(&mut session, "add 500 salary Pay").unwrap();

    let (text, _) = execute_line(&mut session, "what-if 25").unwrap();
    assert!(text.contains("Projected savings: $3150.00"));
    assert!(session.what_if().is_some());

    assert!(execute_line(&mut session, "what-if -5").is_err());
    assert!(session.what_if().is_none());
}

#[test]
fn test_run_shell_transcript() {
    let mut session = setup_session();
    let input = b"add -12.5 dining_out Lunch\nnudges\nbogus\nquit\nadd -1 other Never\n";
    let mut output = Vec::new();

    run_shell(&mut session, &input[..], &mut output).unwrap();

    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("April 2026"));
    assert!(transcript.contains("Added Lunch"));
    assert!(transcript.contains("Add at least 3 transactions"));
    assert!(transcript.contains("❌ Unknown command: bogus"));
    // Nothing after quit runs
    assert_eq!(session.transactions().len(), 1);
}

// ========== Helper Tests ==========

#[test]
fn test_money() {
    assert_eq!(money(12.5), "$12.50");
    assert_eq!(money(-3.0), "-$3.00");
    assert_eq!(money(0.0), "$0.00");
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a much longer description", 10), "a much ...");
    assert_eq!(truncate("café crème brûlée", 8), "café ...");
}
