//! Transaction fixture import (CSV and JSON)
//!
//! Seeds a session with previously recorded transactions. Every row goes
//! through the same required-field checks as a manually added transaction.
//!
//! CSV columns are matched by header name (case-insensitive):
//! `Date,Description,Amount,Category` plus an optional `Id`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Category, NewTransaction, Transaction, TransactionId};

/// Fixture file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    Csv,
    Json,
}

impl FixtureFormat {
    /// Pick the format from the file extension (anything but .json is CSV)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// Load transactions from a fixture file
pub fn load_file(path: &Path) -> Result<Vec<Transaction>> {
    let file = File::open(path)?;
    let transactions = match FixtureFormat::from_path(path) {
        FixtureFormat::Json => parse_json(file)?,
        FixtureFormat::Csv => parse_csv(file)?,
    };
    debug!(path = %path.display(), count = transactions.len(), "Loaded fixture");
    Ok(transactions)
}

/// Locate a column by header name
fn column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

fn required_column(headers: &StringRecord, name: &str) -> Result<usize> {
    column(headers, name).ok_or_else(|| Error::Import(format!("Missing column: {}", name)))
}

/// Column positions resolved from the CSV header
struct Columns {
    date: usize,
    description: usize,
    amount: usize,
    category: usize,
    id: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        Ok(Self {
            date: required_column(headers, "Date")?,
            description: required_column(headers, "Description")?,
            amount: required_column(headers, "Amount")?,
            category: required_column(headers, "Category")?,
            id: column(headers, "Id"),
        })
    }
}

/// Parse CSV fixture data
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns = Columns::from_headers(&headers)?;

    let mut transactions = Vec::new();

    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        // Header is line 1
        let line = index + 2;
        let tx = parse_row(&record, &columns)
            .map_err(|e| Error::Import(format!("Line {}: {}", line, e)))?;
        transactions.push(tx);
    }

    Ok(transactions)
}

fn parse_row(record: &StringRecord, columns: &Columns) -> Result<Transaction> {
    let field = |col: usize| record.get(col).unwrap_or("");

    let date = parse_date(field(columns.date))?;

    let amount = match field(columns.amount) {
        "" => None,
        raw => Some(parse_amount(raw)?),
    };

    let category = match field(columns.category) {
        "" => None,
        raw => Some(raw.parse::<Category>()?),
    };

    let id = match columns.id.map(field) {
        None | Some("") => TransactionId::new(),
        Some(raw) => raw.parse()?,
    };

    let new = NewTransaction {
        description: field(columns.description).to_string(),
        amount,
        category,
    };

    Transaction::with_id(id, new, date)
}

/// A JSON fixture record; `id` is generated when absent
#[derive(Debug, Deserialize)]
struct JsonRecord {
    #[serde(default)]
    id: Option<TransactionId>,
    date: NaiveDate,
    description: String,
    amount: Option<f64>,
    category: Option<Category>,
}

/// Parse a JSON array of transactions
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let records: Vec<JsonRecord> = serde_json::from_reader(reader)?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let new = NewTransaction {
                description: record.description,
                amount: record.amount,
                category: record.category,
            };
            Transaction::with_id(record.id.unwrap_or_default(), new, record.date)
                .map_err(|e| Error::Import(format!("Record {}: {}", index + 1, e)))
        })
        .collect()
}

/// Parse a date in ISO or US format
fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d", // 2024-01-15
        "%m/%d/%Y", // 01/15/2024
        "%m/%d/%y", // 01/15/24
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    Err(Error::Import(format!("Unable to parse date: {}", s)))
}

/// Parse an amount string, handling currency symbols and commas
fn parse_amount(s: &str) -> Result<f64> {
    let cleaned: String = s
        .trim()
        .replace(['$', ',', ' '], "")
        .replace('(', "-")
        .replace(')', "");

    cleaned
        .parse::<f64>()
        .map_err(|_| Error::Import(format!("Unable to parse amount: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("01/15/2024").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(
            parse_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$1,234.56").unwrap(), 1234.56);
        assert_eq!(parse_amount("-123.45").unwrap(), -123.45);
        assert_eq!(parse_amount("(100.00)").unwrap(), -100.00);
        assert!(parse_amount("ten").is_err());
    }

    #[test]
    fn test_parse_csv() {
        let csv = "Date,Description,Amount,Category
2026-01-03,Paycheck,\"$2,000.00\",Salary
01/05/2026,Tacos,-18.50,Dining Out
2026-01-07,Bus pass,(45.00),transport";

        let transactions = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[0].amount, 2000.0);
        assert_eq!(transactions[0].category, Category::Salary);
        assert_eq!(transactions[1].description, "Tacos");
        assert_eq!(transactions[1].category, Category::DiningOut);
        assert_eq!(
            transactions[1].date,
            NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
        );
        assert_eq!(transactions[2].amount, -45.0);
    }

    #[test]
    fn test_parse_csv_keeps_ids() {
        let id = TransactionId::new();
        let csv = format!(
            "Id,Date,Description,Amount,Category\n{},2026-01-03,Rent,-900,Rent",
            id
        );
        let transactions = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(transactions[0].id, id);
    }

    #[test]
    fn test_parse_csv_rejects_invalid_rows() {
        let zero = "Date,Description,Amount,Category\n2026-01-03,Nothing,0,Other";
        let err = parse_csv(zero.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Line 2"));

        let blank = "Date,Description,Amount,Category\n2026-01-03,,-5,Other";
        assert!(parse_csv(blank.as_bytes()).is_err());

        let unknown = "Date,Description,Amount,Category
2026-01-02,Rent,-900,Rent
2026-01-03,Flight,-300,Travel";
        let err = parse_csv(unknown.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Line 3"));
        assert!(err.to_string().contains("Travel"));

        let bad_date = "Date,Description,Amount,Category\nlater,Flight,-300,Other";
        assert!(parse_csv(bad_date.as_bytes())
            .unwrap_err()
            .to_string()
            .contains("Line 2"));

        let bad_amount = "Date,Description,Amount,Category\n2026-01-03,Flight,lots,Other";
        assert!(parse_csv(bad_amount.as_bytes())
            .unwrap_err()
            .to_string()
            .contains("Line 2"));

        let missing = "Date,Description,Amount\n2026-01-03,Flight,-300";
        assert!(matches!(
            parse_csv(missing.as_bytes()),
            Err(Error::Import(_))
        ));
    }

    #[test]
    fn test_parse_json() {
        let json = r#"[
            {"date": "2026-02-01", "description": "Salary", "amount": 3000, "category": "Salary"},
            {"date": "2026-02-02", "description": "Dinner", "amount": -80.5, "category": "Dining Out"}
        ]"#;
        let transactions = parse_json(json.as_bytes()).unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[1].category, Category::DiningOut);
        assert_ne!(transactions[0].id, transactions[1].id);
    }

    #[test]
    fn test_parse_json_rejects_missing_amount() {
        let json = r#"[{"date": "2026-02-01", "description": "Gift", "category": "Other"}]"#;
        let err = parse_json(json.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Record 1"));
    }

    #[test]
    fn test_load_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("fixture.json");
        std::fs::write(
            &json_path,
            r#"[{"date": "2026-02-01", "description": "Gym", "amount": -30, "category": "Other"}]"#,
        )
        .unwrap();
        assert_eq!(load_file(&json_path).unwrap().len(), 1);

        let csv_path = dir.path().join("fixture.csv");
        let mut file = File::create(&csv_path).unwrap();
        writeln!(file, "Date,Description,Amount,Category").unwrap();
        writeln!(file, "2026-02-01,Gym,-30,Other").unwrap();
        writeln!(file, "2026-02-02,Power,-60,Utilities").unwrap();
        drop(file);
        assert_eq!(load_file(&csv_path).unwrap().len(), 2);

        assert_eq!(FixtureFormat::from_path(Path::new("x.JSON")), FixtureFormat::Json);
        assert_eq!(FixtureFormat::from_path(Path::new("x.txt")), FixtureFormat::Csv);
    }
}
