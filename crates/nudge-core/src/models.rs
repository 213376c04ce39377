//! Data models for Nudge

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Spending/income category for a transaction
///
/// The set is fixed. Nothing ties income-like categories to positive
/// amounts or expense-like ones to negative amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Groceries,
    Transport,
    #[serde(rename = "Dining Out", alias = "dining_out")]
    DiningOut,
    Entertainment,
    Utilities,
    Salary,
    Rent,
    Other,
}

impl Category {
    /// Display label for the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Transport => "Transport",
            Self::DiningOut => "Dining Out",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Salary => "Salary",
            Self::Rent => "Rent",
            Self::Other => "Other",
        }
    }

    /// All categories in display order
    pub fn all() -> &'static [Category] {
        &[
            Self::Groceries,
            Self::Transport,
            Self::DiningOut,
            Self::Entertainment,
            Self::Utilities,
            Self::Salary,
            Self::Rent,
            Self::Other,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "groceries" => Ok(Self::Groceries),
            "transport" => Ok(Self::Transport),
            "dining out" | "diningout" => Ok(Self::DiningOut),
            "entertainment" => Ok(Self::Entertainment),
            "utilities" => Ok(Self::Utilities),
            "salary" => Ok(Self::Salary),
            "rent" => Ok(Self::Rent),
            "other" => Ok(Self::Other),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

/// Opaque transaction identifier, generated when a transaction is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for TransactionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| Error::InvalidTransactionId(s.to_string()))
    }
}

/// Calendar month key (year + month) used to bucket transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Whether the date falls in this month of this year
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// A recorded income or expense
///
/// Transactions are values: created on submission, removed on deletion,
/// never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    /// Negative = expense, positive = income
    pub amount: f64,
    pub category: Category,
    /// Creation date; not user-editable
    pub date: NaiveDate,
}

impl Transaction {
    /// Validate the input and build a transaction dated `date` with a fresh id
    pub fn create(new: NewTransaction, date: NaiveDate) -> Result<Self> {
        Self::with_id(TransactionId::new(), new, date)
    }

    /// Validate the input and build a transaction with a known id
    pub fn with_id(id: TransactionId, new: NewTransaction, date: NaiveDate) -> Result<Self> {
        let (description, amount, category) = new.validate()?;
        Ok(Self {
            id,
            description,
            amount,
            category,
            date,
        })
    }

    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// Unsigned amount, used wherever spending is summed
    pub fn magnitude(&self) -> f64 {
        self.amount.abs()
    }

    pub fn month(&self) -> YearMonth {
        YearMonth::of(self.date)
    }
}

/// Form input for a new transaction (before validation)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Option<f64>,
    pub category: Option<Category>,
}

impl NewTransaction {
    pub fn new(description: impl Into<String>, amount: f64, category: Category) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            category: Some(category),
        }
    }

    /// Required-field checks: non-blank description, a category, and a
    /// finite non-zero amount
    fn validate(self) -> Result<(String, f64, Category)> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(Error::MissingDescription);
        }
        let category = self.category.ok_or(Error::MissingCategory)?;
        let amount = match self.amount {
            None => return Err(Error::InvalidAmount("amount is required".into())),
            Some(a) if !a.is_finite() => {
                return Err(Error::InvalidAmount(format!("{} is not a number", a)))
            }
            Some(a) if a == 0.0 => {
                return Err(Error::InvalidAmount("amount must not be zero".into()))
            }
            Some(a) => a,
        };
        Ok((description.to_string(), amount, category))
    }
}

/// All-time totals over a transaction list
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub income: f64,
    /// Sum of expense magnitudes
    pub expenses: f64,
    pub balance: f64,
    pub count: usize,
}

impl LedgerSummary {
    pub fn of(transactions: &[Transaction]) -> Self {
        let income: f64 = transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum();
        let expenses: f64 = transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(Transaction::magnitude)
            .sum();
        Self {
            income,
            expenses,
            balance: income - expenses,
            count: transactions.len(),
        }
    }
}
