//! In-memory transaction ledger
//!
//! The single owner of a session's transactions. Insertion order is kept for
//! display; the insight computations borrow the list as a slice and never
//! depend on its order.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::models::{LedgerSummary, NewTransaction, Transaction, TransactionId};

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from existing transactions, rejecting duplicate ids
    pub fn from_transactions(transactions: Vec<Transaction>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(transactions.len());
        for tx in &transactions {
            if !seen.insert(tx.id) {
                return Err(Error::DuplicateTransaction(tx.id.to_string()));
            }
        }
        Ok(Self { transactions })
    }

    /// Record a transaction dated today (local time)
    pub fn add_transaction(&mut self, new: NewTransaction) -> Result<Transaction> {
        self.add_transaction_on(new, chrono::Local::now().date_naive())
    }

    /// Record a transaction with an explicit creation date
    ///
    /// On rejection the ledger is left untouched.
    pub fn add_transaction_on(&mut self, new: NewTransaction, date: NaiveDate) -> Result<Transaction> {
        let tx = match Transaction::create(new, date) {
            Ok(tx) => tx,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected transaction");
                return Err(e);
            }
        };

        tracing::debug!(
            id = %tx.id,
            amount = tx.amount,
            category = tx.category.as_str(),
            "Added transaction"
        );
        self.transactions.push(tx.clone());
        Ok(tx)
    }

    /// Remove a transaction by id
    ///
    /// Unknown ids are a no-op and return `None`.
    pub fn delete_transaction(&mut self, id: &TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|t| t.id == *id)?;
        let removed = self.transactions.remove(index);
        tracing::debug!(id = %removed.id, "Deleted transaction");
        Some(removed)
    }

    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == *id)
    }

    /// Transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary::of(&self.transactions)
    }
}
