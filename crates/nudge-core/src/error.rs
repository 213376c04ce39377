//! Error types for Nudge

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Description is required")]
    MissingDescription,

    #[error("Category is required")]
    MissingCategory,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid extra saving: {0}")]
    InvalidSaving(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid transaction id: {0}")]
    InvalidTransactionId(String),

    #[error("Duplicate transaction id: {0}")]
    DuplicateTransaction(String),

    #[error("Import error: {0}")]
    Import(String),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error is a rejection of user input (as opposed to a
    /// failure reading fixtures or config)
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::MissingDescription
                | Error::MissingCategory
                | Error::InvalidAmount(_)
                | Error::InvalidSaving(_)
                | Error::UnknownCategory(_)
                | Error::InvalidTransactionId(_)
                | Error::DuplicateTransaction(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
