use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for parsing, registry, ledger, and storage layers.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Could not understand `{line}`. Please answer in format: Category Amount, for example: Transport -1000")]
    Parse { line: String },
    #[error("Category `{0}` does not exist. Specify a different name")]
    CategoryNotFound(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, LedgerError>;

impl From<rusqlite::Error> for LedgerError {
    fn from(err: rusqlite::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Config(err.to_string())
    }
}
