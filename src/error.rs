//! Custom error types for Virtuallet
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Reasons a proposed income or expense is refused before it reaches the ledger
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Amount is zero or could not be parsed
    #[error("amount is zero or invalid")]
    ZeroOrInvalidAmount,

    /// Amount was entered with a negative sign
    #[error("amount must be positive")]
    NegativeAmount,

    /// Expense would exceed the configured overdraft
    #[error("sorry, too expensive")]
    TooExpensive,
}

/// The main error type for Virtuallet operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File and terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Database errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// First-run setup errors
    #[error("Setup error: {0}")]
    Setup(String),

    /// A transaction was refused by validation
    #[error("{0}")]
    Rejected(#[from] Rejection),
}

impl LedgerError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// The validation outcome, if this is a validation error
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected(rejection) => Some(*rejection),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<rusqlite::Error> for LedgerError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for Virtuallet operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("bad amount".into());
        assert_eq!(err.to_string(), "Configuration error: bad amount");
    }

    #[test]
    fn test_rejection_is_validation() {
        let err: LedgerError = Rejection::TooExpensive.into();
        assert!(err.is_validation());
        assert_eq!(err.rejection(), Some(Rejection::TooExpensive));
        assert_eq!(err.to_string(), "sorry, too expensive");
    }

    #[test]
    fn test_storage_error_is_not_validation() {
        let err = LedgerError::Storage("disk full".into());
        assert!(!err.is_validation());
        assert!(err.rejection().is_none());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }

    #[test]
    fn test_from_sqlite_error() {
        let sql_err = rusqlite::Error::QueryReturnedNoRows;
        let ledger_err: LedgerError = sql_err.into();
        assert!(matches!(ledger_err, LedgerError::Storage(_)));
    }
}
