//! Ledger entry model
//!
//! Entries are append-only: the program inserts them and never edits or
//! deletes them. `modified_at` exists for edits made with external tools.

use chrono::NaiveDateTime;

use super::money::Money;
use super::period::MonthPeriod;

/// Whether a manual booking adds or removes money
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Apply the booking sign to a positive amount
    pub fn signed(&self, amount: Money) -> Money {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

/// A single row of the ledger
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    /// Free-text label; absent when the row was written without one
    pub description: Option<String>,

    /// Signed amount (positive for income, negative for expense)
    pub amount: Money,

    /// Created by the income scheduler rather than entered manually
    pub is_auto_income: bool,

    /// When the entry was inserted
    pub created_at: NaiveDateTime,

    /// When the entry was last edited out of band, if ever
    pub modified_at: Option<NaiveDateTime>,
}

impl LedgerEntry {
    /// Description for display, empty when absent
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Description given to the auto-income of `period`, e.g. `"salary 03/2025"`
pub fn auto_income_description(base: &str, period: MonthPeriod) -> String {
    format!("{} {}", base, period)
}
