//! Core data models for Virtuallet
//!
//! This module contains the data structures that represent the wallet
//! domain: monetary amounts, calendar months and ledger entries.

pub mod entry;
pub mod money;
pub mod period;

pub use entry::{auto_income_description, LedgerEntry, TransactionKind};
pub use money::{Money, MoneyParseError};
pub use period::MonthPeriod;
