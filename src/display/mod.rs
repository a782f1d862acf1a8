//! Display formatting for terminal output
//!
//! Provides the fixed texts of the interactive session and formatting of
//! ledger entries.

pub mod messages;
pub mod transaction;

pub use transaction::{format_balance_report, format_transaction_row};
