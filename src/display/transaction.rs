//! Transaction display formatting
//!
//! Renders ledger entries as tab-separated rows: creation time, amount
//! rounded to cents, description.

use crate::models::{LedgerEntry, Money};
use crate::storage::RECENT_TRANSACTIONS_LIMIT;

use super::messages::current_balance;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a single entry for display
pub fn format_transaction_row(entry: &LedgerEntry) -> String {
    format!(
        "\t{}\t{}\t{}",
        entry.created_at.format(TIMESTAMP_FORMAT),
        entry.amount,
        entry.description()
    )
}

/// Format the balance followed by the most recent entries
pub fn format_balance_report(balance: Money, entries: &[LedgerEntry]) -> String {
    let heading = format!("last transactions (up to {})", RECENT_TRANSACTIONS_LIMIT);

    let mut output = current_balance(balance);
    output.push_str(&format!("\t{}\n", heading));
    output.push_str(&format!("\t{}\n", "-".repeat(heading.len())));

    for entry in entries {
        output.push_str(&format_transaction_row(entry));
        output.push('\n');
    }

    output.push('\n');
    output
}
