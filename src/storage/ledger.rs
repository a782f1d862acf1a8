//! Ledger repository
//!
//! Append-only access to the `ledger` table. Nothing here updates or deletes
//! rows; out-of-band edits are the user's business and are read as-is.

use chrono::{Local, NaiveDateTime};
use rusqlite::{params, Connection, Row};
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::money::MAX_SIGNIFICANT_DIGITS;
use crate::models::{LedgerEntry, Money, MonthPeriod};

/// How many entries the balance view lists
pub const RECENT_TRANSACTIONS_LIMIT: usize = 30;

/// Repository for ledger entries
pub struct LedgerRepository<'a> {
    connection: &'a Connection,
}

impl<'a> LedgerRepository<'a> {
    pub(crate) fn new(connection: &'a Connection) -> Self {
        Self { connection }
    }

    /// Append an entry stamped with the current local time
    pub fn insert_entry(
        &self,
        description: &str,
        amount: Money,
        is_auto_income: bool,
    ) -> LedgerResult<()> {
        self.insert_entry_at(description, amount, is_auto_income, Local::now().naive_local())
    }

    /// Append an entry with an explicit creation time
    ///
    /// # Errors
    ///
    /// Refuses amounts with more than [`MAX_SIGNIFICANT_DIGITS`] significant
    /// digits, which the `DECIMAL` column could not hand back exactly.
    pub fn insert_entry_at(
        &self,
        description: &str,
        amount: Money,
        is_auto_income: bool,
        created_at: NaiveDateTime,
    ) -> LedgerResult<()> {
        if !amount.is_storable() {
            return Err(LedgerError::Storage(format!(
                "Amount {} has more than {} significant digits",
                amount.to_exact_string(),
                MAX_SIGNIFICANT_DIGITS
            )));
        }

        self.connection.execute(
            "INSERT INTO ledger (description, amount, auto_income, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![description, amount, is_auto_income, created_at],
        )?;
        debug!(description, amount = %amount, is_auto_income, "Inserted ledger entry");
        Ok(())
    }

    /// Sum of all amounts, rounded half-up to cents (zero for an empty ledger)
    pub fn balance(&self) -> LedgerResult<Money> {
        let mut stmt = self.connection.prepare("SELECT amount FROM ledger")?;
        let amounts = stmt
            .query_map([], |row| row.get::<_, Money>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        let total = amounts
            .into_iter()
            .try_fold(Money::zero(), Money::checked_add)
            .ok_or_else(|| LedgerError::Storage("Ledger balance is out of range".to_string()))?;
        Ok(total.rounded())
    }

    /// Up to `limit` entries, newest first
    pub fn recent_transactions(&self, limit: usize) -> LedgerResult<Vec<LedgerEntry>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut stmt = self.connection.prepare(
            "SELECT description, amount, auto_income, created_at, modified_at
             FROM ledger
             ORDER BY created_at DESC, rowid DESC
             LIMIT ?1",
        )?;
        let entries = stmt
            .query_map(params![limit], entry_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    /// Whether the auto-income for `period` has already been booked
    ///
    /// Matches auto-income rows whose description ends in ` MM/YYYY`.
    pub fn has_auto_income_for_month(&self, period: MonthPeriod) -> LedgerResult<bool> {
        let pattern = format!("% {}", period);
        let exists = self.connection.query_row(
            "SELECT EXISTS(
                 SELECT 1 FROM ledger
                 WHERE auto_income = 1 AND description LIKE ?1
             )",
            params![pattern],
            |row| row.get::<_, bool>(0),
        )?;
        Ok(exists)
    }

    /// Month of the oldest entry, `None` for an empty ledger
    pub fn earliest_entry_period(&self) -> LedgerResult<Option<MonthPeriod>> {
        let earliest = self
            .connection
            .query_row("SELECT MIN(created_at) FROM ledger", [], |row| {
                row.get::<_, Option<NaiveDateTime>>(0)
            })?;
        Ok(earliest.map(|created_at| MonthPeriod::from_date(created_at.date())))
    }

    /// Number of entries in the ledger
    pub fn count(&self) -> LedgerResult<usize> {
        let count = self
            .connection
            .query_row("SELECT COUNT(*) FROM ledger", [], |row| row.get::<_, i64>(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<LedgerEntry> {
    Ok(LedgerEntry {
        description: row.get(0)?,
        amount: row.get(1)?,
        is_auto_income: row.get(2)?,
        created_at: row.get(3)?,
        modified_at: row.get(4)?,
    })
}
