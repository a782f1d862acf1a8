//! Income service
//!
//! Books the configured income once per calendar month. On every start the
//! service walks backwards from the current month until it finds a month that
//! already has its auto-income, then books the months it passed, oldest first.
//!
//! The walk assumes auto-income history is contiguous: a month removed out of
//! band behind a booked month is never refilled. It never goes further back
//! than the month of the oldest ledger entry, so it also terminates when no
//! auto-income has been booked at all.

use tracing::{debug, info};

use crate::config::settings::Settings;
use crate::error::LedgerResult;
use crate::models::{auto_income_description, MonthPeriod};
use crate::storage::Storage;

/// Service for monthly auto-income
pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    /// Create a new income service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Book every missing auto-income up to and including the current month
    pub fn insert_all_due_incomes(&self) -> LedgerResult<Vec<MonthPeriod>> {
        self.insert_due_incomes_until(MonthPeriod::current())
    }

    /// Book every missing auto-income up to and including `current`
    ///
    /// Returns the booked months, oldest first. Each month is committed on its
    /// own; if a later insert fails, earlier months stay booked and are
    /// skipped on the next run.
    pub fn insert_due_incomes_until(&self, current: MonthPeriod) -> LedgerResult<Vec<MonthPeriod>> {
        let due = self.due_months(current)?;
        if due.is_empty() {
            debug!(month = %current, "Auto-income is up to date");
            return Ok(due);
        }

        let settings = Settings::load(self.storage)?;
        for period in &due {
            self.book(*period, &settings)?;
            info!(month = %period, amount = %settings.income_amount, "Booked missed auto-income");
        }

        Ok(due)
    }

    /// Months lacking their auto-income, oldest first
    pub fn due_months(&self, current: MonthPeriod) -> LedgerResult<Vec<MonthPeriod>> {
        let ledger = self.storage.ledger();
        let floor = ledger
            .earliest_entry_period()?
            .map_or(current, |earliest| earliest.min(current));

        let mut missing = Vec::new();
        let mut cursor = current;
        while cursor >= floor && !ledger.has_auto_income_for_month(cursor)? {
            missing.push(cursor);
            cursor = cursor.prev();
        }

        missing.reverse();
        Ok(missing)
    }

    /// Book the auto-income for a single month with the configured settings
    pub fn insert_auto_income(&self, period: MonthPeriod) -> LedgerResult<()> {
        let settings = Settings::load(self.storage)?;
        self.book(period, &settings)
    }

    fn book(&self, period: MonthPeriod, settings: &Settings) -> LedgerResult<()> {
        let description = auto_income_description(&settings.income_description, period);
        self.storage
            .ledger()
            .insert_entry(&description, settings.income_amount, true)
    }
}
