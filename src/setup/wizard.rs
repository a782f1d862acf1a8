//! Setup wizard orchestration
//!
//! Asks for the monthly income description, the monthly income amount and
//! the overdraft, stores them, and books the current month's auto-income.
//! Empty input or end of input keeps the default shown in brackets.

use std::io::{BufRead, Write};

use tracing::info;

use crate::cli::Console;
use crate::config::settings::{ConfigKey, Settings};
use crate::display::messages;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, MonthPeriod};
use crate::services::IncomeService;
use crate::storage::Storage;

/// The first-run setup wizard
pub struct SetupWizard<'a> {
    storage: &'a Storage,
}

impl<'a> SetupWizard<'a> {
    /// Create a new setup wizard
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Run the interactive setup wizard against a freshly initialized database
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Setup` if the database already holds settings.
    pub fn run<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> LedgerResult<Settings> {
        if self.storage.configuration().get(ConfigKey::IncomeDescription)?.is_some() {
            return Err(LedgerError::Setup("wallet is already configured".to_string()));
        }

        let income_description = prompt_text(
            console,
            messages::SETUP_DESCRIPTION,
            ConfigKey::IncomeDescription,
        )?;
        let income_amount = prompt_amount(console, messages::SETUP_INCOME, ConfigKey::IncomeAmount)?;
        let overdraft = prompt_amount(console, messages::SETUP_OVERDRAFT, ConfigKey::Overdraft)?;

        let settings = Settings {
            income_description,
            income_amount,
            overdraft,
        };
        settings.save(self.storage)?;

        let period = MonthPeriod::current();
        IncomeService::new(self.storage).insert_auto_income(period)?;
        info!(month = %period, "Setup complete");

        console.println(messages::SETUP_COMPLETE)?;
        Ok(settings)
    }
}

fn prompt_text<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
    key: ConfigKey,
) -> LedgerResult<String> {
    let default = key.default_value();
    let answer = console.prompt(&messages::setup_prompt(label, default))?;

    Ok(match answer {
        Some(text) if !text.is_empty() => text,
        _ => default.to_string(),
    })
}

fn prompt_amount<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
    key: ConfigKey,
) -> LedgerResult<Money> {
    let default = key.default_value();

    loop {
        let answer = match console.prompt(&messages::setup_prompt(label, default))? {
            Some(text) if !text.is_empty() => text,
            _ => default.to_string(),
        };

        match Money::parse(&answer) {
            Ok(amount) if !amount.is_negative() && amount.is_within_booking_limit() => {
                return Ok(amount)
            }
            _ => console.println(messages::SETUP_INVALID_AMOUNT)?,
        }
    }
}
