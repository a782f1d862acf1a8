//! User settings for Virtuallet
//!
//! Settings live in the `configuration` table of the wallet database, one row
//! per key. They are written once by the setup wizard and read thereafter;
//! missing keys fall back to hard defaults.

use std::fmt;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;
use crate::storage::Storage;

/// Keys stored in the configuration table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// Label of the monthly auto-income
    IncomeDescription,
    /// Amount of the monthly auto-income
    IncomeAmount,
    /// How far below zero expenses may take the balance
    Overdraft,
}

impl ConfigKey {
    /// Column value of `k` for this key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IncomeDescription => "income_description",
            Self::IncomeAmount => "income_amount",
            Self::Overdraft => "overdraft",
        }
    }

    /// Value used when the key is not stored
    pub fn default_value(&self) -> &'static str {
        match self {
            Self::IncomeDescription => "pocket money",
            Self::IncomeAmount => "100.00",
            Self::Overdraft => "200.00",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed view of the configuration table
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Label of the monthly auto-income
    pub income_description: String,

    /// Amount booked each month
    pub income_amount: Money,

    /// Negative balance allowance for expenses
    pub overdraft: Money,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            income_description: ConfigKey::IncomeDescription.default_value().to_string(),
            income_amount: Money::from_cents(10000),
            overdraft: Money::from_cents(20000),
        }
    }
}

impl Settings {
    /// Load settings from the database, using defaults for missing keys
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a stored amount does not parse.
    pub fn load(storage: &Storage) -> LedgerResult<Self> {
        let config = storage.configuration();

        Ok(Self {
            income_description: config.get_or_default(ConfigKey::IncomeDescription)?,
            income_amount: parse_amount(
                ConfigKey::IncomeAmount,
                &config.get_or_default(ConfigKey::IncomeAmount)?,
            )?,
            overdraft: load_overdraft(storage)?,
        })
    }

    /// Save settings to the database
    ///
    /// Intended for first-run setup only; keys are not overwritten later.
    pub fn save(&self, storage: &Storage) -> LedgerResult<()> {
        let config = storage.configuration();
        config.set(ConfigKey::IncomeDescription, &self.income_description)?;
        config.set(ConfigKey::IncomeAmount, &self.income_amount.value().to_string())?;
        config.set(ConfigKey::Overdraft, &self.overdraft.value().to_string())?;
        Ok(())
    }
}

/// Read only the configured overdraft
pub fn load_overdraft(storage: &Storage) -> LedgerResult<Money> {
    let raw = storage.configuration().get_or_default(ConfigKey::Overdraft)?;
    parse_amount(ConfigKey::Overdraft, &raw)
}

fn parse_amount(key: ConfigKey, raw: &str) -> LedgerResult<Money> {
    let amount = Money::parse(raw)
        .map_err(|e| LedgerError::Config(format!("Invalid value for '{}': {}", key, e)))?;

    if !amount.is_within_booking_limit() {
        return Err(LedgerError::Config(format!(
            "Value for '{}' is out of range: {}",
            key, raw
        )));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use crate::storage::init::initialize_storage;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_database_file(temp_dir.path().join("test.db"));
        let storage = Storage::open(&paths).unwrap();
        initialize_storage(&storage).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.income_description, "pocket money");
        assert_eq!(settings.income_amount.to_string(), "100.00");
        assert_eq!(settings.overdraft.to_string(), "200.00");
    }

    #[test]
    fn test_defaults_match_key_defaults() {
        let settings = Settings::default();
        assert_eq!(
            settings.income_amount,
            Money::parse(ConfigKey::IncomeAmount.default_value()).unwrap()
        );
        assert_eq!(
            settings.overdraft,
            Money::parse(ConfigKey::Overdraft.default_value()).unwrap()
        );
    }

    #[test]
    fn test_load_empty_table_uses_defaults() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::load(&storage).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let (_temp_dir, storage) = create_test_storage();

        let settings = Settings {
            income_description: "salary".to_string(),
            income_amount: Money::parse("1000").unwrap(),
            overdraft: Money::parse("50.25").unwrap(),
        };
        settings.save(&storage).unwrap();

        let loaded = Settings::load(&storage).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_overdraft_reads_its_own_key() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .configuration()
            .set(ConfigKey::IncomeAmount, "1000")
            .unwrap();
        storage.configuration().set(ConfigKey::Overdraft, "75").unwrap();

        assert_eq!(load_overdraft(&storage).unwrap(), Money::parse("75").unwrap());
    }

    #[test]
    fn test_invalid_stored_amount_is_config_error() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .configuration()
            .set(ConfigKey::Overdraft, "lots")
            .unwrap();

        let err = Settings::load(&storage).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }

    #[test]
    fn test_out_of_range_stored_amount_is_config_error() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .configuration()
            .set(ConfigKey::IncomeAmount, "50000000000000000000000000000")
            .unwrap();

        let err = Settings::load(&storage).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
