//! Configuration repository
//!
//! Raw string access to the `configuration` key-value table. The typed view
//! lives in `config::settings`.

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::config::settings::ConfigKey;
use crate::error::LedgerResult;

/// Repository for configuration rows
pub struct ConfigRepository<'a> {
    connection: &'a Connection,
}

impl<'a> ConfigRepository<'a> {
    pub(crate) fn new(connection: &'a Connection) -> Self {
        Self { connection }
    }

    /// Stored value for `key`; the first row wins if the key was written twice
    pub fn get(&self, key: ConfigKey) -> LedgerResult<Option<String>> {
        let value = self
            .connection
            .query_row(
                "SELECT v FROM configuration WHERE k = ?1 ORDER BY rowid LIMIT 1",
                params![key.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Stored value for `key`, or its hard default
    pub fn get_or_default(&self, key: ConfigKey) -> LedgerResult<String> {
        Ok(self
            .get(key)?
            .unwrap_or_else(|| key.default_value().to_string()))
    }

    /// Store a value for `key`
    pub fn set(&self, key: ConfigKey, value: &str) -> LedgerResult<()> {
        self.connection.execute(
            "INSERT INTO configuration (k, v) VALUES (?1, ?2)",
            params![key.as_str(), value],
        )?;
        debug!(key = key.as_str(), value, "Stored configuration value");
        Ok(())
    }
}
