//! Storage layer for Virtuallet
//!
//! One SQLite file holds the append-only `ledger` table and the small
//! `configuration` key-value table. `Storage` owns the single connection for
//! the lifetime of a session and hands out repositories borrowing it.

pub mod configuration;
pub mod init;
pub mod ledger;
pub mod types;

pub use configuration::ConfigRepository;
pub use init::initialize_storage;
pub use ledger::{LedgerRepository, RECENT_TRANSACTIONS_LIMIT};

use rusqlite::Connection;
use tracing::{debug, info};

use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: LedgerPaths,
    connection: Connection,
}

impl Storage {
    /// Open (creating if necessary) the database file
    ///
    /// Every statement runs in autocommit mode, so each insert is durable
    /// before the call returns.
    pub fn open(paths: &LedgerPaths) -> LedgerResult<Self> {
        let path = paths.database_file();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                LedgerError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let connection = Connection::open(path).map_err(|e| {
            LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;
        info!(path = %path.display(), "Opened ledger database");

        Ok(Self {
            paths: paths.clone(),
            connection,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Access the ledger table
    pub fn ledger(&self) -> LedgerRepository<'_> {
        LedgerRepository::new(&self.connection)
    }

    /// Access the configuration table
    pub fn configuration(&self) -> ConfigRepository<'_> {
        ConfigRepository::new(&self.connection)
    }

    pub(crate) fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Close the connection, reporting any error SQLite raises while doing so
    ///
    /// Dropping a `Storage` also closes the connection, silently.
    pub fn close(self) -> LedgerResult<()> {
        let path = self.paths.database_file().display().to_string();
        self.connection
            .close()
            .map_err(|(_, e)| LedgerError::Storage(format!("Failed to close {}: {}", path, e)))?;
        debug!(path = %path, "Closed ledger database");
        Ok(())
    }
}
