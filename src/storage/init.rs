//! Storage initialization
//!
//! Creates the schema on first run.

use tracing::info;

use crate::error::LedgerResult;

use super::Storage;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS ledger (
        description TEXT,
        amount DECIMAL NOT NULL,
        auto_income BOOLEAN NOT NULL,
        created_at TIMESTAMP NOT NULL,
        modified_at TIMESTAMP NULL
    );
    CREATE TABLE IF NOT EXISTS configuration (
        k TEXT NOT NULL,
        v TEXT NOT NULL
    );
";

/// Initialize storage for a fresh installation
///
/// Creates the `ledger` and `configuration` tables. Existing tables and
/// their rows are left untouched.
pub fn initialize_storage(storage: &Storage) -> LedgerResult<()> {
    storage.connection().execute_batch(SCHEMA)?;
    info!(
        path = %storage.paths().database_file().display(),
        "Initialized ledger schema"
    );
    Ok(())
}
