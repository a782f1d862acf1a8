//! Path management for Virtuallet
//!
//! The whole wallet lives in one SQLite file.
//!
//! ## Path Resolution Order
//!
//! 1. An explicit path (the `--database` flag)
//! 2. `VIRTUALLET_DB` environment variable (if set)
//! 3. `db_virtuallet.db` in the working directory

use std::path::{Path, PathBuf};

/// Environment variable overriding the database location
pub const DATABASE_ENV_VAR: &str = "VIRTUALLET_DB";

/// Default database file, relative to the working directory
pub const DEFAULT_DATABASE_FILE: &str = "db_virtuallet.db";

/// Manages the paths used by Virtuallet
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    database_file: PathBuf,
}

impl LedgerPaths {
    /// Resolve the database path from the environment or the default
    pub fn new() -> Self {
        let database_file = std::env::var_os(DATABASE_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_FILE));

        Self { database_file }
    }

    /// Use an explicit database file (command line override, tests)
    pub fn with_database_file(database_file: impl Into<PathBuf>) -> Self {
        Self {
            database_file: database_file.into(),
        }
    }

    /// Get the path to the database file
    pub fn database_file(&self) -> &Path {
        &self.database_file
    }

    /// Check if Virtuallet has been initialized (database file exists)
    ///
    /// Must be asked before opening the database, since opening creates the file.
    pub fn is_initialized(&self) -> bool {
        self.database_file.exists()
    }
}

impl Default for LedgerPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_database_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wallet.db");
        let paths = LedgerPaths::with_database_file(&path);

        assert_eq!(paths.database_file(), path.as_path());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_initialized_when_file_exists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wallet.db");
        std::fs::write(&path, b"").unwrap();

        let paths = LedgerPaths::with_database_file(&path);
        assert!(paths.is_initialized());
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().join("from-env.db");

        std::env::set_var(DATABASE_ENV_VAR, &custom_path);
        let paths = LedgerPaths::new();
        std::env::remove_var(DATABASE_ENV_VAR);

        assert_eq!(paths.database_file(), custom_path.as_path());
    }
}
