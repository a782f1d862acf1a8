//! Configuration module for Virtuallet
//!
//! This module provides configuration management including:
//! - Database path resolution
//! - Typed settings stored in the wallet database

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::{ConfigKey, Settings};
