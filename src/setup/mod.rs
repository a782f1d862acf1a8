//! First-run setup wizard
//!
//! Runs once, right after the database file has been created, to collect
//! the monthly income and overdraft settings.

pub mod wizard;

pub use wizard::SetupWizard;
