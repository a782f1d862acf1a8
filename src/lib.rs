//! Virtuallet - a virtual wallet in the terminal
//!
//! This library provides the core functionality of the Virtuallet ledger: an
//! append-only record of incomes and expenses in a single SQLite file, a
//! monthly auto-income that catches up on missed months, and an overdraft
//! limit that gates manual expenses.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Database location and the stored settings
//! - `error`: Custom error types
//! - `models`: Money, calendar months and ledger entries
//! - `storage`: SQLite storage layer
//! - `services`: Auto-income scheduling and booking validation
//! - `setup`: First-run setup wizard
//! - `cli`: Interactive session
//! - `display`: Terminal texts and formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use virtuallet::{cli::Console, config::LedgerPaths};
//!
//! let stdin = std::io::stdin();
//! let mut console = Console::new(stdin.lock(), std::io::stdout());
//! virtuallet::run(&LedgerPaths::new(), &mut console)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod setup;
pub mod storage;

use std::io::{BufRead, Write};

use tracing::info;

use crate::cli::{Console, Session};
use crate::config::LedgerPaths;
use crate::display::messages;
use crate::services::IncomeService;
use crate::setup::SetupWizard;
use crate::storage::{initialize_storage, Storage};

pub use error::{LedgerError, LedgerResult};

/// Run one interactive Virtuallet session
///
/// Creates and configures the database on first use, books every missed
/// monthly income, then hands control to the user until they quit.
pub fn run<R: BufRead, W: Write>(
    paths: &LedgerPaths,
    console: &mut Console<R, W>,
) -> LedgerResult<()> {
    console.print(messages::BANNER)?;

    let first_run = !paths.is_initialized();
    if first_run {
        console.print(messages::SETUP_PRE_DATABASE)?;
    }

    let storage = Storage::open(paths)?;

    if first_run {
        initialize_storage(&storage)?;
        console.print(messages::SETUP_POST_DATABASE)?;
        SetupWizard::new(&storage).run(console)?;
    }

    let booked = IncomeService::new(&storage).insert_all_due_incomes()?;
    if !booked.is_empty() {
        info!(months = booked.len(), "Caught up on auto-income");
    }

    Session::new(&storage, console).run()?;
    storage.close()
}
