use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use virtuallet::cli::Console;
use virtuallet::config::LedgerPaths;
use virtuallet::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "virtuallet",
    version,
    about = "A virtual wallet in the terminal",
    long_about = "Virtuallet keeps a running balance of incomes and expenses in a \
                  single SQLite file, books a regular income every month and stops \
                  expenses at a configurable overdraft."
)]
struct Cli {
    /// Path of the wallet database file
    #[arg(short, long, env = "VIRTUALLET_DB")]
    database: Option<PathBuf>,

    /// Print diagnostic logs to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = cli
        .database
        .map_or_else(LedgerPaths::new, LedgerPaths::with_database_file);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    virtuallet::run(&paths, &mut console)
        .inspect_err(|e| tracing::error!(error = %e, "Session aborted"))
        .with_context(|| format!("wallet {}", paths.database_file().display()))?;

    Ok(())
}
