//! Interactive session loop
//!
//! Reads single-character commands until the user quits or input ends, and
//! routes each one to its handler.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::display::{format_balance_report, messages};
use crate::error::LedgerResult;
use crate::models::TransactionKind;
use crate::services::TransactionService;
use crate::storage::{Storage, RECENT_TRANSACTIONS_LIMIT};

use super::commands::{parse_input, CommandAction, Input};
use super::prompt::Console;

pub struct Session<'a, R, W> {
    storage: &'a Storage,
    console: &'a mut Console<R, W>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(storage: &'a Storage, console: &'a mut Console<R, W>) -> Self {
        Self { storage, console }
    }

    /// Run until `:` is entered or input is exhausted
    pub fn run(&mut self) -> LedgerResult<()> {
        let balance = self.storage.ledger().balance()?;
        self.console.print(&messages::current_balance(balance))?;
        self.console.print(&messages::info())?;

        while let Some(line) = self.console.prompt(messages::ENTER_INPUT)? {
            match parse_input(&line) {
                Input::Command(CommandAction::Quit) => break,
                Input::Command(action) => self.dispatch(action)?,
                Input::Malformed => self.console.println(messages::MALFORMED_COMMAND)?,
                Input::Unknown => self.console.print(&messages::info())?,
            }
        }

        debug!("Session ended");
        self.console.println(messages::BYE)
    }

    fn dispatch(&mut self, action: CommandAction) -> LedgerResult<()> {
        match action {
            CommandAction::AddIncome => self.book(TransactionKind::Income),
            CommandAction::AddExpense => self.book(TransactionKind::Expense),
            CommandAction::ShowBalance => self.show_balance(),
            CommandAction::Help => self.console.print(messages::HELP),
            CommandAction::Quit => Ok(()),
        }
    }

    fn book(&mut self, kind: TransactionKind) -> LedgerResult<()> {
        let Some(description) = self.console.prompt(messages::ENTER_DESCRIPTION)? else {
            return Ok(());
        };
        let Some(amount) = self.console.prompt(messages::ENTER_AMOUNT)? else {
            return Ok(());
        };

        match TransactionService::new(self.storage).book_input(kind, &description, &amount) {
            Ok(balance) => {
                let confirmation = match kind {
                    TransactionKind::Income => messages::INCOME_BOOKED,
                    TransactionKind::Expense => messages::EXPENSE_BOOKED,
                };
                self.console.println(confirmation)?;
                self.console.print(&messages::current_balance(balance))
            }
            Err(e) if e.is_validation() => self.console.println(&messages::action_aborted(&e)),
            Err(e) => Err(e),
        }
    }

    fn show_balance(&mut self) -> LedgerResult<()> {
        let ledger = self.storage.ledger();
        let balance = ledger.balance()?;
        let entries = ledger.recent_transactions(RECENT_TRANSACTIONS_LIMIT)?;
        self.console.print(&format_balance_report(balance, &entries))
    }
}
