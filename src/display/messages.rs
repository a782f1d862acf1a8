//! Fixed text shown by the interactive session and the setup wizard

use crate::cli::commands::COMMANDS;
use crate::models::Money;

pub const BANNER: &str = "
\t         _      _             _ _      _
\t__   __ (_)_ __| |_ _   _  __ _| | | ___| |_
\t\\ \\ / / | | '__| __| | | |/ _` | | |/ _ \\ __|
\t \\ V /  | | |  | |_| |_| | (_| | | |  __/ |_
\t  \\_/   |_|_|   \\__|\\__,_|\\__,_|_|_|\\___|\\__|

\tyour virtual wallet in the terminal


";

pub const HELP: &str = "
\tVirtuallet keeps a virtual wallet for you: a running balance made of
\tincomes and expenses, stored in a single SQLite database file.

\tOn the very first start the database is created and you are asked for
\tthe description and amount of a regular monthly income, and for an
\toverdraft. Press enter at any question to keep the suggested default.

\tEvery time Virtuallet starts it books the regular income for each
\tcalendar month that has passed since the last booked one. If you have
\tnot used it for three months, three incomes are booked on the next start.

\tIncomes and expenses can also be booked by hand. An expense is refused
\twhen it would take the balance below minus the overdraft: with the
\tdefault overdraft of 200 the balance never drops below -200.

\tThe database is the single source of truth. Virtuallet never changes or
\tdeletes what it has written, and it does not check what others wrote.
\tYou are welcome to browse or edit it with any SQLite tool; the
\tmodified_at column of the ledger table is there for your own edits.

";

pub const SETUP_PRE_DATABASE: &str = "
\tDatabase file not found.
\tA new database will be created.
";

pub const SETUP_POST_DATABASE: &str = "
\tDatabase initialized.
\tA few questions to configure your wallet follow.
\tPress enter to accept the default shown in brackets.

";

pub const SETUP_DESCRIPTION: &str = "enter description for regular income";
pub const SETUP_INCOME: &str = "enter regular income";
pub const SETUP_OVERDRAFT: &str = "enter overdraft";
pub const SETUP_INVALID_AMOUNT: &str = "please enter a positive number such as 100 or 12.50";
pub const SETUP_COMPLETE: &str = "setup complete, have fun";

pub const ENTER_INPUT: &str = "input > ";
pub const ENTER_DESCRIPTION: &str = "description (optional) > ";
pub const ENTER_AMOUNT: &str = "amount > ";

pub const INCOME_BOOKED: &str = "income booked";
pub const EXPENSE_BOOKED: &str = "expense booked successfully";
pub const MALFORMED_COMMAND: &str =
    "commands are a single character: enter + or - on its own and you will be asked for the details";
pub const BYE: &str = "see ya";

/// Prompt used by the setup wizard, e.g. `enter overdraft [default: 200.00] > `
pub fn setup_prompt(label: &str, default: &str) -> String {
    format!("{} [default: {}] > ", label, default)
}

/// Message shown when validation refuses a booking
pub fn action_aborted(reason: impl std::fmt::Display) -> String {
    format!("{} -> action aborted", reason)
}

/// Command overview, built from the command table
pub fn info() -> String {
    let mut output = String::from("\n\tCommands:\n");
    for entry in COMMANDS {
        output.push_str(&format!(
            "\t- press {} ({}) to {}\n",
            entry.name, entry.key, entry.description
        ));
    }
    output.push('\n');
    output
}

pub fn current_balance(balance: Money) -> String {
    format!("\n\tcurrent balance: {}\n", balance)
}
