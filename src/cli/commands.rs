//! Command definitions for the interactive session
//!
//! Every command is a single character typed at the `input > ` prompt.

/// A command that can be typed at the prompt
#[derive(Debug, Clone)]
pub struct Command {
    /// Character the user types
    pub key: char,
    /// Spoken name of the key
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
    /// Command action
    pub action: CommandAction,
}

/// Actions that commands can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    AddIncome,
    AddExpense,
    ShowBalance,
    Help,
    Quit,
}

/// All available commands
pub static COMMANDS: &[Command] = &[
    Command {
        key: '+',
        name: "plus",
        description: "add an income",
        action: CommandAction::AddIncome,
    },
    Command {
        key: '-',
        name: "minus",
        description: "add an expense",
        action: CommandAction::AddExpense,
    },
    Command {
        key: '=',
        name: "equals",
        description: "show the balance and the last transactions",
        action: CommandAction::ShowBalance,
    },
    Command {
        key: '?',
        name: "question mark",
        description: "read how this works",
        action: CommandAction::Help,
    },
    Command {
        key: ':',
        name: "colon",
        description: "leave",
        action: CommandAction::Quit,
    },
];

/// What a line typed at the prompt means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Command(CommandAction),
    /// A booking key followed by more text, such as `+20`
    Malformed,
    /// Anything else, including empty input
    Unknown,
}

/// Find a command by its key
pub fn find_command(key: char) -> Option<&'static Command> {
    COMMANDS.iter().find(|cmd| cmd.key == key)
}

/// Interpret one line of user input
pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    let mut chars = line.chars();

    match (chars.next(), chars.next()) {
        (Some(key), None) => find_command(key)
            .map(|cmd| Input::Command(cmd.action))
            .unwrap_or(Input::Unknown),
        (Some('+' | '-'), Some(_)) => Input::Malformed,
        _ => Input::Unknown,
    }
}
