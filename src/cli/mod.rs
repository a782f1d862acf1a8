//! Interactive terminal front end
//!
//! This module holds the command table, the console abstraction over
//! stdin/stdout and the session loop that bridges user input with the
//! service layer.

pub mod commands;
pub mod prompt;
pub mod session;

pub use commands::{parse_input, Command, CommandAction, Input, COMMANDS};
pub use prompt::Console;
pub use session::Session;
