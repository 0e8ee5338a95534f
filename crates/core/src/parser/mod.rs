// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Turns command text into `Command` values.
//!
//! Parsing is pure: it never looks at the model. Every failure here is a
//! `ParseError`; rule violations are reported later by `execute`.

mod add;
mod find;
mod reminder;
mod schedule;
pub mod tokenizer;

use crate::command::Command;
use crate::error::ParseError;
use tracing::debug;

pub use reminder::parse as parse_reminder_command;
pub use schedule::parse as parse_schedule_command;

const LIST_COMMAND_WORD: &str = "list";

/// Usage shown when the input is blank.
pub const HELP_USAGE: &str = "Commands: add, list, find, schedule, remind";

/// Parses a full line of user input.
///
/// The first whitespace-delimited word selects the command; the rest of the
/// line is handed to that command's parser.
///
/// # Errors
///
/// Returns an error if the input is blank, the command word is unknown, or
/// the command's own parser rejects its arguments.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed: &str = input.trim();
    let (command_word, args) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));

    debug!(command_word, "Parsing command");
    match command_word {
        "" => Err(ParseError::InvalidCommandFormat { usage: HELP_USAGE }),
        schedule::COMMAND_WORD => schedule::parse(args),
        reminder::COMMAND_WORD => reminder::parse(args),
        add::COMMAND_WORD => add::parse(args),
        find::COMMAND_WORD => find::parse(args),
        LIST_COMMAND_WORD => Ok(Command::List),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}
