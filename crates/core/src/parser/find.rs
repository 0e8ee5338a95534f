// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::ParseError;

pub const COMMAND_WORD: &str = "find";

pub const USAGE: &str = "find: Finds persons whose names contain any of the keywords \
    (case-insensitive).\n\
    Parameters: KEYWORD [MORE_KEYWORDS]...\n\
    Example: find alice bob charlie";

/// Parses the arguments of a `find` command.
///
/// # Errors
///
/// Returns an error if no keyword is given.
pub fn parse(args: &str) -> Result<Command, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidCommandFormat { usage: USAGE });
    }
    Ok(Command::Find { keywords })
}
