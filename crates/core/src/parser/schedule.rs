// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::tokenizer::{ArgumentMultimap, PREFIX_DATE, PREFIX_NOTE, tokenize};
use crate::command::Command;
use crate::error::ParseError;
use addrbook_domain::Schedule;

pub const COMMAND_WORD: &str = "schedule";

pub const USAGE: &str = "schedule: Schedules an appointment for the named person.\n\
    Parameters: NAME d/yyyy-MM-dd HHmm [note/NOTE]\n\
    Example: schedule Alex Yeoh d/2024-10-21 1000 note/Annual checkup";

/// Parses the arguments of a `schedule` command.
///
/// Only syntax is checked here. Working hours and slot conflicts are
/// enforced when the command executes.
///
/// # Errors
///
/// Returns an error if:
/// - The name or the `d/` field is missing
/// - `d/` or `note/` is given more than once
/// - The `d/` value is not a `yyyy-MM-dd HHmm` date-time
pub fn parse(args: &str) -> Result<Command, ParseError> {
    let arguments: ArgumentMultimap = tokenize(args, &[PREFIX_DATE, PREFIX_NOTE]);

    let name: &str = arguments.preamble();
    let Some(date_time) = arguments.value(PREFIX_DATE) else {
        return Err(ParseError::InvalidCommandFormat { usage: USAGE });
    };
    if name.is_empty() {
        return Err(ParseError::InvalidCommandFormat { usage: USAGE });
    }
    arguments.verify_no_duplicate_prefixes(&[PREFIX_DATE, PREFIX_NOTE])?;

    let schedule: Schedule = Schedule::new(date_time, arguments.value(PREFIX_NOTE))
        .map_err(|_| ParseError::InvalidDateFormat(date_time.to_string()))?;

    Ok(Command::Schedule {
        name: name.to_string(),
        schedule,
    })
}
