// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::tokenizer::{ArgumentMultimap, PREFIX_DATE, PREFIX_REMINDER, tokenize};
use crate::command::Command;
use crate::error::ParseError;
use addrbook_domain::parse_date_time;

pub const COMMAND_WORD: &str = "remind";

/// Parses the arguments of a `remind` command.
///
/// Missing fields become empty strings; the reminder built at execution time
/// decides whether they are acceptable.
///
/// # Errors
///
/// Returns `ParseError::InvalidDateFormat` if a `d/` value is present but is
/// not a `yyyy-MM-dd HHmm` date-time.
pub fn parse(args: &str) -> Result<Command, ParseError> {
    let arguments: ArgumentMultimap = tokenize(args, &[PREFIX_DATE, PREFIX_REMINDER]);

    let name: String = arguments.preamble().to_string();
    let appointment_date: String = arguments.value(PREFIX_DATE).unwrap_or("").to_string();
    let reminder_time: String = arguments.value(PREFIX_REMINDER).unwrap_or("").to_string();

    if !appointment_date.is_empty() {
        parse_date_time(&appointment_date)
            .map_err(|_| ParseError::InvalidDateFormat(appointment_date.clone()))?;
    }

    Ok(Command::Remind {
        name,
        appointment_date,
        reminder_time,
    })
}
