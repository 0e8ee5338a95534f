// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::tokenizer::{
    ArgumentMultimap, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_PHONE, PREFIX_TAG, tokenize,
};
use crate::command::Command;
use crate::error::ParseError;
use addrbook_domain::{Address, Email, Name, Person, Phone, Tag};
use std::collections::BTreeSet;

pub const COMMAND_WORD: &str = "add";

pub const USAGE: &str = "add: Adds a person to the address book.\n\
    Parameters: NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...\n\
    Example: add John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2 t/friends";

/// Parses the arguments of an `add` command.
///
/// # Errors
///
/// Returns an error if a required field is missing or repeated, or if any
/// field fails its own validation.
pub fn parse(args: &str) -> Result<Command, ParseError> {
    let arguments: ArgumentMultimap = tokenize(
        args,
        &[PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_TAG],
    );

    let (Some(phone), Some(email), Some(address)) = (
        arguments.value(PREFIX_PHONE),
        arguments.value(PREFIX_EMAIL),
        arguments.value(PREFIX_ADDRESS),
    ) else {
        return Err(ParseError::InvalidCommandFormat { usage: USAGE });
    };
    if arguments.preamble().is_empty() {
        return Err(ParseError::InvalidCommandFormat { usage: USAGE });
    }
    arguments.verify_no_duplicate_prefixes(&[PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS])?;

    let tags: BTreeSet<Tag> = arguments
        .all_values(PREFIX_TAG)
        .iter()
        .map(|tag| Tag::new(tag))
        .collect::<Result<_, _>>()?;

    let person: Person = Person::new(
        Name::new(arguments.preamble())?,
        Phone::new(phone)?,
        Email::new(email)?,
        Address::new(address)?,
        tags,
    );

    Ok(Command::Add { person })
}
