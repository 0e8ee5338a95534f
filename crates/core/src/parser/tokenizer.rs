// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Splits command arguments into a preamble and prefixed fields.
//!
//! A prefix is only recognised at the start of the arguments or right after
//! whitespace, so `note/` never matches the `e/` inside it.

use crate::error::ParseError;
use std::collections::HashMap;

/// A field marker such as `d/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    /// Creates a new `Prefix`.
    #[must_use]
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    /// Returns the prefix text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

/// Appointment date-time (`yyyy-MM-dd HHmm`).
pub const PREFIX_DATE: Prefix = Prefix::new("d/");
/// Free-text schedule note.
pub const PREFIX_NOTE: Prefix = Prefix::new("note/");
/// Reminder offset (`30m`, `2h`, `1d`).
pub const PREFIX_REMINDER: Prefix = Prefix::new("r/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");

/// The result of tokenizing command arguments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Returns the trimmed text before the first prefix.
    #[must_use]
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Returns the last value given for `prefix`.
    #[must_use]
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Returns every value given for `prefix`, in input order.
    #[must_use]
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .get(&prefix)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Fails if any of `prefixes` was given more than once.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::DuplicatePrefixes` listing the repeated prefixes.
    pub fn verify_no_duplicate_prefixes(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<&'static str> = prefixes
            .iter()
            .filter(|prefix| self.all_values(**prefix).len() > 1)
            .map(|prefix| prefix.as_str())
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicated))
        }
    }
}

/// Tokenizes `args` against the given prefixes.
///
/// Each value runs from the end of its prefix to the start of the next
/// recognised prefix and is trimmed. Unlisted prefixes are left as text.
#[must_use]
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|&prefix| {
            args.match_indices(prefix.as_str())
                .filter(|(index, _)| {
                    *index == 0 || args[..*index].ends_with(char::is_whitespace)
                })
                .map(move |(index, _)| (index, prefix))
        })
        .collect();
    positions.sort_by_key(|(index, _)| *index);

    let preamble_end: usize = positions.first().map_or(args.len(), |(index, _)| *index);
    let mut values: HashMap<Prefix, Vec<String>> = HashMap::new();

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start: usize = start + prefix.as_str().len();
        let value_end: usize = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values,
    }
}
