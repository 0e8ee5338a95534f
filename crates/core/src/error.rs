// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use addrbook_domain::DomainError;
use thiserror::Error;

/// Errors that can occur while executing a command against the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The record submitted for replacement is no longer in the model.
    PersonNotInModel(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Domain messages are user-facing and shown verbatim.
            Self::DomainViolation(err) => write!(f, "{err}"),
            Self::PersonNotInModel(name) => {
                write!(
                    f,
                    "The record for '{name}' changed before it could be updated"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

/// Syntactic errors raised while turning command text into a `Command`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Required parts of the command are missing.
    #[error("Invalid command format!\n{usage}")]
    InvalidCommandFormat {
        /// Usage text for the command.
        usage: &'static str,
    },

    /// The command word is not recognised.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A date-time literal cannot be parsed at all.
    #[error("Invalid date format '{0}'. Dates must be written as yyyy-MM-dd HHmm")]
    InvalidDateFormat(String),

    /// A single-valued prefix was given more than once.
    #[error(
        "Multiple values specified for the following single-valued field(s): {}",
        .0.join(" ")
    )]
    DuplicatePrefixes(Vec<&'static str>),

    /// A field value failed its own validation.
    #[error(transparent)]
    InvalidField(#[from] DomainError),
}
