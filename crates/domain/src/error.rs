// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No person with the requested name is in the current view.
    PersonNotFound,
    /// A schedule falls outside working hours or is not on the hour.
    InvalidTime,
    /// Another person already holds the requested date-time.
    SlotTaken,
    /// A person with the same name already exists.
    DuplicatePerson(String),
    /// Person name is empty or invalid.
    InvalidName(String),
    /// Phone number is invalid.
    InvalidPhone(String),
    /// Email address is invalid.
    InvalidEmail(String),
    /// Address is empty.
    InvalidAddress(String),
    /// Tag is empty or not alphanumeric.
    InvalidTag(String),
    /// Failed to parse a date-time literal.
    DateParseError {
        /// The invalid date-time string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A reminder could not be constructed.
    InvalidReminder {
        /// Description of the validation error.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PersonNotFound => write!(f, "Person not found"),
            // The missing space is user-visible behaviour and is kept as is.
            Self::InvalidTime => write!(
                f,
                "Scheduled time must be a weekday and\
                 on the hour between 0900 and 1700"
            ),
            Self::SlotTaken => write!(f, "The selected time slot is already taken."),
            Self::DuplicatePerson(name) => {
                write!(f, "A person named '{name}' already exists")
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidPhone(msg) => write!(f, "Invalid phone: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidAddress(msg) => write!(f, "Invalid address: {msg}"),
            Self::InvalidTag(msg) => write!(f, "Invalid tag: {msg}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidReminder { reason } => write!(f, "Invalid reminder: {reason}"),
        }
    }
}

impl std::error::Error for DomainError {}
