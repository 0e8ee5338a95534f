// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::Serialize;

/// Minimum number of digits in a phone number.
const MIN_PHONE_DIGITS: usize = 3;

/// Represents a person's name.
///
/// The name is the sole identity key used by commands to look a person up.
/// Comparison is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Name {
    /// The name value, trimmed.
    value: String,
}

impl Name {
    /// Creates a new `Name`.
    ///
    /// # Arguments
    ///
    /// * `value` - The raw name (surrounding whitespace is trimmed)
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or contains characters other than
    /// letters, digits and spaces.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidName(String::from(
                "Name cannot be empty",
            )));
        }
        if !trimmed.chars().all(|c| c.is_alphanumeric() || c == ' ') {
            return Err(DomainError::InvalidName(format!(
                "'{trimmed}' may only contain letters, digits and spaces"
            )));
        }
        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the name value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Represents a phone number (digits only).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Phone {
    value: String,
}

impl Phone {
    /// Creates a new `Phone`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not at least three ASCII digits.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.len() < MIN_PHONE_DIGITS || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidPhone(format!(
                "'{trimmed}' must contain at least {MIN_PHONE_DIGITS} digits and nothing else"
            )));
        }
        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the phone number.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Represents an email address of the form `local@domain`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email {
    value: String,
}

impl Email {
    /// Creates a new `Email`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not have a non-empty local part and
    /// a non-empty domain separated by a single `@`.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        let valid: bool = match trimmed.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !trimmed.contains(char::is_whitespace)
            }
            None => false,
        };
        if !valid {
            return Err(DomainError::InvalidEmail(format!(
                "'{trimmed}' must be of the form local@domain"
            )));
        }
        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the email address.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Represents a postal address. Any non-blank text is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Address {
    value: String,
}

impl Address {
    /// Creates a new `Address`.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is blank.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidAddress(String::from(
                "Address cannot be empty",
            )));
        }
        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the address.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A single alphanumeric label attached to a person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Tag {
    value: String,
}

impl Tag {
    /// Creates a new `Tag`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag is empty or not alphanumeric.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() || !trimmed.chars().all(char::is_alphanumeric) {
            return Err(DomainError::InvalidTag(format!(
                "'{trimmed}' must be a single alphanumeric word"
            )));
        }
        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the tag label.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
