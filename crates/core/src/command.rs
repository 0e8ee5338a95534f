// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use addrbook_domain::{Person, Schedule};

/// A command represents user intent as data only.
///
/// Commands are the only way to request changes to the model. Two commands
/// are equal when all of their fields are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Book an appointment for a person.
    Schedule {
        /// The exact name of the target person.
        name: String,
        /// The requested appointment.
        schedule: Schedule,
    },
    /// Attach a reminder to a person.
    ///
    /// Fields are kept as raw text; the reminder itself is built (and
    /// validated) at execution time.
    Remind {
        /// The exact name of the target person.
        name: String,
        /// The appointment date-time text, empty if absent.
        appointment_date: String,
        /// The reminder offset text, empty if absent.
        reminder_time: String,
    },
    /// Add a new person.
    Add {
        /// The person to add.
        person: Person,
    },
    /// Show every person.
    List,
    /// Show persons whose name contains any of the keywords.
    Find {
        /// Whole-word, case-insensitive keywords.
        keywords: Vec<String>,
    },
}

impl Command {
    /// Returns the name used in log events for this command.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Schedule { .. } => "Schedule",
            Self::Remind { .. } => "Remind",
            Self::Add { .. } => "Add",
            Self::List => "List",
            Self::Find { .. } => "Find",
        }
    }
}

/// The outcome of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Message shown to the user.
    pub feedback_to_user: String,
}

impl CommandResult {
    /// Creates a new `CommandResult`.
    #[must_use]
    pub const fn new(feedback_to_user: String) -> Self {
        Self { feedback_to_user }
    }
}

impl std::fmt::Display for CommandResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.feedback_to_user)
    }
}
