// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod command;
mod error;
mod execute;
mod model;
pub mod parser;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use command::{Command, CommandResult};
pub use error::{CoreError, ParseError};
pub use execute::execute;
pub use model::{Model, ModelManager, PREDICATE_SHOW_ALL_PERSONS, PersonPredicate};
pub use parser::{parse_command, parse_reminder_command, parse_schedule_command};
