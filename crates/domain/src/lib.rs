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

mod error;
mod person;
mod reminder;
mod schedule;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use person::Person;
pub use reminder::{OffsetUnit, Reminder, ReminderOffset};
pub use schedule::{DATE_TIME_FORMAT, Schedule, parse_date_time};
pub use types::{Address, Email, Name, Phone, Tag};
pub use validation::{
    WORKING_DAY_END_HOUR, WORKING_DAY_START_HOUR, is_on_the_hour, is_within_working_hours,
    validate_name_unique, validate_slot_available, validate_working_hours,
};
