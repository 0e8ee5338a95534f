// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::person::Person;
use crate::types::Name;
use time::{PrimitiveDateTime, Weekday};

/// First bookable hour of a working day (inclusive).
pub const WORKING_DAY_START_HOUR: u8 = 9;

/// End of a working day (exclusive).
pub const WORKING_DAY_END_HOUR: u8 = 17;

/// Returns whether the date-time lands exactly on the hour.
#[must_use]
pub const fn is_on_the_hour(date_time: PrimitiveDateTime) -> bool {
    date_time.minute() == 0
}

/// Returns whether the date-time is on a weekday within working hours.
#[must_use]
pub fn is_within_working_hours(date_time: PrimitiveDateTime) -> bool {
    let is_weekday: bool = !matches!(date_time.weekday(), Weekday::Saturday | Weekday::Sunday);
    let hour: u8 = date_time.hour();
    is_weekday && (WORKING_DAY_START_HOUR..WORKING_DAY_END_HOUR).contains(&hour)
}

/// Validates that an appointment is bookable.
///
/// This function is pure, deterministic, and has no side effects.
///
/// # Arguments
///
/// * `date_time` - The requested appointment
///
/// # Errors
///
/// Returns `DomainError::InvalidTime` if:
/// - The minute component is not zero
/// - The day is a Saturday or Sunday
/// - The hour is before 09:00 or at/after 17:00
pub fn validate_working_hours(date_time: PrimitiveDateTime) -> Result<(), DomainError> {
    if !is_on_the_hour(date_time) || !is_within_working_hours(date_time) {
        return Err(DomainError::InvalidTime);
    }
    Ok(())
}

/// Validates that no person already holds the given date-time.
///
/// Comparison is on the date-time text verbatim, so two spellings of the same
/// instant do not collide.
///
/// # Arguments
///
/// * `date_time` - The date-time text being booked
/// * `existing_persons` - Every person to check against
///
/// # Errors
///
/// Returns `DomainError::SlotTaken` if any existing schedule has the same text.
pub fn validate_slot_available(
    date_time: &str,
    existing_persons: &[Person],
) -> Result<(), DomainError> {
    let taken: bool = existing_persons
        .iter()
        .filter_map(Person::schedule)
        .any(|schedule| schedule.date_time() == date_time);

    if taken {
        return Err(DomainError::SlotTaken);
    }
    Ok(())
}

/// Validates that no existing person carries the given name.
///
/// # Errors
///
/// Returns `DomainError::DuplicatePerson` if the name is already in use.
pub fn validate_name_unique(name: &Name, existing_persons: &[Person]) -> Result<(), DomainError> {
    if existing_persons.iter().any(|person| person.name() == name) {
        return Err(DomainError::DuplicatePerson(name.value().to_string()));
    }
    Ok(())
}
