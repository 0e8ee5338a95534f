// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Appointment reminders.
//!
//! A reminder names an appointment date-time and how long before it the
//! person should be reminded. Offsets are written as a positive count
//! followed by a unit: `m` (minutes), `h` (hours) or `d` (days).

use crate::error::DomainError;
use crate::schedule::parse_date_time;
use serde::Serialize;
use std::str::FromStr;
use time::{Duration, PrimitiveDateTime};

/// The unit of a reminder offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OffsetUnit {
    Minutes,
    Hours,
    Days,
}

impl OffsetUnit {
    /// Returns the single-letter suffix used in command text.
    #[must_use]
    pub const fn suffix(self) -> char {
        match self {
            Self::Minutes => 'm',
            Self::Hours => 'h',
            Self::Days => 'd',
        }
    }
}

/// How long before an appointment a reminder fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ReminderOffset {
    amount: u32,
    unit: OffsetUnit,
}

impl ReminderOffset {
    /// Returns the offset as a duration.
    #[must_use]
    pub fn duration(self) -> Duration {
        let amount: i64 = i64::from(self.amount);
        match self.unit {
            OffsetUnit::Minutes => Duration::minutes(amount),
            OffsetUnit::Hours => Duration::hours(amount),
            OffsetUnit::Days => Duration::days(amount),
        }
    }

    /// Returns the numeric part of the offset.
    #[must_use]
    pub const fn amount(self) -> u32 {
        self.amount
    }

    /// Returns the unit of the offset.
    #[must_use]
    pub const fn unit(self) -> OffsetUnit {
        self.unit
    }
}

impl FromStr for ReminderOffset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        let invalid = || DomainError::InvalidReminder {
            reason: format!("offset '{trimmed}' must be a positive number followed by m, h or d"),
        };

        let mut chars = trimmed.chars();
        let unit: OffsetUnit = match chars.next_back() {
            Some('m') => OffsetUnit::Minutes,
            Some('h') => OffsetUnit::Hours,
            Some('d') => OffsetUnit::Days,
            _ => return Err(invalid()),
        };
        let digits: &str = chars.as_str();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let amount: u32 = digits.parse().map_err(|_| invalid())?;
        if amount == 0 {
            return Err(invalid());
        }

        Ok(Self { amount, unit })
    }
}

impl std::fmt::Display for ReminderOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.suffix())
    }
}

/// A reminder for an upcoming appointment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Reminder {
    /// The appointment date-time text (trimmed).
    appointment: String,
    /// How long before the appointment to remind.
    offset: ReminderOffset,
    /// The moment the reminder fires.
    #[serde(skip)]
    remind_at: PrimitiveDateTime,
}

impl Reminder {
    /// Creates a new `Reminder`.
    ///
    /// # Arguments
    ///
    /// * `appointment` - The appointment in `yyyy-MM-dd HHmm` form
    /// * `offset` - The reminder offset, e.g. `30m`, `2h` or `1d`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidReminder` if either field is missing or
    /// malformed, or if the reminder would fall before the representable range.
    pub fn new(appointment: &str, offset: &str) -> Result<Self, DomainError> {
        let invalid = |reason: String| DomainError::InvalidReminder { reason };
        if appointment.trim().is_empty() {
            return Err(invalid(String::from("appointment date is required")));
        }
        if offset.trim().is_empty() {
            return Err(invalid(String::from("reminder offset is required")));
        }

        let appointment_at: PrimitiveDateTime =
            parse_date_time(appointment).map_err(|e| invalid(e.to_string()))?;
        let offset: ReminderOffset = offset.parse()?;
        let remind_at: PrimitiveDateTime = appointment_at
            .checked_sub(offset.duration())
            .ok_or_else(|| DomainError::InvalidReminder {
                reason: format!("offset {offset} reaches before the earliest supported date"),
            })?;

        Ok(Self {
            appointment: appointment.trim().to_string(),
            offset,
            remind_at,
        })
    }

    /// Returns the appointment date-time text.
    #[must_use]
    pub fn appointment(&self) -> &str {
        &self.appointment
    }

    /// Returns the offset.
    #[must_use]
    pub const fn offset(&self) -> ReminderOffset {
        self.offset
    }

    /// Returns when the reminder fires.
    #[must_use]
    pub const fn remind_at(&self) -> PrimitiveDateTime {
        self.remind_at
    }
}

impl std::fmt::Display for Reminder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} before)", self.appointment, self.offset)
    }
}
