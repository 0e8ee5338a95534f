// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Appointment schedules.
//!
//! A `Schedule` pairs a textual date-time in the fixed `yyyy-MM-dd HHmm`
//! layout with an optional free-text note.
//!
//! ## Invariants
//!
//! - The date-time text always parses in the fixed layout
//! - Working-hour rules are NOT enforced here; they belong to the command
//!   that applies the schedule
//! - Slot comparison uses the date-time text verbatim

use crate::error::DomainError;
use serde::Serialize;
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// The only accepted date-time layout (`yyyy-MM-dd HHmm`).
pub const DATE_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour][minute]");

/// Parses a date-time literal in the fixed `yyyy-MM-dd HHmm` layout.
///
/// # Arguments
///
/// * `value` - The literal to parse (surrounding whitespace is ignored)
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the literal does not match the layout,
/// names a date that does not exist, or is not written the way the layout
/// formats it (a signed year such as `+2024` is rejected).
pub fn parse_date_time(value: &str) -> Result<PrimitiveDateTime, DomainError> {
    let trimmed: &str = value.trim();
    let parse_error = |error: String| DomainError::DateParseError {
        date_string: value.to_string(),
        error,
    };

    let parsed: PrimitiveDateTime = PrimitiveDateTime::parse(trimmed, DATE_TIME_FORMAT)
        .map_err(|e| parse_error(e.to_string()))?;

    // `[year]` accepts a leading sign; only the formatted spelling is allowed
    let canonical: String = parsed
        .format(DATE_TIME_FORMAT)
        .map_err(|e| parse_error(e.to_string()))?;
    if canonical != trimmed || parsed.year() < 0 {
        return Err(parse_error(format!("expected '{canonical}'")));
    }

    Ok(parsed)
}

/// An appointment slot attached to a person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Schedule {
    /// The date-time text exactly as accepted (trimmed).
    date_time: String,
    /// The parsed form of `date_time`.
    #[serde(skip)]
    local_date_time: PrimitiveDateTime,
    /// Optional free-text note.
    note: Option<String>,
}

impl Schedule {
    /// Creates a new `Schedule`.
    ///
    /// # Arguments
    ///
    /// * `date_time` - The appointment in `yyyy-MM-dd HHmm` form
    /// * `note` - Optional note; blank notes are dropped
    ///
    /// # Errors
    ///
    /// Returns an error if `date_time` cannot be parsed.
    pub fn new(date_time: &str, note: Option<&str>) -> Result<Self, DomainError> {
        let local_date_time: PrimitiveDateTime = parse_date_time(date_time)?;
        let note: Option<String> = note
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(Self {
            date_time: date_time.trim().to_string(),
            local_date_time,
            note,
        })
    }

    /// Returns the date-time text.
    #[must_use]
    pub fn date_time(&self) -> &str {
        &self.date_time
    }

    /// Returns the parsed date-time.
    #[must_use]
    pub const fn local_date_time(&self) -> PrimitiveDateTime {
        self.local_date_time
    }

    /// Returns the note, if any.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.note {
            Some(note) => write!(f, "{} ({note})", self.date_time),
            None => f.write_str(&self.date_time),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::{Month, Weekday};

    #[test]
    fn test_parse_date_time_accepts_fixed_layout() {
        let parsed: PrimitiveDateTime = parse_date_time("2024-10-21 1000").unwrap();

        assert_eq!(parsed.year(), 2024);
        assert_eq!(parsed.month(), Month::October);
        assert_eq!(parsed.day(), 21);
        assert_eq!(parsed.hour(), 10);
        assert_eq!(parsed.minute(), 0);
        assert_eq!(parsed.weekday(), Weekday::Monday);
    }

    #[test]
    fn test_parse_date_time_rejects_other_layouts() {
        for literal in [
            "2024-10-21 10:00",
            "21-10-2024 1000",
            "2024/10/21 1000",
            "2024-10-21",
            "2024-10-21 1000 extra",
            "+2024-10-21 1000",
            "-2024-10-21 1000",
            "",
        ] {
            let result: Result<PrimitiveDateTime, DomainError> = parse_date_time(literal);
            assert!(
                matches!(result, Err(DomainError::DateParseError { .. })),
                "expected '{literal}' to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_date_time_rejects_signed_year() {
        let result: Result<PrimitiveDateTime, DomainError> = parse_date_time("+2024-10-21 1000");

        assert_eq!(
            result,
            Err(DomainError::DateParseError {
                date_string: String::from("+2024-10-21 1000"),
                error: String::from("expected '2024-10-21 1000'"),
            })
        );
    }

    #[test]
    fn test_parse_date_time_rejects_impossible_dates() {
        assert!(parse_date_time("2024-02-30 1000").is_err());
        assert!(parse_date_time("2024-10-21 2500").is_err());
        assert!(parse_date_time("2024-10-21 1060").is_err());
    }

    #[test]
    fn test_schedule_keeps_text_and_note() {
        let schedule: Schedule = Schedule::new(" 2024-10-21 1000 ", Some(" checkup ")).unwrap();

        assert_eq!(schedule.date_time(), "2024-10-21 1000");
        assert_eq!(schedule.note(), Some("checkup"));
        assert_eq!(schedule.local_date_time().hour(), 10);
    }

    #[test]
    fn test_schedule_drops_blank_note() {
        let schedule: Schedule = Schedule::new("2024-10-21 1000", Some("   ")).unwrap();
        assert_eq!(schedule.note(), None);
    }

    #[test]
    fn test_schedule_display() {
        let plain: Schedule = Schedule::new("2024-10-21 1000", None).unwrap();
        let noted: Schedule = Schedule::new("2024-10-21 1000", Some("checkup")).unwrap();

        assert_eq!(plain.to_string(), "2024-10-21 1000");
        assert_eq!(noted.to_string(), "2024-10-21 1000 (checkup)");
    }

    #[test]
    fn test_schedule_equality_includes_note() {
        let a: Schedule = Schedule::new("2024-10-21 1000", Some("a")).unwrap();
        let b: Schedule = Schedule::new("2024-10-21 1000", Some("b")).unwrap();
        let a_again: Schedule = Schedule::new("2024-10-21 1000", Some("a")).unwrap();

        assert_ne!(a, b);
        assert_eq!(a, a_again);
    }
}
