// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::reminder::Reminder;
use crate::schedule::Schedule;
use crate::types::{Address, Email, Name, Phone, Tag};
use serde::Serialize;
use std::collections::BTreeSet;

/// A contact record.
///
/// Persons are immutable values. Edits produce a new `Person` via the
/// `with_*` methods and the model replaces the old record wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
    schedule: Option<Schedule>,
    reminder: Option<Reminder>,
}

impl Person {
    /// Creates a new `Person` with no schedule and no reminder.
    ///
    /// # Arguments
    ///
    /// * `name` - The person's name (identity key)
    /// * `phone` - Phone number
    /// * `email` - Email address
    /// * `address` - Postal address
    /// * `tags` - Labels attached to the person
    #[must_use]
    pub const fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
            schedule: None,
            reminder: None,
        }
    }

    /// Returns a copy of this person holding `schedule` instead of the current one.
    ///
    /// Every other field, including the reminder, is carried over unchanged.
    #[must_use]
    pub fn with_schedule(&self, schedule: Schedule) -> Self {
        Self {
            schedule: Some(schedule),
            ..self.clone()
        }
    }

    /// Returns a copy of this person holding `reminder` instead of the current one.
    #[must_use]
    pub fn with_reminder(&self, reminder: Reminder) -> Self {
        Self {
            reminder: Some(reminder),
            ..self.clone()
        }
    }

    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    #[must_use]
    pub const fn phone(&self) -> &Phone {
        &self.phone
    }

    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    #[must_use]
    pub const fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    #[must_use]
    pub const fn reminder(&self) -> Option<&Reminder> {
        self.reminder.as_ref()
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}",
            self.name,
            self.phone.value(),
            self.email.value(),
            self.address.value()
        )?;
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(Tag::value).collect();
            write!(f, "; Tags: [{}]", tags.join(", "))?;
        }
        if let Some(schedule) = &self.schedule {
            write!(f, "; Schedule: {schedule}")?;
        }
        if let Some(reminder) = &self.reminder {
            write!(f, "; Reminder: {reminder}")?;
        }
        Ok(())
    }
}
