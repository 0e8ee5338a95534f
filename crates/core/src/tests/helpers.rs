// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, ModelManager};
use addrbook_domain::{Address, Email, Name, Person, Phone, Schedule, Tag};
use std::collections::BTreeSet;

pub const ALEX: &str = "Alex Yeoh";
pub const BERNICE: &str = "Bernice Yu";
pub const CHARLOTTE: &str = "Charlotte Oliveiro";

/// A Monday inside working hours.
pub const MONDAY_10AM: &str = "2024-10-21 1000";

pub fn create_test_person(name: &str) -> Person {
    Person::new(
        Name::new(name).unwrap(),
        Phone::new("87438807").unwrap(),
        Email::new("test@example.com").unwrap(),
        Address::new("Blk 30 Geylang Street 29, #06-40").unwrap(),
        BTreeSet::from([Tag::new("friends").unwrap()]),
    )
}

pub fn create_test_model() -> ModelManager {
    ModelManager::with_persons(vec![
        create_test_person(ALEX),
        create_test_person(BERNICE),
        create_test_person(CHARLOTTE),
    ])
    .unwrap()
}

pub fn create_test_schedule(date_time: &str) -> Schedule {
    Schedule::new(date_time, None).unwrap()
}

pub fn create_schedule_command(name: &str, date_time: &str) -> Command {
    Command::Schedule {
        name: String::from(name),
        schedule: create_test_schedule(date_time),
    }
}

pub fn find_person<'a>(persons: &'a [Person], name: &str) -> &'a Person {
    persons
        .iter()
        .find(|person| person.name().value() == name)
        .unwrap()
}
