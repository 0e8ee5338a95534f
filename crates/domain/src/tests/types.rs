// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Address, DomainError, Email, Name, Person, Phone, Schedule, Tag};
use std::collections::BTreeSet;

fn create_test_person() -> Person {
    Person::new(
        Name::new("Alex Yeoh").unwrap(),
        Phone::new("87438807").unwrap(),
        Email::new("alexyeoh@example.com").unwrap(),
        Address::new("Blk 30 Geylang Street 29").unwrap(),
        BTreeSet::from([Tag::new("friends").unwrap()]),
    )
}

#[test]
fn test_name_is_trimmed_and_case_preserved() {
    let name: Name = Name::new("  Alex Yeoh ").unwrap();
    assert_eq!(name.value(), "Alex Yeoh");
    assert_ne!(name, Name::new("alex yeoh").unwrap());
}

#[test]
fn test_name_rejects_blank_and_symbols() {
    assert!(matches!(Name::new("   "), Err(DomainError::InvalidName(_))));
    assert!(matches!(
        Name::new("Alex*"),
        Err(DomainError::InvalidName(_))
    ));
}

#[test]
fn test_phone_requires_three_digits() {
    assert!(Phone::new("123").is_ok());
    assert!(matches!(
        Phone::new("12"),
        Err(DomainError::InvalidPhone(_))
    ));
    assert!(matches!(
        Phone::new("12a45"),
        Err(DomainError::InvalidPhone(_))
    ));
}

#[test]
fn test_email_requires_local_and_domain() {
    assert!(Email::new("a@b").is_ok());
    for literal in ["ab", "@b", "a@", "a@b@c", "a b@c"] {
        assert!(
            matches!(Email::new(literal), Err(DomainError::InvalidEmail(_))),
            "expected '{literal}' to be rejected"
        );
    }
}

#[test]
fn test_address_rejects_blank() {
    assert!(matches!(
        Address::new(" "),
        Err(DomainError::InvalidAddress(_))
    ));
}

#[test]
fn test_tag_must_be_single_word() {
    assert!(Tag::new("colleagues").is_ok());
    assert!(matches!(
        Tag::new("old friends"),
        Err(DomainError::InvalidTag(_))
    ));
    assert!(matches!(Tag::new(""), Err(DomainError::InvalidTag(_))));
}

#[test]
fn test_with_schedule_copies_every_other_field() {
    let person: Person = create_test_person();
    let schedule: Schedule = Schedule::new("2024-10-21 1000", Some("checkup")).unwrap();

    let edited: Person = person.with_schedule(schedule.clone());

    assert_eq!(edited.schedule(), Some(&schedule));
    assert_eq!(edited.name(), person.name());
    assert_eq!(edited.phone(), person.phone());
    assert_eq!(edited.email(), person.email());
    assert_eq!(edited.address(), person.address());
    assert_eq!(edited.tags(), person.tags());
    assert_eq!(edited.reminder(), person.reminder());
    // The original value is untouched.
    assert_eq!(person.schedule(), None);
}

#[test]
fn test_with_schedule_replaces_previous_schedule() {
    let first: Schedule = Schedule::new("2024-10-21 1000", None).unwrap();
    let second: Schedule = Schedule::new("2024-10-22 1100", None).unwrap();

    let person: Person = create_test_person()
        .with_schedule(first)
        .with_schedule(second.clone());

    assert_eq!(person.schedule(), Some(&second));
}

#[test]
fn test_person_display_lists_optional_fields() {
    let person: Person =
        create_test_person().with_schedule(Schedule::new("2024-10-21 1000", None).unwrap());

    assert_eq!(
        person.to_string(),
        "Alex Yeoh; Phone: 87438807; Email: alexyeoh@example.com; \
         Address: Blk 30 Geylang Street 29; Tags: [friends]; Schedule: 2024-10-21 1000"
    );
}
