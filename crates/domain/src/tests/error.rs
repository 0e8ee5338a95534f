// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::PersonNotFound;
    assert_eq!(format!("{err}"), "Person not found");

    let err: DomainError = DomainError::InvalidTime;
    assert_eq!(
        format!("{err}"),
        "Scheduled time must be a weekday andon the hour between 0900 and 1700"
    );

    let err: DomainError = DomainError::SlotTaken;
    assert_eq!(format!("{err}"), "The selected time slot is already taken.");

    let err: DomainError = DomainError::DuplicatePerson(String::from("Alex Yeoh"));
    assert_eq!(
        format!("{err}"),
        "A person named 'Alex Yeoh' already exists"
    );

    let err: DomainError = DomainError::InvalidName(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid name: test");

    let err: DomainError = DomainError::InvalidPhone(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid phone: test");

    let err: DomainError = DomainError::InvalidEmail(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid email: test");

    let err: DomainError = DomainError::InvalidAddress(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid address: test");

    let err: DomainError = DomainError::InvalidTag(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid tag: test");

    let err: DomainError = DomainError::DateParseError {
        date_string: String::from("soon"),
        error: String::from("bad"),
    };
    assert_eq!(format!("{err}"), "Failed to parse date 'soon': bad");

    let err: DomainError = DomainError::InvalidReminder {
        reason: String::from("test"),
    };
    assert_eq!(format!("{err}"), "Invalid reminder: test");
}
