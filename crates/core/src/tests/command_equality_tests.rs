// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Commands compare structurally: same fields, same command.

use crate::Command;
use crate::tests::helpers::{ALEX, BERNICE, MONDAY_10AM, create_schedule_command};
use addrbook_domain::Schedule;

#[test]
fn test_schedule_commands_with_same_fields_are_equal() {
    let first: Command = create_schedule_command(ALEX, MONDAY_10AM);
    let second: Command = create_schedule_command(ALEX, MONDAY_10AM);

    assert_eq!(first, second);
    assert_eq!(first.clone(), first);
}

#[test]
fn test_schedule_commands_differing_in_name_are_not_equal() {
    assert_ne!(
        create_schedule_command(ALEX, MONDAY_10AM),
        create_schedule_command(BERNICE, MONDAY_10AM)
    );
}

#[test]
fn test_schedule_commands_differing_in_schedule_are_not_equal() {
    assert_ne!(
        create_schedule_command(ALEX, MONDAY_10AM),
        create_schedule_command(ALEX, "2024-10-21 1100")
    );

    let with_note: Command = Command::Schedule {
        name: String::from(ALEX),
        schedule: Schedule::new(MONDAY_10AM, Some("checkup")).unwrap(),
    };
    assert_ne!(with_note, create_schedule_command(ALEX, MONDAY_10AM));
}

#[test]
fn test_different_command_kinds_are_not_equal() {
    let remind: Command = Command::Remind {
        name: String::from(ALEX),
        appointment_date: String::from(MONDAY_10AM),
        reminder_time: String::from("1h"),
    };

    assert_ne!(remind, create_schedule_command(ALEX, MONDAY_10AM));
    assert_ne!(Command::List, Command::Find { keywords: vec![] });
}
