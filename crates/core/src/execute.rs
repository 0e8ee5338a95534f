// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, CommandResult};
use crate::error::CoreError;
use crate::model::{Model, PREDICATE_SHOW_ALL_PERSONS, PersonPredicate, find_person_index};
use addrbook_domain::{
    DomainError, Person, Reminder, Schedule, validate_slot_available, validate_working_hours,
};
use tracing::{debug, info, warn};

/// Executes a command against the model.
///
/// Validation happens before any mutation: a failed command leaves the model
/// exactly as it was. A successful editing command replaces exactly one
/// record and then resets the filter to show every person.
///
/// # Arguments
///
/// * `model` - The model to read and mutate
/// * `command` - The command to execute
///
/// # Returns
///
/// * `Ok(CommandResult)` containing the message for the user
/// * `Err(CoreError)` if the command is rejected
///
/// # Errors
///
/// Returns an error if:
/// - The named person is not in the current view
/// - A schedule is outside working hours or not on the hour
/// - A schedule's slot is already held by someone
/// - A reminder or new person fails field validation
pub fn execute<M: Model + ?Sized>(
    model: &mut M,
    command: Command,
) -> Result<CommandResult, CoreError> {
    let kind: &'static str = command.kind();
    let result: Result<CommandResult, CoreError> = match command {
        Command::Schedule { name, schedule } => execute_schedule(model, &name, &schedule),
        Command::Remind {
            name,
            appointment_date,
            reminder_time,
        } => execute_remind(model, &name, &appointment_date, &reminder_time),
        Command::Add { person } => execute_add(model, person),
        Command::List => {
            model.update_filtered_person_list(PREDICATE_SHOW_ALL_PERSONS);
            Ok(CommandResult::new(String::from("Listed all persons")))
        }
        Command::Find { keywords } => {
            model.update_filtered_person_list(PersonPredicate::NameContainsKeywords(keywords));
            let count: usize = model.filtered_person_list().len();
            Ok(CommandResult::new(format!("{count} persons listed!")))
        }
    };

    if let Err(err) = &result {
        warn!(command = kind, %err, "Command rejected");
    }
    result
}

/// Finds the first person named exactly `name` in the filtered view.
fn lookup_person<M: Model + ?Sized>(model: &M, name: &str) -> Result<Person, CoreError> {
    let view: Vec<&Person> = model.filtered_person_list();
    let found: Option<Person> = find_person_index(&view, name)
        .and_then(|index| view.get(index).copied())
        .cloned();

    debug!(name, found = found.is_some(), "Looked up person");
    found.ok_or(CoreError::DomainViolation(DomainError::PersonNotFound))
}

fn execute_add<M: Model + ?Sized>(
    model: &mut M,
    person: Person,
) -> Result<CommandResult, CoreError> {
    let name: String = person.name().value().to_string();
    model.add_person(person)?;
    info!(name = %name, "Person added");
    Ok(CommandResult::new(format!("New person added: {name}")))
}

fn execute_schedule<M: Model + ?Sized>(
    model: &mut M,
    name: &str,
    schedule: &Schedule,
) -> Result<CommandResult, CoreError> {
    let person_to_edit: Person = lookup_person(model, name)?;

    // Slot must be bookable before we look for conflicts
    validate_working_hours(schedule.local_date_time())?;

    // Conflicts are checked against everyone, not just the filtered view
    validate_slot_available(schedule.date_time(), model.person_list())?;

    let edited_person: Person = person_to_edit.with_schedule(schedule.clone());
    model.set_person(&person_to_edit, edited_person)?;
    model.update_filtered_person_list(PREDICATE_SHOW_ALL_PERSONS);

    info!(
        name,
        date_time = schedule.date_time(),
        "Appointment scheduled"
    );
    let message: String = format!("Scheduled {schedule} for {name}");
    Ok(CommandResult::new(message))
}

fn execute_remind<M: Model + ?Sized>(
    model: &mut M,
    name: &str,
    appointment_date: &str,
    reminder_time: &str,
) -> Result<CommandResult, CoreError> {
    let person_to_edit: Person = lookup_person(model, name)?;
    let reminder: Reminder = Reminder::new(appointment_date, reminder_time)?;

    let edited_person: Person = person_to_edit.with_reminder(reminder.clone());
    model.set_person(&person_to_edit, edited_person)?;
    model.update_filtered_person_list(PREDICATE_SHOW_ALL_PERSONS);

    info!(name, appointment = reminder.appointment(), "Reminder set");
    let message: String = format!("Reminder set for {name}: {reminder}");
    Ok(CommandResult::new(message))
}
