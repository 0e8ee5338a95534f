// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use addrbook_domain::{Person, validate_name_unique};
use tracing::debug;

/// Selects which persons appear in the filtered view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PersonPredicate {
    /// Every person is shown.
    #[default]
    ShowAll,
    /// Persons with a name word equal (ignoring Unicode case) to any keyword.
    NameContainsKeywords(Vec<String>),
}

/// The predicate that shows the full collection.
pub const PREDICATE_SHOW_ALL_PERSONS: PersonPredicate = PersonPredicate::ShowAll;

impl PersonPredicate {
    /// Returns whether `person` passes this predicate.
    #[must_use]
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Self::ShowAll => true,
            Self::NameContainsKeywords(keywords) => {
                let name: String = person.name().value().to_lowercase();
                name.split_whitespace()
                    .any(|word| keywords.iter().any(|k| k.to_lowercase() == word))
            }
        }
    }
}

/// Returns the index of the first person in `view` named exactly `name`.
#[must_use]
pub fn find_person_index(view: &[&Person], name: &str) -> Option<usize> {
    view.iter().position(|person| person.name().value() == name)
}

/// Access to the canonical person collection and its filtered view.
///
/// Commands receive the model explicitly and only mutate it through this
/// interface.
pub trait Model {
    /// Returns every person in insertion order.
    fn person_list(&self) -> &[Person];

    /// Returns the persons that pass the current filter, in order.
    fn filtered_person_list(&self) -> Vec<&Person>;

    /// Returns the current filter.
    fn filter(&self) -> &PersonPredicate;

    /// Replaces the current filter.
    fn update_filtered_person_list(&mut self, predicate: PersonPredicate);

    /// Adds a person to the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns an error if a person with the same name already exists.
    fn add_person(&mut self, person: Person) -> Result<(), CoreError>;

    /// Replaces `target` with `edited`.
    ///
    /// `target` is matched on full equality, not just the name, so callers
    /// must pass the record exactly as they read it.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is no longer in the collection, or if
    /// `edited` renames the person to a name already in use.
    fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), CoreError>;

    /// Returns the index within the filtered view of the first person whose
    /// name is exactly `name`.
    fn find_filtered_person(&self, name: &str) -> Option<usize> {
        find_person_index(&self.filtered_person_list(), name)
    }

    /// Returns whether a person with the same name exists.
    fn has_person(&self, person: &Person) -> bool {
        self.person_list()
            .iter()
            .any(|existing| existing.name() == person.name())
    }
}

/// In-memory owner of the person collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModelManager {
    persons: Vec<Person>,
    filter: PersonPredicate,
}

impl ModelManager {
    /// Creates an empty model showing all persons.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            persons: Vec::new(),
            filter: PersonPredicate::ShowAll,
        }
    }

    /// Creates a model over existing persons.
    ///
    /// # Errors
    ///
    /// Returns an error if two persons share a name.
    pub fn with_persons(persons: Vec<Person>) -> Result<Self, CoreError> {
        let mut model: Self = Self::new();
        for person in persons {
            model.add_person(person)?;
        }
        Ok(model)
    }
}

impl Model for ModelManager {
    fn person_list(&self) -> &[Person] {
        &self.persons
    }

    fn filtered_person_list(&self) -> Vec<&Person> {
        self.persons
            .iter()
            .filter(|person| self.filter.matches(person))
            .collect()
    }

    fn filter(&self) -> &PersonPredicate {
        &self.filter
    }

    fn update_filtered_person_list(&mut self, predicate: PersonPredicate) {
        debug!(?predicate, "Updating person filter");
        self.filter = predicate;
    }

    fn add_person(&mut self, person: Person) -> Result<(), CoreError> {
        validate_name_unique(person.name(), &self.persons)?;
        debug!(name = person.name().value(), "Adding person");
        self.persons.push(person);
        Ok(())
    }

    fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), CoreError> {
        let index: usize = self
            .persons
            .iter()
            .position(|person| person == target)
            .ok_or_else(|| CoreError::PersonNotInModel(target.name().value().to_string()))?;

        if edited.name() != target.name() {
            validate_name_unique(edited.name(), &self.persons)?;
        }

        debug!(name = target.name().value(), index, "Replacing person");
        self.persons[index] = edited;
        Ok(())
    }
}
