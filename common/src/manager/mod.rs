//! State of the car manager and the requests its actions call for.
//!
//! `CarManager` owns the list snapshot, the form and the editing marker. Each
//! user action either changes that state locally or returns an [`Effect`]: the
//! one request the caller must now issue. When a request settles, the caller
//! reports the outcome back (`apply_fetch`, `mutation_succeeded`) and may get
//! a follow-up effect in return.
//!
//! Failures are not reported back at all: a failed request leaves every piece
//! of state exactly where it was.

use crate::model::car::Car;
use crate::model::form::{CarForm, Field, FormError};

/// A request the caller has to issue against the `/cars` collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// `GET /cars`, tagged so late responses can be recognised.
    Fetch { seq: u64 },
    /// `POST /cars`
    Create(Car),
    /// `PUT /cars/{id}`
    Update { id: u64, car: Car },
    /// `DELETE /cars/{id}`
    Delete { id: u64 },
}

/// A mutation that the remote collection acknowledged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    Created,
    Updated { id: u64 },
    Deleted { id: u64 },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarManager {
    cars: Vec<Car>,
    form: CarForm,
    editing: Option<u64>,
    /// Sequence number of the most recently issued fetch.
    issued_seq: u64,
    /// Sequence number of the fetch whose list is currently shown.
    applied_seq: u64,
}

impl CarManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn form(&self) -> &CarForm {
        &self.form
    }

    /// Identifier of the record being edited, `None` in create mode.
    pub fn editing(&self) -> Option<u64> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Starts a full-list fetch.
    pub fn fetch(&mut self) -> Effect {
        self.issued_seq += 1;
        Effect::Fetch {
            seq: self.issued_seq,
        }
    }

    /// Replaces the list with the response of fetch `seq`.
    ///
    /// Returns `false` and leaves the list untouched when a newer fetch has
    /// already been applied.
    pub fn apply_fetch(&mut self, seq: u64, cars: Vec<Car>) -> bool {
        if seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        self.cars = cars;
        true
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.form.set(field, value);
    }

    /// Turns the form into a create or update request, depending on the
    /// editing marker. Nothing changes locally until the request succeeds.
    pub fn submit(&self) -> Result<Effect, FormError> {
        let car = self.form.validate(self.editing)?;
        Ok(match self.editing {
            Some(id) => Effect::Update { id, car },
            None => Effect::Create(car),
        })
    }

    /// Loads `car` into the form and switches to edit mode.
    pub fn edit(&mut self, car: &Car) -> Result<(), FormError> {
        let id = car.id.ok_or(FormError::MissingId)?;
        self.form = CarForm::from_car(car);
        self.editing = Some(id);
        Ok(())
    }

    /// Drops the current edit and returns to create mode with an empty form.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.form.clear();
    }

    pub fn delete(&self, id: u64) -> Effect {
        Effect::Delete { id }
    }

    /// Records an acknowledged mutation and returns the list re-fetch that
    /// must follow it.
    ///
    /// The form is only reset if it still shows what was submitted: a create
    /// resets it while in create mode, an update or delete of record `id`
    /// leaves edit mode only if `id` is still the record being edited.
    pub fn mutation_succeeded(&mut self, mutation: Mutation) -> Effect {
        match mutation {
            Mutation::Created => {
                if self.editing.is_none() {
                    self.form.clear();
                }
            }
            Mutation::Updated { id } | Mutation::Deleted { id } => {
                if self.editing == Some(id) {
                    self.cancel_edit();
                }
            }
        }
        self.fetch()
    }
}
