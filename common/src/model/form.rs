//! The editable car form and its submission rules.
//!
//! The form holds exactly the three user-editable fields of a [`Car`]. It is
//! independent of the list until it is submitted; submitting turns it into
//! the request body via [`CarForm::validate`].

use thiserror::Error;

use crate::model::car::Car;

/// Reasons a form action is refused before any request is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// One of make, model or year is empty (or only whitespace). The
    /// message doubles as the alert text.
    #[error("Fill all fields!")]
    MissingFields,

    /// A record without an identifier cannot be edited.
    #[error("cannot edit a car that has no id")]
    MissingId,
}

/// One editable input of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Make,
    Model,
    Year,
}

/// Car-shaped value the user is composing or editing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarForm {
    pub make: String,
    pub model: String,
    pub year: String,
}

impl CarForm {
    /// Copies the editable fields of an existing record.
    pub fn from_car(car: &Car) -> Self {
        Self {
            make: car.make.clone(),
            model: car.model.clone(),
            year: car.year.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Make => &self.make,
            Field::Model => &self.model,
            Field::Year => &self.year,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Make => self.make = value,
            Field::Model => self.model = value,
            Field::Year => self.year = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Builds the request body for a submission addressed to `id`.
    ///
    /// Fails with [`FormError::MissingFields`] if any field is blank.
    pub fn validate(&self, id: Option<u64>) -> Result<Car, FormError> {
        let blank = [&self.make, &self.model, &self.year]
            .iter()
            .any(|value| value.trim().is_empty());
        if blank {
            return Err(FormError::MissingFields);
        }

        Ok(Car {
            id,
            make: self.make.clone(),
            model: self.model.clone(),
            year: self.year.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CarForm {
        CarForm {
            make: "Toyota".into(),
            model: "Vios".into(),
            year: "2020".into(),
        }
    }

    #[test]
    fn any_blank_field_is_rejected() {
        for field in [Field::Make, Field::Model, Field::Year] {
            for blank in ["", "   ", "\t"] {
                let mut form = filled();
                form.set(field, blank.to_string());
                assert_eq!(form.validate(None), Err(FormError::MissingFields));
            }
        }
    }

    #[test]
    fn filled_form_becomes_body() {
        let car = filled().validate(Some(4)).unwrap();
        assert_eq!(car.id, Some(4));
        assert_eq!(car.make, "Toyota");
        assert_eq!(car.year, "2020");
    }

    #[test]
    fn missing_fields_message_is_the_alert_text() {
        assert_eq!(FormError::MissingFields.to_string(), "Fill all fields!");
    }

    #[test]
    fn set_and_get_address_the_same_field() {
        let mut form = CarForm::default();
        form.set(Field::Model, "Civic".into());
        assert_eq!(form.get(Field::Model), "Civic");
        assert_eq!(form.get(Field::Make), "");
        form.clear();
        assert_eq!(form, CarForm::default());
    }
}
