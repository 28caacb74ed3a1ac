//! # Registration Form State
//!
//! [`RegistrationForm`] holds the four raw input values. [`FieldErrors`]
//! holds the current validation error of each field, if any. Both start empty
//! and both are owned by the claim session; nothing here is persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::validation::{validate_field, FieldError};

/// The winner's contact details as typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Mobile phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
}

impl RegistrationForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one field's value.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
        }
    }

    /// Overwrite one field's value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
        };
        *slot = value.into();
    }

    /// Fields that are still empty, in display order.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    /// Whether every field has a value.
    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|f| !self.get(*f).is_empty())
    }

    /// Clear all four fields.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Current per-field validation errors.
///
/// A field with no entry is valid. Only the field that changed is ever
/// recomputed; see [`FieldErrors::revalidate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    /// Create an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the error for `field` from its new `value`, leaving every
    /// other field's entry untouched. Returns the new error, if any.
    pub fn revalidate(&mut self, field: Field, value: &str) -> Option<FieldError> {
        let error = validate_field(field, value);
        match error {
            Some(e) => {
                self.0.insert(field, e);
            }
            None => {
                self.0.remove(&field);
            }
        }
        error
    }

    /// The current error for `field`, if any.
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Whether any field currently holds an error.
    pub fn has_errors(&self) -> bool {
        !self.0.is_empty()
    }

    /// Iterate over `(field, error)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }

    /// Drop every error.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegistrationForm {
        RegistrationForm {
            first_name: "Ana".into(),
            last_name: "Gómez".into(),
            phone: "3001234567".into(),
            email: "ana@example.com".into(),
        }
    }

    #[test]
    fn new_form_is_empty_and_incomplete() {
        let form = RegistrationForm::new();
        assert!(!form.is_complete());
        assert_eq!(form.missing_fields(), Field::ALL.to_vec());
    }

    #[test]
    fn set_and_get_each_field() {
        let mut form = RegistrationForm::new();
        form.set(Field::Phone, "3001234567");
        form.set(Field::Email, "x@y.co");
        assert_eq!(form.get(Field::Phone), "3001234567");
        assert_eq!(form.get(Field::Email), "x@y.co");
        assert_eq!(form.missing_fields(), vec![Field::FirstName, Field::LastName]);
    }

    #[test]
    fn reset_clears_all_fields() {
        let mut form = filled();
        assert!(form.is_complete());
        form.reset();
        assert_eq!(form, RegistrationForm::default());
    }

    #[test]
    fn revalidate_touches_only_the_changed_field() {
        let mut errors = FieldErrors::new();
        errors.revalidate(Field::FirstName, "Ana1");
        errors.revalidate(Field::Phone, "2");
        assert_eq!(errors.get(Field::FirstName), Some(FieldError::DigitsNotAllowed));
        assert_eq!(errors.get(Field::Phone), Some(FieldError::MustStartWith3));

        // Fixing the phone leaves the name error in place.
        assert_eq!(errors.revalidate(Field::Phone, "3001234567"), None);
        assert_eq!(errors.get(Field::Phone), None);
        assert_eq!(errors.get(Field::FirstName), Some(FieldError::DigitsNotAllowed));
        assert!(errors.has_errors());
    }

    #[test]
    fn clear_drops_every_error() {
        let mut errors = FieldErrors::new();
        errors.revalidate(Field::Email, "nope");
        errors.clear();
        assert!(!errors.has_errors());
        assert_eq!(errors.iter().count(), 0);
    }

    #[test]
    fn errors_serialize_as_a_flat_map() {
        let mut errors = FieldErrors::new();
        errors.revalidate(Field::Email, "nope");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"email": "missing_at_or_dot"}));
    }
}
