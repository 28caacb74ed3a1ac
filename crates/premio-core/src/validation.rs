//! # Field Validation Rules
//!
//! Per-field checks run on every keystroke. Each rule looks at one field's
//! raw value only; cross-field checks (all fields filled, no outstanding
//! errors) belong to the submission sequence, not here.
//!
//! | Field | Rule | Error |
//! |-------|------|-------|
//! | first/last name | no ASCII digit | [`FieldError::DigitsNotAllowed`] |
//! | phone | starts with `3`, then 10 characters, then digits only | first failing rule |
//! | email | contains `@` and `.` | [`FieldError::MissingAtOrDot`] |
//!
//! Empty phone and email values are not errors here. Emptiness is caught
//! when the form is submitted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Required length of a phone number, in characters.
pub const PHONE_LENGTH: usize = 10;

/// Required leading digit of a phone number.
pub const PHONE_PREFIX: char = '3';

/// A single field's validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    /// A name contains a digit.
    DigitsNotAllowed,
    /// A phone number does not start with `3`.
    MustStartWith3,
    /// A phone number is not exactly 10 characters long.
    MustHave10Digits,
    /// A phone number contains something other than digits.
    DigitsOnly,
    /// An email address lacks `@` or `.`.
    MissingAtOrDot,
}

impl FieldError {
    /// The message shown next to the input.
    pub fn message(&self) -> &'static str {
        match self {
            Self::DigitsNotAllowed => "No digits allowed",
            Self::MustStartWith3 => "Must start with 3",
            Self::MustHave10Digits => "Must have 10 digits",
            Self::DigitsOnly => "Digits only",
            Self::MissingAtOrDot => "Must contain @ and .",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Validate one field's raw value.
///
/// Returns `None` when the value is acceptable.
pub fn validate_field(field: Field, value: &str) -> Option<FieldError> {
    match field {
        Field::FirstName | Field::LastName => validate_name(value),
        Field::Phone => validate_phone(value),
        Field::Email => validate_email(value),
    }
}

fn validate_name(value: &str) -> Option<FieldError> {
    value
        .chars()
        .any(|c| c.is_ascii_digit())
        .then_some(FieldError::DigitsNotAllowed)
}

// Rule order matters: the first failing check is the one reported.
fn validate_phone(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return None;
    }
    if !value.starts_with(PHONE_PREFIX) {
        return Some(FieldError::MustStartWith3);
    }
    if value.chars().count() != PHONE_LENGTH {
        return Some(FieldError::MustHave10Digits);
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Some(FieldError::DigitsOnly);
    }
    None
}

fn validate_email(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return None;
    }
    if !value.contains('@') || !value.contains('.') {
        return Some(FieldError::MissingAtOrDot);
    }
    None
}
