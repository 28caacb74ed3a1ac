//! # Form Fields
//!
//! The registration form has exactly four inputs. [`Field`] names them and
//! knows each one's label and whether the field is required.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One of the four registration form inputs.
///
/// Ordering follows the on-screen order, which is also the order used when
/// reporting missing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Given name of the winner.
    FirstName,
    /// Family name of the winner.
    LastName,
    /// Mobile phone number.
    Phone,
    /// Email address the ticket is sent to.
    Email,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 4] = [Field::FirstName, Field::LastName, Field::Phone, Field::Email];

    /// Canonical kebab-case name, as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "first-name",
            Self::LastName => "last-name",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Phone => "Phone",
            Self::Email => "Email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ValidationError;

    /// Accepts kebab-case, snake_case and camelCase spellings, plus the
    /// remote service's Spanish parameter names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-name" | "first_name" | "firstName" | "nombre" => Ok(Self::FirstName),
            "last-name" | "last_name" | "lastName" | "apellido" => Ok(Self::LastName),
            "phone" | "telefono" => Ok(Self::Phone),
            "email" | "correo" => Ok(Self::Email),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }
}
