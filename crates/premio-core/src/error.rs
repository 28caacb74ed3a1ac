//! # Error Types
//!
//! Construction-time errors for the domain newtypes. Per-field form errors
//! are not errors in this sense: they are ordinary values
//! ([`FieldError`](crate::FieldError)) shown next to the input.

use thiserror::Error;

/// Validation errors for domain primitive newtypes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A QR code identifier was empty or whitespace only.
    #[error("QR code must not be empty")]
    EmptyQrCode,

    /// A field name did not match any of the four form fields.
    #[error("unknown form field: \"{0}\" (expected first-name, last-name, phone or email)")]
    UnknownField(String),
}
