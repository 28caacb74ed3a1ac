#![deny(missing_docs)]

//! # premio-core — Foundational Types for the premio Prize Claim
//!
//! Every other crate in the workspace depends on this one. It has no internal
//! crate dependencies and performs no I/O. It uses only `serde` and `thiserror` from
//! the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **One [`Field`] enum.** The four form fields are a closed set. Rules,
//!    error maps and wire names all match on it exhaustively.
//!
//! 2. **Validation is a pure function.** [`validate_field`] maps a field and
//!    its raw value to an optional [`FieldError`]. It never looks at the other
//!    fields.
//!
//! 3. **[`QrCode`] is never empty.** An empty query parameter is the same as
//!    no QR code at all, so the newtype rejects it at construction time.
//!
//! 4. **Remote outcomes are plain data.** [`QrVerification`],
//!    [`DuplicateCheck`] and [`SubmissionResult`] carry what the gateway
//!    decided; they do not know how it was decided.

pub mod error;
pub mod field;
pub mod form;
pub mod outcome;
pub mod qr;
pub mod validation;

// Re-export primary types at crate root for ergonomic imports.
pub use error::ValidationError;
pub use field::Field;
pub use form::{FieldErrors, RegistrationForm};
pub use outcome::{DuplicateCheck, QrVerification, SubmissionResult, SubmissionStatus};
pub use qr::QrCode;
pub use validation::{validate_field, FieldError};
