//! Controller errors.
//!
//! [`SubmitRejection`] is the blocking message a visitor sees when a
//! submission does not go through. Its `Display` text is the message itself.

use thiserror::Error;

use premio_core::Field;

use crate::phase::ClaimPhase;

/// Shown when the remote service refuses a registration without saying why.
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

/// An attempted move between claim phases that the machine does not allow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// The edge does not exist.
    #[error("invalid claim phase transition from {from} to {to}")]
    InvalidTransition {
        /// The current phase name.
        from: &'static str,
        /// The requested phase name.
        to: &'static str,
    },

    /// The QR gate runs once per session.
    #[error("QR code already verified; claim phase is {0}")]
    AlreadyVerified(&'static str),
}

/// Why a submission was blocked or failed.
///
/// Every variant leaves the session interactive: form values are kept so the
/// visitor can correct them and try again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    /// The form is not open (still verifying, invalid code, or already claimed).
    #[error("the claim form is not available ({phase})")]
    NotReady {
        /// The phase at the time of the attempt.
        phase: ClaimPhase,
    },

    /// A previous submission has not resolved yet.
    #[error("a submission is already in progress")]
    AlreadySubmitting,

    /// [`finish_submission`](crate::ClaimSession::finish_submission) was
    /// called without a matching `begin_submission`.
    #[error("no submission is in progress")]
    NotSubmitting,

    /// At least one field is empty.
    #[error("Please complete all fields")]
    IncompleteForm {
        /// The empty fields, in display order.
        missing: Vec<Field>,
    },

    /// At least one field currently holds a validation error.
    #[error("Please correct the errors before continuing")]
    InvalidFields {
        /// The fields with errors, in display order.
        fields: Vec<Field>,
    },

    /// The phone number or email already claimed a prize.
    #[error("{message}")]
    Duplicate {
        /// Text to show.
        message: String,
    },

    /// The duplicate check could not run and policy forbids proceeding.
    #[error("{message}")]
    DuplicateCheckUnavailable {
        /// Text to show.
        message: String,
    },

    /// The remote service refused the registration or could not be reached.
    #[error("{message}")]
    Remote {
        /// The remote message, or [`REGISTRATION_FAILED`].
        message: String,
    },
}
