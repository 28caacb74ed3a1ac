//! # premio-form — Claim Form Controller
//!
//! Owns everything a claim page visit knows and decides:
//!
//! - **Phase machine** ([`phase`]): `VERIFYING → {INVALID, FORM_READY}`,
//!   `FORM_READY → SUCCESS`. No cycles.
//! - **Session controller** ([`session`]): the load-time QR gate, per-field
//!   validation on change, and the guarded submission sequence.
//! - **Policy** ([`policy`]): whether the duplicate-contact check runs and
//!   what happens when it cannot.
//!
//! All remote work goes through [`premio_gateway::PrizeGateway`], which
//! never fails; the controller only ever sees outcomes.

pub mod error;
pub mod phase;
pub mod policy;
pub mod session;

pub use error::{SubmitRejection, TransitionError, REGISTRATION_FAILED};
pub use phase::ClaimPhase;
pub use policy::SubmissionPolicy;
pub use session::{ClaimSession, ClaimSnapshot, InvalidReason, PendingSubmission, SubmissionReply};
