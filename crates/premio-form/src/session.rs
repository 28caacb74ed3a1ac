//! # Claim Session Controller
//!
//! [`ClaimSession`] is the single owned state record of one page visit: the
//! current [`ClaimPhase`], the session's QR code, the form values, the
//! per-field errors and the submitting flag. Every event (page load, field
//! change, submit) is an explicit method call on it.
//!
//! ## Submission in three steps
//!
//! A submission is split so that an event loop can keep handling field edits
//! while the remote call is pending:
//!
//! 1. [`ClaimSession::begin_submission`] runs the local checks and sets the
//!    submitting flag. It is synchronous, so a second call before step 3
//!    is always rejected.
//! 2. [`PendingSubmission::send`] performs the remote calls on a snapshot of
//!    the form. It does not touch the session.
//! 3. [`ClaimSession::finish_submission`] clears the flag and applies the
//!    outcome.
//!
//! [`ClaimSession::submit`] chains the three for callers that don't need the
//! split.

use serde::Serialize;
use url::Url;

use premio_core::{
    DuplicateCheck, Field, FieldError, FieldErrors, QrCode, QrVerification, RegistrationForm,
    SubmissionResult,
};
use premio_gateway::client::DUPLICATE_CHECK_FAILED;
use premio_gateway::PrizeGateway;

use crate::error::{SubmitRejection, TransitionError, REGISTRATION_FAILED};
use crate::phase::ClaimPhase;
use crate::policy::SubmissionPolicy;

/// Why the page ended in [`ClaimPhase::Invalid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum InvalidReason {
    /// The page URL carried no QR code.
    MissingCode,
    /// The remote service reported the code as inactive, or could not be
    /// reached.
    Inactive {
        /// The remote or fail-closed message, if any.
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

/// State of one claim page visit.
#[derive(Debug, Clone)]
pub struct ClaimSession {
    phase: ClaimPhase,
    qr_code: Option<QrCode>,
    invalid_reason: Option<InvalidReason>,
    form: RegistrationForm,
    errors: FieldErrors,
    submitting: bool,
    policy: SubmissionPolicy,
}

impl ClaimSession {
    /// A fresh session in [`ClaimPhase::Verifying`] with an empty form.
    pub fn new(policy: SubmissionPolicy) -> Self {
        Self {
            phase: ClaimPhase::Verifying,
            qr_code: None,
            invalid_reason: None,
            form: RegistrationForm::new(),
            errors: FieldErrors::new(),
            submitting: false,
            policy,
        }
    }

    /// Create a session and run the load-time QR gate against `page_url`.
    pub async fn load<G: PrizeGateway + ?Sized>(
        gateway: &G,
        page_url: &Url,
        policy: SubmissionPolicy,
    ) -> Result<Self, TransitionError> {
        let mut session = Self::new(policy);
        session.verify(gateway, page_url).await?;
        Ok(session)
    }

    /// Run the load-time QR gate: extract the code from `page_url`, check it
    /// remotely, and move to `FormReady` or `Invalid`.
    ///
    /// Without a code no remote call is made.
    pub async fn verify<G: PrizeGateway + ?Sized>(
        &mut self,
        gateway: &G,
        page_url: &Url,
    ) -> Result<ClaimPhase, TransitionError> {
        if self.phase != ClaimPhase::Verifying {
            return Err(TransitionError::AlreadyVerified(self.phase.name()));
        }
        let code = gateway.extract_qr_code(page_url);
        let verification = match &code {
            Some(c) => gateway.verify_qr_active(Some(c)).await,
            None => QrVerification::inactive(),
        };
        self.apply_verification(code, verification)
    }

    /// Apply the outcome of the QR check.
    pub fn apply_verification(
        &mut self,
        code: Option<QrCode>,
        verification: QrVerification,
    ) -> Result<ClaimPhase, TransitionError> {
        let (next, reason) = match (&code, verification.active) {
            (None, _) => (ClaimPhase::Invalid, Some(InvalidReason::MissingCode)),
            (Some(_), true) => (ClaimPhase::FormReady, None),
            (Some(_), false) => (
                ClaimPhase::Invalid,
                Some(InvalidReason::Inactive {
                    message: verification.message,
                }),
            ),
        };
        self.phase = self.phase.transition(next)?;
        self.qr_code = code;
        self.invalid_reason = reason;
        tracing::info!(
            phase = %self.phase,
            qr = self.qr_code.as_ref().map(QrCode::as_str).unwrap_or("-"),
            "QR gate resolved"
        );
        Ok(self.phase)
    }

    /// Store a new value for `field` and recompute that field's error only.
    ///
    /// Edits are accepted while a submission is in flight; they do not affect
    /// the snapshot already being sent.
    pub fn handle_change(&mut self, field: Field, value: impl Into<String>) -> Option<FieldError> {
        let value = value.into();
        let error = self.errors.revalidate(field, &value);
        self.form.set(field, value);
        if let Some(e) = error {
            tracing::debug!(%field, error = %e, "field rejected");
        }
        error
    }

    /// Run the local checks and enter the submitting state.
    ///
    /// No remote call is made if this returns an error.
    pub fn begin_submission(&mut self) -> Result<PendingSubmission, SubmitRejection> {
        if self.phase != ClaimPhase::FormReady {
            return Err(SubmitRejection::NotReady { phase: self.phase });
        }
        let missing = self.form.missing_fields();
        if !missing.is_empty() {
            return Err(SubmitRejection::IncompleteForm { missing });
        }
        if self.errors.has_errors() {
            let fields = self.errors.iter().map(|(f, _)| f).collect();
            return Err(SubmitRejection::InvalidFields { fields });
        }
        if self.submitting {
            return Err(SubmitRejection::AlreadySubmitting);
        }
        let Some(qr_code) = self.qr_code.clone() else {
            return Err(SubmitRejection::NotReady { phase: self.phase });
        };

        self.submitting = true;
        tracing::info!(qr = %qr_code, "submission started");
        Ok(PendingSubmission {
            form: self.form.clone(),
            qr_code,
            policy: self.policy,
        })
    }

    /// Leave the submitting state and apply the remote outcome.
    ///
    /// On success the session moves to [`ClaimPhase::Success`] and the form
    /// and its errors are cleared. On any rejection the form is kept.
    pub fn finish_submission(
        &mut self,
        reply: SubmissionReply,
    ) -> Result<SubmissionResult, SubmitRejection> {
        if !self.submitting {
            return Err(SubmitRejection::NotSubmitting);
        }
        self.submitting = false;

        match reply {
            SubmissionReply::Duplicate(check) => {
                let message = duplicate_message(&check);
                tracing::info!(
                    phone = check.phone_duplicate,
                    email = check.email_duplicate,
                    "submission blocked by duplicate check"
                );
                Err(SubmitRejection::Duplicate { message })
            }
            SubmissionReply::DuplicateCheckUnavailable(check) => {
                let message = non_empty(check.message)
                    .unwrap_or_else(|| DUPLICATE_CHECK_FAILED.to_string());
                tracing::warn!("submission blocked: duplicate check unavailable");
                Err(SubmitRejection::DuplicateCheckUnavailable { message })
            }
            SubmissionReply::Registered(result) if result.is_success() => {
                let phase = self.phase;
                self.phase = phase
                    .transition(ClaimPhase::Success)
                    .map_err(|_| SubmitRejection::NotReady { phase })?;
                self.form.reset();
                self.errors.clear();
                tracing::info!("prize claim registered");
                Ok(result)
            }
            SubmissionReply::Registered(result) => {
                let message =
                    non_empty(result.message).unwrap_or_else(|| REGISTRATION_FAILED.to_string());
                tracing::info!(%message, "registration refused");
                Err(SubmitRejection::Remote { message })
            }
        }
    }

    /// Run the whole submission sequence against `gateway`.
    pub async fn submit<G: PrizeGateway + ?Sized>(
        &mut self,
        gateway: &G,
    ) -> Result<SubmissionResult, SubmitRejection> {
        let pending = self.begin_submission()?;
        let reply = pending.send(gateway).await;
        self.finish_submission(reply)
    }

    /// The current phase.
    pub fn phase(&self) -> ClaimPhase {
        self.phase
    }

    /// The session's QR code, once verified.
    pub fn qr_code(&self) -> Option<&QrCode> {
        self.qr_code.as_ref()
    }

    /// Why the page is invalid, in [`ClaimPhase::Invalid`].
    pub fn invalid_reason(&self) -> Option<&InvalidReason> {
        self.invalid_reason.as_ref()
    }

    /// The current form values.
    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    /// The current per-field errors.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The policy this session submits with.
    pub fn policy(&self) -> SubmissionPolicy {
        self.policy
    }

    /// A serializable view of the session.
    pub fn snapshot(&self) -> ClaimSnapshot {
        ClaimSnapshot {
            phase: self.phase,
            qr_code: self.qr_code.as_ref().map(|c| c.as_str().to_string()),
            invalid_reason: self.invalid_reason.clone(),
            form: self.form.clone(),
            errors: self.errors.clone(),
            submitting: self.submitting,
        }
    }
}

/// A submission that passed the local checks and is ready to send.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    form: RegistrationForm,
    qr_code: QrCode,
    policy: SubmissionPolicy,
}

impl PendingSubmission {
    /// The form values being sent.
    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    /// The QR code being claimed.
    pub fn qr_code(&self) -> &QrCode {
        &self.qr_code
    }

    /// Perform the remote part: the duplicate check (if enabled by policy),
    /// then the registration.
    pub async fn send<G: PrizeGateway + ?Sized>(self, gateway: &G) -> SubmissionReply {
        if self.policy.check_duplicates {
            let check = gateway
                .verify_duplicate(Some(&self.form.phone), Some(&self.form.email))
                .await;
            if check.duplicate {
                return SubmissionReply::Duplicate(check);
            }
            if check.indeterminate {
                if self.policy.block_on_indeterminate_duplicate {
                    return SubmissionReply::DuplicateCheckUnavailable(check);
                }
                tracing::warn!(
                    qr = %self.qr_code,
                    "duplicate check unavailable, registering without it"
                );
            }
        }
        SubmissionReply::Registered(gateway.register_winner(&self.form, &self.qr_code).await)
    }
}

/// What the remote part of a submission produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionReply {
    /// The duplicate check found the phone or email already registered.
    Duplicate(DuplicateCheck),
    /// The duplicate check could not run and policy blocks on that.
    DuplicateCheckUnavailable(DuplicateCheck),
    /// The registration call returned.
    Registered(SubmissionResult),
}

/// Serializable view of a [`ClaimSession`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimSnapshot {
    /// Current phase.
    pub phase: ClaimPhase,
    /// The session's QR code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    /// Why the page is invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_reason: Option<InvalidReason>,
    /// Form values.
    pub form: RegistrationForm,
    /// Per-field errors.
    pub errors: FieldErrors,
    /// Submission in flight.
    pub submitting: bool,
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty())
}

fn duplicate_message(check: &DuplicateCheck) -> String {
    if let Some(m) = non_empty(check.message.clone()) {
        return m;
    }
    match (check.phone_duplicate, check.email_duplicate) {
        (true, true) => "This phone number and email are already registered",
        (true, false) => "This phone number is already registered",
        (false, true) => "This email is already registered",
        (false, false) => "These contact details are already registered",
    }
    .to_string()
}
