//! # Remote Outcomes
//!
//! What the remote gateway reports back for each operation, already
//! normalized: transport failures have been folded into the negative
//! outcome by the time a value of these types exists.

use serde::{Deserialize, Serialize};

/// Whether a QR code may be used to claim a prize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrVerification {
    /// The code exists and has not been redeemed or disabled.
    pub active: bool,
    /// Optional explanation from the remote service or the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl QrVerification {
    /// An inactive result with no message.
    pub fn inactive() -> Self {
        Self::default()
    }
}

/// Whether a phone number or email has already claimed a prize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateCheck {
    /// Either contact detail is already registered.
    pub duplicate: bool,
    /// The phone number is already registered.
    #[serde(default)]
    pub phone_duplicate: bool,
    /// The email address is already registered.
    #[serde(default)]
    pub email_duplicate: bool,
    /// Optional explanation from the remote service or the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The check could not be completed and `duplicate` is a fallback
    /// value, not an answer from the remote service.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub indeterminate: bool,
}

impl DuplicateCheck {
    /// A definite "not a duplicate" result.
    pub fn clear() -> Self {
        Self::default()
    }
}

/// Final status of a registration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// The claim was recorded.
    Success,
    /// The claim was refused or could not be sent.
    Error,
}

/// Result of a registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// Success or error.
    pub status: SubmissionStatus,
    /// Optional explanation, shown to the user on error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmissionResult {
    /// A successful registration.
    pub fn success(message: Option<String>) -> Self {
        Self {
            status: SubmissionStatus::Success,
            message,
        }
    }

    /// A failed registration.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: SubmissionStatus::Error,
            message: Some(message.into()),
        }
    }

    /// Whether the claim was recorded.
    pub fn is_success(&self) -> bool {
        self.status == SubmissionStatus::Success
    }
}
