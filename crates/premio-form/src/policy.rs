//! Submission policy knobs.

use serde::{Deserialize, Serialize};

/// How the submission sequence treats the duplicate-contact check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionPolicy {
    /// Ask the remote service whether the phone or email is already
    /// registered before sending the registration.
    pub check_duplicates: bool,
    /// Refuse to register when the duplicate check could not run. When
    /// `false`, an unreachable check is logged and the registration proceeds.
    pub block_on_indeterminate_duplicate: bool,
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self {
            check_duplicates: true,
            block_on_indeterminate_duplicate: false,
        }
    }
}
