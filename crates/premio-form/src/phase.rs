//! # Claim Phase State Machine
//!
//! The page a visitor sees is decided by a small linear machine:
//!
//! ```text
//!                    ┌──inactive / no code──▶ INVALID
//! VERIFYING ─────────┤
//!                    └──active──▶ FORM_READY ─registered──▶ SUCCESS
//! ```
//!
//! `INVALID` and `SUCCESS` are terminal. There are no cycles: a visitor with
//! a dead code reloads the page to try again.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TransitionError;

/// Which view the claim page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimPhase {
    /// Waiting for the remote QR check. Initial state.
    Verifying,
    /// No code, or the code is not active. Terminal.
    Invalid,
    /// The code is active and the form accepts input.
    FormReady,
    /// The claim was registered. Terminal.
    Success,
}

impl ClaimPhase {
    /// The canonical state name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Verifying => "VERIFYING",
            Self::Invalid => "INVALID",
            Self::FormReady => "FORM_READY",
            Self::Success => "SUCCESS",
        }
    }

    /// Whether no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Invalid | Self::Success)
    }

    /// Whether `self → next` is an edge of the machine.
    pub fn can_transition_to(&self, next: ClaimPhase) -> bool {
        matches!(
            (self, next),
            (Self::Verifying, Self::Invalid)
                | (Self::Verifying, Self::FormReady)
                | (Self::FormReady, Self::Success)
        )
    }

    /// Move to `next`, or explain why that edge does not exist.
    pub fn transition(self, next: ClaimPhase) -> Result<ClaimPhase, TransitionError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(TransitionError::InvalidTransition {
                from: self.name(),
                to: next.name(),
            })
        }
    }
}

impl fmt::Display for ClaimPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ClaimPhase; 4] = [
        ClaimPhase::Verifying,
        ClaimPhase::Invalid,
        ClaimPhase::FormReady,
        ClaimPhase::Success,
    ];

    #[test]
    fn valid_edges() {
        assert_eq!(
            ClaimPhase::Verifying.transition(ClaimPhase::Invalid).unwrap(),
            ClaimPhase::Invalid
        );
        assert_eq!(
            ClaimPhase::Verifying.transition(ClaimPhase::FormReady).unwrap(),
            ClaimPhase::FormReady
        );
        assert_eq!(
            ClaimPhase::FormReady.transition(ClaimPhase::Success).unwrap(),
            ClaimPhase::Success
        );
    }

    #[test]
    fn terminal_phases_have_no_exits() {
        for from in [ClaimPhase::Invalid, ClaimPhase::Success] {
            assert!(from.is_terminal());
            for to in ALL {
                assert!(from.transition(to).is_err(), "{from} -> {to} must be rejected");
            }
        }
    }

    #[test]
    fn no_backward_edges() {
        assert!(ClaimPhase::FormReady.transition(ClaimPhase::Verifying).is_err());
        assert!(ClaimPhase::FormReady.transition(ClaimPhase::Invalid).is_err());
        assert!(ClaimPhase::Verifying.transition(ClaimPhase::Success).is_err());
    }

    #[test]
    fn rejection_names_both_states() {
        let err = ClaimPhase::Invalid
            .transition(ClaimPhase::FormReady)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid claim phase transition from INVALID to FORM_READY"
        );
    }
}
