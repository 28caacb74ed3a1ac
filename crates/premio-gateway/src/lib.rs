//! # premio-gateway -- Typed client for the prize-claim scripting endpoint
//!
//! The remote service (a spreadsheet-backed web app) is the system of record
//! for QR codes and registrations. This crate is the only code that talks to
//! it. It offers four logical operations:
//!
//! - **Extract QR code** from the scanned page URL (no I/O)
//! - **Verify QR code** is active (`verificarQR`)
//! - **Verify duplicate** phone or email (`verificarDuplicado`)
//! - **Register winner** (`registrarGanador`)
//!
//! ## Fail-closed boundary
//!
//! No error leaves this crate through [`PrizeGateway`]. A transport failure,
//! a non-2xx status or an undecodable body becomes the negative outcome:
//! an inactive QR code, a failed registration, or a "not duplicate" result
//! flagged as [`indeterminate`](premio_core::DuplicateCheck::indeterminate).
//! Each call is a single attempt with no retry.

pub mod client;
pub mod config;
pub mod error;
pub mod page;
pub mod wire;

pub use client::GatewayClient;
pub use config::{ConfigError, GatewayConfig, DEFAULT_QR_PARAM};
pub use error::GatewayError;
pub use page::extract_qr_code;

use url::Url;

use premio_core::{DuplicateCheck, QrCode, QrVerification, RegistrationForm, SubmissionResult};

/// The remote gateway as seen by the claim controller.
///
/// Implementations never fail: every remote problem is already folded into
/// the returned outcome. [`GatewayClient`] is the HTTP implementation; tests
/// substitute in-memory doubles.
#[async_trait::async_trait]
pub trait PrizeGateway: Send + Sync {
    /// Name of the page query parameter that carries the QR code.
    fn qr_param(&self) -> &str {
        DEFAULT_QR_PARAM
    }

    /// Read the QR code from the page URL.
    fn extract_qr_code(&self, page_url: &Url) -> Option<QrCode> {
        page::extract_qr_code(page_url, self.qr_param())
    }

    /// Check whether `code` is active. `None` is inactive without a request.
    async fn verify_qr_active(&self, code: Option<&QrCode>) -> QrVerification;

    /// Check whether `phone` or `email` is already registered. Both absent
    /// (or empty) is "not duplicate" without a request.
    async fn verify_duplicate(&self, phone: Option<&str>, email: Option<&str>) -> DuplicateCheck;

    /// Record a prize claim.
    async fn register_winner(&self, form: &RegistrationForm, code: &QrCode) -> SubmissionResult;
}
