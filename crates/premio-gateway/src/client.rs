//! Typed client for the prize-claim scripting endpoint.
//!
//! One URL, three actions, one attempt per call. The `try_*` methods return
//! [`GatewayError`] on failure; the [`PrizeGateway`] implementation wraps
//! them and substitutes the fail-closed outcome.

use std::time::Duration;

use serde::de::DeserializeOwned;

use premio_core::{DuplicateCheck, QrCode, QrVerification, RegistrationForm, SubmissionResult};

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::wire::{GatewayRequest, RegisterWinnerResponse, VerifyDuplicateResponse, VerifyQrResponse};
use crate::PrizeGateway;

/// Message attached to an inactive result when the QR check could not run.
pub const QR_CHECK_FAILED: &str = "Could not verify the QR code";

/// Message attached to a non-duplicate result when the check could not run.
pub const DUPLICATE_CHECK_FAILED: &str = "Could not check for duplicate registrations";

/// Message attached to an error result when registration could not be sent.
pub const CONNECTION_ERROR: &str = "Connection error. Please try again.";

/// Client for the remote scripting endpoint.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl GatewayClient {
    /// Create a new gateway client from configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| GatewayError::Http {
            endpoint: "client_init".into(),
            source: e,
        })?;
        Ok(Self { http, config })
    }

    /// Create a client from `PREMIO_*` environment variables.
    ///
    /// See [`GatewayConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::new(GatewayConfig::from_env()?)
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Ask whether `code` is active.
    pub async fn try_verify_qr_active(
        &self,
        code: &QrCode,
    ) -> Result<QrVerification, GatewayError> {
        let resp: VerifyQrResponse = self
            .send(&GatewayRequest::VerifyQr { qr: code.as_str() })
            .await?;
        Ok(resp.into())
    }

    /// Ask whether `phone` or `email` is already registered.
    ///
    /// Sends whichever of the two is present; the caller ensures at least
    /// one is.
    pub async fn try_verify_duplicate(
        &self,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<DuplicateCheck, GatewayError> {
        let resp: VerifyDuplicateResponse = self
            .send(&GatewayRequest::VerifyDuplicate {
                telefono: phone,
                correo: email,
            })
            .await?;
        Ok(resp.into())
    }

    /// Record a prize claim for `form` under `code`.
    pub async fn try_register_winner(
        &self,
        form: &RegistrationForm,
        code: &QrCode,
    ) -> Result<SubmissionResult, GatewayError> {
        let resp: RegisterWinnerResponse = self
            .send(&GatewayRequest::RegisterWinner {
                qr: code.as_str(),
                nombre: &form.first_name,
                apellido: &form.last_name,
                telefono: &form.phone,
                correo: &form.email,
            })
            .await?;
        Ok(resp.into())
    }

    /// POST `req` as JSON and decode the JSON response.
    async fn send<T: DeserializeOwned>(&self, req: &GatewayRequest<'_>) -> Result<T, GatewayError> {
        let endpoint = req.action();
        tracing::debug!(action = endpoint, url = %self.config.endpoint_url, "sending gateway request");

        let resp = self
            .http
            .post(self.config.endpoint_url.clone())
            .json(req)
            .send()
            .await
            .map_err(|e| GatewayError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(GatewayError::ApiError {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        resp.json().await.map_err(|e| GatewayError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })
    }
}

#[async_trait::async_trait]
impl PrizeGateway for GatewayClient {
    fn qr_param(&self) -> &str {
        &self.config.qr_param
    }

    async fn verify_qr_active(&self, code: Option<&QrCode>) -> QrVerification {
        let Some(code) = code else {
            return QrVerification::inactive();
        };
        match self.try_verify_qr_active(code).await {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(qr = %code, "QR verification failed, treating code as inactive: {e}");
                QrVerification {
                    active: false,
                    message: Some(QR_CHECK_FAILED.into()),
                }
            }
        }
    }

    async fn verify_duplicate(&self, phone: Option<&str>, email: Option<&str>) -> DuplicateCheck {
        let phone = phone.filter(|s| !s.is_empty());
        let email = email.filter(|s| !s.is_empty());
        if phone.is_none() && email.is_none() {
            return DuplicateCheck::clear();
        }
        match self.try_verify_duplicate(phone, email).await {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!(
                    "duplicate check failed, result is indeterminate and reported as not duplicate: {e}"
                );
                DuplicateCheck {
                    message: Some(DUPLICATE_CHECK_FAILED.into()),
                    indeterminate: true,
                    ..DuplicateCheck::clear()
                }
            }
        }
    }

    async fn register_winner(&self, form: &RegistrationForm, code: &QrCode) -> SubmissionResult {
        match self.try_register_winner(form, code).await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(qr = %code, "winner registration failed: {e}");
                SubmissionResult::error(CONNECTION_ERROR)
            }
        }
    }
}
