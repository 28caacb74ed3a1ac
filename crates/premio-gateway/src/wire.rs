//! Request and response bodies exchanged with the scripting endpoint.
//!
//! Every request is a JSON `POST` to the same URL; the `action` field
//! selects the operation. Field names are the service's own (Spanish) names.
//!
//! | `action` | Request fields | Response fields |
//! |----------|----------------|-----------------|
//! | `verificarQR` | `qr` | `activo`, `mensaje?` |
//! | `verificarDuplicado` | `telefono?`, `correo?` | `duplicado`, `telefonoDuplicado`, `correoDuplicado`, `mensaje?` |
//! | `registrarGanador` | `qr`, `nombre`, `apellido`, `telefono`, `correo` | `status`, `message?` or `mensaje?` |

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use premio_core::{DuplicateCheck, QrVerification, SubmissionResult, SubmissionStatus};

/// A request to the endpoint, tagged by `action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action")]
pub enum GatewayRequest<'a> {
    /// Ask whether a QR code is active.
    #[serde(rename = "verificarQR")]
    VerifyQr { qr: &'a str },

    /// Ask whether a phone number or email is already registered.
    #[serde(rename = "verificarDuplicado")]
    VerifyDuplicate {
        #[serde(skip_serializing_if = "Option::is_none")]
        telefono: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        correo: Option<&'a str>,
    },

    /// Record a prize claim.
    #[serde(rename = "registrarGanador")]
    RegisterWinner {
        qr: &'a str,
        nombre: &'a str,
        apellido: &'a str,
        telefono: &'a str,
        correo: &'a str,
    },
}

impl GatewayRequest<'_> {
    /// The `action` tag, used as the endpoint label in logs and errors.
    pub fn action(&self) -> &'static str {
        match self {
            Self::VerifyQr { .. } => "verificarQR",
            Self::VerifyDuplicate { .. } => "verificarDuplicado",
            Self::RegisterWinner { .. } => "registrarGanador",
        }
    }
}

/// Response to `verificarQR`.
///
/// Fields use `#[serde(default)]` so that a missing or `null` flag reads as
/// "not active" rather than failing the whole decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyQrResponse {
    /// Decoded leniently: `"true"` and `1` count as active; `""`, `0`,
    /// `"0"` and `"false"` do not.
    #[serde(default, deserialize_with = "truthy")]
    pub activo: Option<bool>,
    #[serde(default)]
    pub mensaje: Option<String>,
}

impl From<VerifyQrResponse> for QrVerification {
    fn from(r: VerifyQrResponse) -> Self {
        Self {
            active: r.activo.unwrap_or(false),
            message: r.mensaje,
        }
    }
}

/// Response to `verificarDuplicado`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyDuplicateResponse {
    #[serde(default)]
    pub duplicado: Option<bool>,
    #[serde(default)]
    pub telefono_duplicado: Option<bool>,
    #[serde(default)]
    pub correo_duplicado: Option<bool>,
    #[serde(default)]
    pub mensaje: Option<String>,
}

impl From<VerifyDuplicateResponse> for DuplicateCheck {
    fn from(r: VerifyDuplicateResponse) -> Self {
        let phone_duplicate = r.telefono_duplicado.unwrap_or(false);
        let email_duplicate = r.correo_duplicado.unwrap_or(false);
        Self {
            duplicate: r.duplicado.unwrap_or(phone_duplicate || email_duplicate),
            phone_duplicate,
            email_duplicate,
            message: r.mensaje,
            indeterminate: false,
        }
    }
}

/// Response to `registrarGanador`.
///
/// The service has answered with either `message` or `mensaje`, sometimes
/// both; `message` wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterWinnerResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub mensaje: Option<String>,
}

impl From<RegisterWinnerResponse> for SubmissionResult {
    /// Only an explicit `"success"` counts as success.
    fn from(r: RegisterWinnerResponse) -> Self {
        let status = match r.status.as_deref() {
            Some("success") => SubmissionStatus::Success,
            _ => SubmissionStatus::Error,
        };
        Self {
            status,
            message: r.message.or(r.mensaje),
        }
    }
}

/// Any JSON value the service might put in a boolean slot.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseFlag {
    Bool(bool),
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(Option::<LooseFlag>::deserialize(deserializer)?.map(|flag| match flag {
        LooseFlag::Bool(b) => b,
        LooseFlag::Number(n) => n != 0.0,
        LooseFlag::Text(s) => !s.is_empty() && s != "false" && s != "0",
        LooseFlag::Other(_) => true,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn verify_qr_request_shape() {
        let body = serde_json::to_value(GatewayRequest::VerifyQr { qr: "QR001" }).unwrap();
        assert_eq!(body, json!({"action": "verificarQR", "qr": "QR001"}));
    }

    #[test]
    fn duplicate_request_omits_absent_fields() {
        let body = serde_json::to_value(GatewayRequest::VerifyDuplicate {
            telefono: None,
            correo: Some("a@b.co"),
        })
        .unwrap();
        assert_eq!(body, json!({"action": "verificarDuplicado", "correo": "a@b.co"}));
    }

    #[test]
    fn missing_activo_means_inactive() {
        let r: VerifyQrResponse = serde_json::from_value(json!({"mensaje": "no existe"})).unwrap();
        let v = QrVerification::from(r);
        assert!(!v.active);
        assert_eq!(v.message.as_deref(), Some("no existe"));
    }

    #[test]
    fn null_activo_means_inactive() {
        let r: VerifyQrResponse = serde_json::from_value(json!({"activo": null})).unwrap();
        assert!(!QrVerification::from(r).active);
    }

    #[test]
    fn truthy_activo_values_are_accepted() {
        for (raw, active) in [
            (json!("true"), true),
            (json!(1), true),
            (json!("si"), true),
            (json!(0), false),
            (json!(""), false),
            (json!("false"), false),
        ] {
            let r: VerifyQrResponse = serde_json::from_value(json!({"activo": raw})).unwrap();
            assert_eq!(QrVerification::from(r).active, active, "activo = {raw}");
        }
    }

    #[test]
    fn duplicate_flag_falls_back_to_per_field_flags() {
        let r: VerifyDuplicateResponse =
            serde_json::from_value(json!({"telefonoDuplicado": true})).unwrap();
        let d = DuplicateCheck::from(r);
        assert!(d.duplicate);
        assert!(d.phone_duplicate);
        assert!(!d.email_duplicate);
        assert!(!d.indeterminate);
    }

    #[test]
    fn unknown_status_is_an_error() {
        let r: RegisterWinnerResponse =
            serde_json::from_value(json!({"status": "pending"})).unwrap();
        assert!(!SubmissionResult::from(r).is_success());
    }

    #[test]
    fn spanish_message_alias_is_accepted() {
        let r: RegisterWinnerResponse =
            serde_json::from_value(json!({"status": "error", "mensaje": "QR ya usado"})).unwrap();
        let s = SubmissionResult::from(r);
        assert_eq!(s.message.as_deref(), Some("QR ya usado"));
    }

    #[test]
    fn both_message_keys_decode_and_english_wins() {
        let r: RegisterWinnerResponse = serde_json::from_value(json!({
            "status": "success",
            "message": "Registered",
            "mensaje": "Registrado"
        }))
        .unwrap();
        let s = SubmissionResult::from(r);
        assert!(s.is_success());
        assert_eq!(s.message.as_deref(), Some("Registered"));
    }
}
