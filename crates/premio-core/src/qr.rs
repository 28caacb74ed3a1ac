//! # QR Code Identifier
//!
//! The opaque code carried in the scanned URL (for example `QR001`). The
//! client never interprets it; it only forwards it to the remote service.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A non-empty QR code identifier, fixed for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QrCode(String);

impl QrCode {
    /// Create a QR code from a raw string.
    ///
    /// The value is stored as given. Surrounding whitespace is not stripped
    /// because the remote service matches codes exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyQrCode`] if the value is empty or
    /// consists only of whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::EmptyQrCode);
        }
        Ok(Self(s))
    }

    /// Access the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QrCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for QrCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QrCode> for String {
    fn from(code: QrCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_opaque_codes() {
        let code = QrCode::new("QR001").unwrap();
        assert_eq!(code.as_str(), "QR001");
        assert_eq!(code.to_string(), "QR001");
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert_eq!(QrCode::new(""), Err(ValidationError::EmptyQrCode));
        assert_eq!(QrCode::new("   "), Err(ValidationError::EmptyQrCode));
    }

    #[test]
    fn deserialization_enforces_non_empty() {
        let ok: QrCode = serde_json::from_str("\"QR002\"").unwrap();
        assert_eq!(ok.as_str(), "QR002");
        assert!(serde_json::from_str::<QrCode>("\"\"").is_err());
    }
}
