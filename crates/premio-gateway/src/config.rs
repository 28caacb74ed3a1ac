//! Gateway client configuration.
//!
//! The endpoint URL has no default: every deployment of the scripting
//! service gets its own URL. Load it from the environment, from a config
//! file (the struct is `Deserialize`), or build it explicitly for tests.

use serde::{Deserialize, Serialize};
use url::Url;

/// Query parameter that carries the QR code in the scanned page URL.
pub const DEFAULT_QR_PARAM: &str = "qr";

/// Configuration for connecting to the remote scripting endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Full URL of the deployed web app. All operations are sent here.
    pub endpoint_url: Url,
    /// Name of the page query parameter holding the QR code.
    #[serde(default = "default_qr_param")]
    pub qr_param: String,
    /// Request timeout in seconds. `None` leaves the HTTP client default
    /// (no timeout).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_qr_param() -> String {
    DEFAULT_QR_PARAM.to_string()
}

impl GatewayConfig {
    /// Configuration for `endpoint_url` with default settings.
    pub fn new(endpoint_url: Url) -> Self {
        Self {
            endpoint_url,
            qr_param: default_qr_param(),
            timeout_secs: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `PREMIO_GATEWAY_URL` (required)
    /// - `PREMIO_QR_PARAM` (default: `qr`)
    /// - `PREMIO_TIMEOUT_SECS` (default: unset, no timeout)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var("PREMIO_GATEWAY_URL").map_err(|_| ConfigError::MissingEndpoint)?;
        let endpoint_url = parse_url("PREMIO_GATEWAY_URL", &raw)?;

        let qr_param = std::env::var("PREMIO_QR_PARAM")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(default_qr_param);

        let timeout_secs = match std::env::var("PREMIO_TIMEOUT_SECS") {
            Ok(s) => Some(
                s.parse()
                    .map_err(|_| ConfigError::InvalidTimeout(s.clone()))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            endpoint_url,
            qr_param,
            timeout_secs,
        })
    }

    /// Create a configuration pointing at a local mock server (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `base` is not a valid URL.
    pub fn local_mock(base: &str) -> Result<Self, ConfigError> {
        let mut config = Self::new(parse_url("local_mock", &format!("{base}/exec"))?);
        config.timeout_secs = Some(5);
        Ok(config)
    }
}

fn parse_url(source: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(source.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PREMIO_GATEWAY_URL environment variable is required")]
    MissingEndpoint,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid timeout \"{0}\": expected a whole number of seconds")]
    InvalidTimeout(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn local_mock_builds_valid_config() {
        let cfg = GatewayConfig::local_mock("http://127.0.0.1:9000").unwrap();
        assert_eq!(cfg.endpoint_url.as_str(), "http://127.0.0.1:9000/exec");
        assert_eq!(cfg.qr_param, "qr");
        assert_eq!(cfg.timeout_secs, Some(5));
    }

    #[test]
    fn local_mock_rejects_garbage() {
        assert!(matches!(
            GatewayConfig::local_mock("not a url"),
            Err(ConfigError::InvalidUrl(..))
        ));
    }

    #[test]
    fn new_has_no_timeout() {
        let cfg = GatewayConfig::new("https://script.example.com/exec".parse().unwrap());
        assert_eq!(cfg.timeout_secs, None);
        assert_eq!(cfg.qr_param, DEFAULT_QR_PARAM);
    }

    fn clear_env() {
        for var in ["PREMIO_GATEWAY_URL", "PREMIO_QR_PARAM", "PREMIO_TIMEOUT_SECS"] {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial(premio_env)]
    fn from_env_requires_endpoint() {
        clear_env();
        assert!(matches!(
            GatewayConfig::from_env(),
            Err(ConfigError::MissingEndpoint)
        ));
    }

    #[test]
    #[serial(premio_env)]
    fn from_env_defaults_param_and_timeout() {
        clear_env();
        std::env::set_var("PREMIO_GATEWAY_URL", "https://script.example.com/exec");
        let cfg = GatewayConfig::from_env();
        clear_env();
        let cfg = cfg.unwrap();
        assert_eq!(cfg.endpoint_url.as_str(), "https://script.example.com/exec");
        assert_eq!(cfg.qr_param, DEFAULT_QR_PARAM);
        assert_eq!(cfg.timeout_secs, None);
    }

    #[test]
    #[serial(premio_env)]
    fn from_env_reads_custom_param_and_timeout() {
        clear_env();
        std::env::set_var("PREMIO_GATEWAY_URL", "https://script.example.com/exec");
        std::env::set_var("PREMIO_QR_PARAM", "codigo");
        std::env::set_var("PREMIO_TIMEOUT_SECS", "15");
        let cfg = GatewayConfig::from_env();
        clear_env();
        let cfg = cfg.unwrap();
        assert_eq!(cfg.qr_param, "codigo");
        assert_eq!(cfg.timeout_secs, Some(15));
    }

    #[test]
    #[serial(premio_env)]
    fn from_env_rejects_non_numeric_timeout() {
        clear_env();
        std::env::set_var("PREMIO_GATEWAY_URL", "https://script.example.com/exec");
        std::env::set_var("PREMIO_TIMEOUT_SECS", "soon");
        let cfg = GatewayConfig::from_env();
        clear_env();
        assert!(matches!(cfg, Err(ConfigError::InvalidTimeout(ref s)) if s == "soon"));
    }

    #[test]
    #[serial(premio_env)]
    fn from_env_rejects_bad_url() {
        clear_env();
        std::env::set_var("PREMIO_GATEWAY_URL", "not a url");
        let cfg = GatewayConfig::from_env();
        clear_env();
        assert!(matches!(cfg, Err(ConfigError::InvalidUrl(..))));
    }

    #[test]
    fn deserializes_with_defaults() {
        let cfg: GatewayConfig =
            serde_json::from_str(r#"{"endpoint_url": "https://script.example.com/exec"}"#)
                .unwrap();
        assert_eq!(cfg.qr_param, "qr");
        assert_eq!(cfg.timeout_secs, None);
    }
}
