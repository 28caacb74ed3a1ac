//! # CLI Configuration
//!
//! Settings come from an optional YAML file, then the environment, then
//! command-line overrides, in that order:
//!
//! ```yaml
//! gateway:
//!   endpoint_url: https://script.google.com/macros/s/<deployment>/exec
//!   qr_param: qr
//!   timeout_secs: 20
//! submission:
//!   check_duplicates: true
//!   block_on_indeterminate_duplicate: false
//! ```
//!
//! Without a `gateway` section the gateway settings are read from
//! `PREMIO_GATEWAY_URL` and friends (see [`GatewayConfig::from_env`]).

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

use premio_form::SubmissionPolicy;
use premio_gateway::GatewayConfig;

/// Contents of a `--config` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Gateway connection settings.
    #[serde(default)]
    pub gateway: Option<GatewayConfig>,
    /// Submission policy.
    #[serde(default)]
    pub submission: SubmissionPolicy,
}

impl FileConfig {
    /// Read and parse a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

/// Fully resolved settings for a command that talks to the gateway.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Gateway connection settings.
    pub gateway: GatewayConfig,
    /// Submission policy.
    pub submission: SubmissionPolicy,
}

/// Resolve settings from an optional config file, the environment, and an
/// optional endpoint override.
pub fn resolve(config_path: Option<&Path>, endpoint: Option<&Url>) -> Result<Settings> {
    let file = match config_path {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let gateway = match (file.gateway, endpoint) {
        (Some(mut gateway), Some(url)) => {
            gateway.endpoint_url = url.clone();
            gateway
        }
        (Some(gateway), None) => gateway,
        (None, Some(url)) => GatewayConfig::new(url.clone()),
        (None, None) => GatewayConfig::from_env().context(
            "no gateway configured: pass --endpoint, use --config, or set PREMIO_GATEWAY_URL",
        )?,
    };

    tracing::debug!(endpoint = %gateway.endpoint_url, qr_param = %gateway.qr_param, "resolved gateway settings");

    Ok(Settings {
        gateway,
        submission: file.submission,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_full_file() {
        let file = write_config(
            "gateway:\n  endpoint_url: https://script.example.com/exec\n  qr_param: code\n  timeout_secs: 20\nsubmission:\n  check_duplicates: false\n",
        );
        let settings = resolve(Some(file.path()), None).unwrap();
        assert_eq!(
            settings.gateway.endpoint_url.as_str(),
            "https://script.example.com/exec"
        );
        assert_eq!(settings.gateway.qr_param, "code");
        assert_eq!(settings.gateway.timeout_secs, Some(20));
        assert!(!settings.submission.check_duplicates);
        assert!(!settings.submission.block_on_indeterminate_duplicate);
    }

    #[test]
    fn endpoint_flag_overrides_file() {
        let file = write_config("gateway:\n  endpoint_url: https://a.example.com/exec\n");
        let url = Url::parse("https://b.example.com/exec").unwrap();
        let settings = resolve(Some(file.path()), Some(&url)).unwrap();
        assert_eq!(settings.gateway.endpoint_url, url);
        assert_eq!(settings.gateway.qr_param, "qr");
    }

    #[test]
    fn endpoint_flag_alone_is_enough() {
        let url = Url::parse("https://b.example.com/exec").unwrap();
        let settings = resolve(None, Some(&url)).unwrap();
        assert_eq!(settings.gateway.endpoint_url, url);
        assert!(settings.submission.check_duplicates);
    }

    fn clear_env() {
        for var in ["PREMIO_GATEWAY_URL", "PREMIO_QR_PARAM", "PREMIO_TIMEOUT_SECS"] {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial(premio_env)]
    fn falls_back_to_environment() {
        clear_env();
        std::env::set_var("PREMIO_GATEWAY_URL", "https://env.example.com/exec");
        std::env::set_var("PREMIO_QR_PARAM", "codigo");
        let settings = resolve(None, None);
        clear_env();
        let settings = settings.unwrap();
        assert_eq!(
            settings.gateway.endpoint_url.as_str(),
            "https://env.example.com/exec"
        );
        assert_eq!(settings.gateway.qr_param, "codigo");
        assert!(settings.submission.check_duplicates);
    }

    #[test]
    #[serial(premio_env)]
    fn nothing_configured_is_an_error() {
        clear_env();
        let err = resolve(None, None).unwrap_err();
        assert!(err.to_string().contains("no gateway configured"));
    }

    #[test]
    fn rejects_unknown_sections() {
        let file = write_config("gatway:\n  endpoint_url: https://a.example.com/exec\n");
        assert!(FileConfig::load(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = FileConfig::load(Path::new("/nonexistent/premio.yaml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
