//! Lead-capture webhook configuration.

use serde::{Deserialize, Serialize};

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeadCaptureConfig {
    /// Webhook that receives the JSON payload. Empty means demo mode: the
    /// payload is logged and the submission counts as successful.
    #[serde(default)]
    pub endpoint: String,

    /// Request timeout for the webhook POST.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LeadCaptureConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LeadCaptureConfig {
    /// Whether submissions are forwarded to a webhook.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.endpoint.trim().is_empty()
    }

    /// Endpoints must be absolute `http` or `https` URLs.
    #[must_use]
    pub fn has_valid_scheme(&self) -> bool {
        let endpoint = self.endpoint.trim();
        endpoint.starts_with("https://") || endpoint.starts_with("http://")
    }

    /// The endpoint when one is configured, trimmed.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.is_configured().then(|| self.endpoint.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_demo_mode() {
        let config = LeadCaptureConfig::default();
        assert!(!config.is_configured());
        assert!(config.endpoint().is_none());
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn configured_endpoint_is_trimmed() {
        let config = LeadCaptureConfig {
            endpoint: "  https://hooks.example.com/lead \n".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert!(config.has_valid_scheme());
        assert_eq!(config.endpoint(), Some("https://hooks.example.com/lead"));
    }

    #[test]
    fn non_http_scheme_is_flagged() {
        let config = LeadCaptureConfig {
            endpoint: "ftp://hooks.example.com".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert!(!config.has_valid_scheme());
    }
}
