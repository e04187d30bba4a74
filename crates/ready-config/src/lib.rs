//! # ready-config
//!
//! Layered configuration loading for the checklist using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AIREADY_*` prefix, `__` as separator)
//! 2. Project-level `.aiready/config.toml`
//! 3. User-level `~/.config/aiready/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AIREADY_LEAD_CAPTURE__ENDPOINT` -> `lead_capture.endpoint`,
//! `AIREADY_STORE__DIR` -> `store.dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use ready_config::ReadyConfig;
//!
//! let config = ReadyConfig::load_with_dotenv().expect("config");
//! if let Some(endpoint) = config.lead_capture.endpoint() {
//!     println!("posting leads to {endpoint}");
//! }
//! ```

mod error;
mod lead_capture;
mod links;
mod store;

pub use error::ConfigError;
pub use lead_capture::LeadCaptureConfig;
pub use links::LinksConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".aiready/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReadyConfig {
    #[serde(default)]
    pub lead_capture: LeadCaptureConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub links: LinksConfig,
}

impl ReadyConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] when a value fails [`Self::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is normal.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("AIREADY_").split("__"))
    }

    /// Reject values that would only fail later, at submission time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lead_capture.is_configured() && !self.lead_capture.has_valid_scheme() {
            return Err(ConfigError::InvalidValue {
                field: "lead_capture.endpoint".into(),
                reason: format!(
                    "'{}' must start with http:// or https://",
                    self.lead_capture.endpoint.trim()
                ),
            });
        }
        if self.lead_capture.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "lead_capture.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("aiready").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_demo_mode() {
        let config = ReadyConfig::default();
        assert!(!config.lead_capture.is_configured());
        assert!(config.store.dir.is_empty());
        assert!(config.links.schedule_url.starts_with("https://tidycal.com/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        let config: ReadyConfig = ReadyConfig::figment()
            .extract()
            .expect("should extract defaults");
        assert_eq!(config.lead_capture.timeout_secs, 10);
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let mut config = ReadyConfig::default();
        config.lead_capture.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "lead_capture.timeout_secs"));
    }
}
