#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::{AdapterError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_parent_folder, validate_path_segment,
    validate_positive_number, validate_url, Validate,
};
use std::env;
use std::fmt;
use std::time::Duration;
use url::Url;

pub const DEFAULT_PROVIDER: &str = "osfstorage";

/// Everything the adapter needs to address WaterButler. Immutable once built.
#[derive(Clone, PartialEq)]
pub struct AdapterConfig {
    pub base_host: Url,
    pub default_credential: String,
    pub node_id: String,
    pub provider_name: String,
    pub parent_folder: Option<String>,
    pub request_timeout: Option<Duration>,
}

impl AdapterConfig {
    pub fn new(
        base_host: &str,
        default_credential: impl Into<String>,
        node_id: impl Into<String>,
        provider_name: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            base_host: Url::parse(base_host)?,
            default_credential: default_credential.into(),
            node_id: node_id.into(),
            provider_name: provider_name.into(),
            parent_folder: None,
            request_timeout: None,
        })
    }

    pub fn with_parent_folder(mut self, parent_folder: impl Into<String>) -> Self {
        self.parent_folder = Some(parent_folder.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn from_env() -> Result<Self> {
        let host = required_env("WB_HOST")?;
        let token = required_env("WATERBUTLER_OSF_TOKEN")?;
        let node = required_env("OSF_NODE")?;
        let provider = env::var("WB_PROVIDER").unwrap_or_else(|_| DEFAULT_PROVIDER.to_string());

        validate_url("WB_HOST", &host)?;
        let mut config = Self::new(&host, token, node, provider)?;

        if let Ok(parent) = env::var("WB_PARENT_FOLDER") {
            if !parent.is_empty() {
                config.parent_folder = Some(parent);
            }
        }

        if let Ok(raw) = env::var("WB_TIMEOUT_SECONDS") {
            let seconds: u64 = raw.parse().map_err(|_| AdapterError::InvalidConfigValueError {
                field: "WB_TIMEOUT_SECONDS".to_string(),
                value: raw.clone(),
                reason: "Expected a whole number of seconds".to_string(),
            })?;
            config.request_timeout = Some(Duration::from_secs(seconds));
        }

        Ok(config)
    }
}

fn required_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| AdapterError::MissingConfigError {
        field: name.to_string(),
    })
}

impl fmt::Debug for AdapterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterConfig")
            .field("base_host", &self.base_host.as_str())
            .field("default_credential", &"<redacted>")
            .field("node_id", &self.node_id)
            .field("provider_name", &self.provider_name)
            .field("parent_folder", &self.parent_folder)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Validate for AdapterConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_host", self.base_host.as_str())?;
        validate_non_empty_string("default_credential", &self.default_credential)?;
        validate_path_segment("node_id", &self.node_id)?;
        validate_path_segment("provider_name", &self.provider_name)?;

        if let Some(parent) = self.parent_folder.as_deref().filter(|p| !p.is_empty()) {
            validate_parent_folder("parent_folder", parent)?;
        }

        if let Some(timeout) = self.request_timeout {
            validate_positive_number("request_timeout", timeout.as_secs(), 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AdapterConfig {
        AdapterConfig::new("https://files.osf.io", "secret-token", "abc12", "osfstorage").unwrap()
    }

    #[test]
    fn test_debug_redacts_credential() {
        let rendered = format!("{:?}", sample());
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("abc12"));
    }

    #[test]
    fn test_validate_accepts_minimal_config() {
        assert!(sample().validate().is_ok());
        assert!(sample().with_parent_folder("/5f1a/").validate().is_ok());
        assert!(sample().with_parent_folder("").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(sample().with_parent_folder("5f1a/").validate().is_err());
        assert!(sample()
            .with_request_timeout(Duration::from_millis(10))
            .validate()
            .is_err());

        let mut config = sample();
        config.default_credential = String::new();
        assert!(config.validate().is_err());

        let mut config = sample();
        config.node_id = "a/b".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_new_rejects_unparseable_host() {
        assert!(matches!(
            AdapterConfig::new("not a url", "t", "n", "p"),
            Err(AdapterError::InvalidUrl(_))
        ));
    }
}
