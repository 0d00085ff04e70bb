use crate::config::{AdapterConfig, DEFAULT_PROVIDER};
use crate::utils::error::{AdapterError, Result};
use crate::utils::validation::{validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub waterbutler: WaterButlerSection,
    pub provider: Option<ProviderSection>,
    pub http: Option<HttpSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterButlerSection {
    pub host: String,
    pub token: String,
    pub node: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSection {
    pub name: Option<String>,
    pub parent_folder: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSection {
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses after replacing `${VAR}` placeholders with environment values.
    /// Unset variables are left as written.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| AdapterError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    fn substitute_env_vars(content: &str) -> String {
        static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
        let re = PLACEHOLDER.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn provider_name(&self) -> &str {
        self.provider
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .unwrap_or(DEFAULT_PROVIDER)
    }

    pub fn parent_folder(&self) -> Option<&str> {
        self.provider
            .as_ref()
            .and_then(|p| p.parent_folder.as_deref())
            .filter(|p| !p.is_empty())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.http
            .as_ref()
            .and_then(|h| h.timeout_seconds)
            .map(Duration::from_secs)
    }

    pub fn into_adapter_config(self) -> Result<AdapterConfig> {
        validate_url("waterbutler.host", &self.waterbutler.host)?;

        let mut config = AdapterConfig::new(
            &self.waterbutler.host,
            self.waterbutler.token.clone(),
            self.waterbutler.node.clone(),
            self.provider_name(),
        )?;
        config.parent_folder = self.parent_folder().map(str::to_string);
        config.request_timeout = self.request_timeout();

        config.validate()?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_adapter_config().map(|_| ())
    }
}
