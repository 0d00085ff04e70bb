use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Missing field in response: {path}")]
    MissingField { path: String },

    #[error("Unexpected type at {path}: expected {expected}")]
    UnexpectedType { path: String, expected: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AdapterError {
    /// Transport failures: connection, DNS, TLS, timeouts.
    pub fn is_transport(&self) -> bool {
        matches!(self, AdapterError::Http(_))
    }

    pub fn is_config(&self) -> bool {
        matches!(
            self,
            AdapterError::ConfigError { .. }
                | AdapterError::MissingConfigError { .. }
                | AdapterError::InvalidConfigValueError { .. }
                | AdapterError::InvalidUrl(_)
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AdapterError::Http(e) if e.is_timeout() => {
                "WaterButler did not answer before the request timed out".to_string()
            }
            AdapterError::Http(e) if e.is_connect() => {
                "Could not connect to WaterButler, check the configured host".to_string()
            }
            AdapterError::Http(e) => format!("Request to WaterButler failed: {}", e),
            AdapterError::Serialization(_) => {
                "WaterButler returned a body that is not valid JSON".to_string()
            }
            AdapterError::MissingField { path } => {
                format!("WaterButler response has no `{}` field", path)
            }
            AdapterError::MissingConfigError { field } => {
                format!("Configuration value `{}` is required", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let missing = AdapterError::MissingConfigError {
            field: "waterbutler.node".to_string(),
        };
        assert!(missing.is_config());
        assert!(!missing.is_transport());
        assert_eq!(
            missing.user_friendly_message(),
            "Configuration value `waterbutler.node` is required"
        );

        let field = AdapterError::MissingField {
            path: "data.attributes.path".to_string(),
        };
        assert!(!field.is_config());
        assert_eq!(
            field.to_string(),
            "Missing field in response: data.attributes.path"
        );
    }
}
