use crate::utils::error::{AdapterError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AdapterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AdapterError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(AdapterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Parent folders are WaterButler paths and are appended verbatim after the
/// provider segment, so they must be absolute.
pub fn validate_parent_folder(field_name: &str, path: &str) -> Result<()> {
    if !path.starts_with('/') {
        return Err(AdapterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Parent folder must start with '/'".to_string(),
        });
    }

    if path.contains(['?', '#', '\0']) {
        return Err(AdapterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Parent folder contains a reserved character".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(AdapterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AdapterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Node ids and provider names become single path segments.
pub fn validate_path_segment(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.contains(['/', '?', '#']) {
        return Err(AdapterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a single URL path segment".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("waterbutler.host", "https://files.osf.io").is_ok());
        assert!(validate_url("waterbutler.host", "http://localhost:7777").is_ok());
        assert!(validate_url("waterbutler.host", "").is_err());
        assert!(validate_url("waterbutler.host", "invalid-url").is_err());
        assert!(validate_url("waterbutler.host", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_parent_folder() {
        assert!(validate_parent_folder("provider.parent_folder", "/").is_ok());
        assert!(validate_parent_folder("provider.parent_folder", "/5f1a2b/").is_ok());
        assert!(validate_parent_folder("provider.parent_folder", "5f1a2b/").is_err());
        assert!(validate_parent_folder("provider.parent_folder", "/a?b/").is_err());
    }

    #[test]
    fn test_validate_path_segment() {
        assert!(validate_path_segment("waterbutler.node", "abc12").is_ok());
        assert!(validate_path_segment("waterbutler.node", "  ").is_err());
        assert!(validate_path_segment("provider.name", "osf/storage").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("http.timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("http.timeout_seconds", 0, 1).is_err());
    }
}
