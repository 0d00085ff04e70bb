use crate::utils::error::{AdapterError, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// A single request handed to an [`HttpJsonClient`](super::ports::HttpJsonClient).
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRequest {
    pub method: Method,
    pub url: Url,
    pub params: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl JsonRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            params: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn param(mut self, key: &str, value: &str) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// Decoded body plus the HTTP status it came with. Error statuses are data,
/// not `Err`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResult<T> {
    pub body: T,
    pub status: u16,
}

impl<T> OperationResult<T> {
    pub fn new(body: T, status: u16) -> Self {
        Self { body, status }
    }

    pub fn is_success(&self) -> bool {
        self.status < 400
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum FolderOutcome {
    /// Remote path of the new folder, usable as a parent folder afterwards.
    Created(String),
    /// Raw body of a response with status >= 400.
    Rejected(Value),
}

impl FolderOutcome {
    pub fn path(&self) -> Option<&str> {
        match self {
            FolderOutcome::Created(path) => Some(path),
            FolderOutcome::Rejected(_) => None,
        }
    }
}

/// Walks `keys` through nested objects.
pub fn lookup<'a>(value: &'a Value, keys: &[&str]) -> Result<&'a Value> {
    let mut current = value;
    for (depth, key) in keys.iter().enumerate() {
        current = current
            .as_object()
            .and_then(|obj| obj.get(*key))
            .ok_or_else(|| AdapterError::MissingField {
                path: keys[..=depth].join("."),
            })?;
    }
    Ok(current)
}

pub fn lookup_str(value: &Value, keys: &[&str]) -> Result<String> {
    lookup(value, keys)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| AdapterError::UnexpectedType {
            path: keys.join("."),
            expected: "string".to_string(),
        })
}
