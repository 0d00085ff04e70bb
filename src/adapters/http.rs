use crate::config::AdapterConfig;
use crate::domain::model::{JsonRequest, OperationResult};
use crate::domain::ports::HttpJsonClient;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

/// `HttpJsonClient` backed by reqwest, sending a bearer credential on every
/// request.
#[derive(Clone)]
pub struct ReqwestJsonClient {
    client: Client,
    credential: String,
    timeout: Option<Duration>,
}

impl ReqwestJsonClient {
    pub fn new(credential: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            credential: credential.into(),
            timeout: None,
        }
    }

    pub fn from_config(config: &AdapterConfig) -> Self {
        let client = Self::new(config.default_credential.clone());
        match config.request_timeout {
            Some(timeout) => client.with_timeout(timeout),
            None => client,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl fmt::Debug for ReqwestJsonClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestJsonClient")
            .field("credential", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[async_trait]
impl HttpJsonClient for ReqwestJsonClient {
    async fn request_json(&self, request: JsonRequest) -> Result<OperationResult<Value>> {
        tracing::debug!("{} {}", request.method, request.url);

        let mut builder = self
            .client
            .request(request.method, request.url)
            .bearer_auth(&self.credential)
            .query(&request.params);

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        tracing::debug!("WaterButler response status: {}", status);

        let bytes = response.bytes().await?;
        Ok(OperationResult::new(decode_body(&bytes, status)?, status))
    }
}

/// Empty bodies decode to `null`. Error pages that are not JSON (proxies,
/// gateways) come back as a string so the status stays data.
fn decode_body(bytes: &[u8], status: u16) -> Result<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    match serde_json::from_slice(bytes) {
        Ok(body) => Ok(body),
        Err(_) if status >= 400 => Ok(Value::String(String::from_utf8_lossy(bytes).into_owned())),
        Err(e) => Err(e.into()),
    }
}
