use crate::config::AdapterConfig;
use crate::domain::model::{lookup_str, FolderOutcome, JsonRequest, OperationResult};
use crate::domain::ports::{HttpJsonClient, StorageProvider};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use url::Url;

/// Performs file actions on any storage backend WaterButler fronts.
///
/// The provider only builds the resource URL and interprets the JSON reply;
/// authentication, transport and timeouts belong to the injected client.
#[derive(Debug, Clone)]
pub struct WbProvider<C: HttpJsonClient> {
    config: AdapterConfig,
    client: C,
}

impl<C: HttpJsonClient> WbProvider<C> {
    /// Registry name. The backend behind WaterButler is `provider_name`.
    pub const NAME: &'static str = "waterbutler";

    pub fn new(config: AdapterConfig, client: C) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Same provider, targeting another parent folder, typically a path
    /// returned by [`create_folder`](Self::create_folder).
    pub fn with_parent_folder(&self, parent_folder: impl Into<String>) -> Self
    where
        C: Clone,
    {
        Self {
            config: self.config.clone().with_parent_folder(parent_folder),
            client: self.client.clone(),
        }
    }

    /// `{host}/v1/resources/{node}/providers/{provider}{parent or "/"}`.
    ///
    /// The path is absolute, so any path on the configured host is replaced.
    pub fn resource_url(&self) -> Result<Url> {
        let parent_folder = self
            .config
            .parent_folder
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or("/");
        let path = format!(
            "/v1/resources/{}/providers/{}{}",
            self.config.node_id, self.config.provider_name, parent_folder
        );
        Ok(self.config.base_host.join(&path)?)
    }

    /// Creates `folder_name` under the parent folder.
    ///
    /// Name collisions are not normalized: calling twice with the same name
    /// does whatever the backend does (duplicate, rename or 409).
    pub async fn create_folder(&self, folder_name: &str) -> Result<OperationResult<FolderOutcome>> {
        let request = JsonRequest::new(Method::PUT, self.resource_url()?)
            .param("kind", "folder")
            .param("name", folder_name)
            .header("Content-Type", "application/json");

        tracing::debug!(provider = %self.config.provider_name, "Creating folder {}", folder_name);
        let response = self.client.request_json(request).await?;

        let outcome = if response.is_success() {
            FolderOutcome::Created(lookup_str(&response.body, &["data", "attributes", "path"])?)
        } else {
            tracing::warn!(
                "Folder creation for {} rejected with status {}",
                folder_name,
                response.status
            );
            FolderOutcome::Rejected(response.body)
        };

        Ok(OperationResult::new(outcome, response.status))
    }

    /// Uploads `content` as `file_name`; body and status are returned as-is.
    pub async fn upload_file(
        &self,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<OperationResult<Value>> {
        let request = JsonRequest::new(Method::PUT, self.resource_url()?)
            .param("kind", "file")
            .param("name", file_name)
            .body(content);

        tracing::debug!(provider = %self.config.provider_name, "Uploading file {}", file_name);
        self.client.request_json(request).await
    }

    pub fn extract_uploaded_filename(payload: &Value) -> Result<String> {
        lookup_str(payload, &["data", "attributes", "name"])
    }
}

#[async_trait]
impl<C: HttpJsonClient> StorageProvider for WbProvider<C> {
    fn name(&self) -> &str {
        Self::NAME
    }

    // Not every backend supports nesting; WaterButler reports the failure.
    fn allows_subfolders(&self) -> bool {
        true
    }

    async fn create_folder(&self, folder_name: &str) -> Result<OperationResult<FolderOutcome>> {
        Self::create_folder(self, folder_name).await
    }

    async fn upload_file(
        &self,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<OperationResult<Value>> {
        Self::upload_file(self, file_name, content).await
    }

    fn extract_uploaded_filename(&self, payload: &Value) -> Result<String> {
        Self::extract_uploaded_filename(payload)
    }
}
