use crate::domain::model::{FolderOutcome, JsonRequest, OperationResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Credentialed request execution with JSON decoding.
///
/// Implementations attach authentication, send the request once and decode
/// the body whatever the status. Transport failures are returned as `Err`;
/// HTTP error statuses are not.
#[async_trait]
pub trait HttpJsonClient: Send + Sync {
    async fn request_json(&self, request: JsonRequest) -> Result<OperationResult<Value>>;
}

#[async_trait]
impl<C: HttpJsonClient + ?Sized> HttpJsonClient for std::sync::Arc<C> {
    async fn request_json(&self, request: JsonRequest) -> Result<OperationResult<Value>> {
        (**self).request_json(request).await
    }
}

/// Storage operations a provider registry can dispatch to.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Registry name of the provider implementation.
    fn name(&self) -> &str;

    fn allows_subfolders(&self) -> bool;

    async fn create_folder(&self, folder_name: &str) -> Result<OperationResult<FolderOutcome>>;

    async fn upload_file(&self, file_name: &str, content: Vec<u8>)
        -> Result<OperationResult<Value>>;

    /// Name of the stored file, read from an upload response body.
    fn extract_uploaded_filename(&self, payload: &Value) -> Result<String>;
}
