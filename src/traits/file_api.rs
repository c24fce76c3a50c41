use async_trait::async_trait;
use serde_json::Value;

use crate::models::{ApiError, DirectoryPath, FilePath};

/// `FileApi` defines the remote operations of the file-processing service.
///
/// Every call issues exactly one request and resolves to the decoded JSON
/// body, whatever the HTTP status, unless the implementation was built with
/// strict status checking. Inputs are forwarded without validation.
#[async_trait]
pub trait FileApi: Send + Sync {
    /// `GET /files`
    async fn list_files(&self) -> Result<Value, ApiError>;

    /// `GET /files/check`
    async fn check_files(&self) -> Result<Value, ApiError>;

    /// `POST /files/scan` with `{"directory": ...}`.
    async fn scan_files(&self, directory: &DirectoryPath) -> Result<Value, ApiError>;

    /// Converts every file the backend has not converted yet.
    async fn process_unconverted(&self) -> Result<Value, ApiError>;

    /// Converts one file, addressed by its path.
    async fn process_single(&self, file_path: &FilePath) -> Result<Value, ApiError>;

    /// `GET /settings`
    async fn list_settings(&self) -> Result<Value, ApiError>;

    /// `POST /settings` with `{"name": ..., "value": ...}`.
    async fn update_setting(&self, name: &str, value: &str) -> Result<Value, ApiError>;
}
