use async_trait::async_trait;
use bon::bon;
use reqwest::{Client, Method};
use serde_json::{Map, Value, json};
use std::time::Instant;
use tracing::{debug, error, info};
use url::Url;

use crate::models::{ApiError, DirectoryPath, Endpoints, FilePath, Operation};
use crate::traits::file_api::FileApi;

/// `FileApi` over HTTP with `reqwest`.
pub struct HttpFileApi {
    client: Client,
    base_url: String,
    endpoints: Endpoints,
    strict_status: bool,
}

#[bon]
impl HttpFileApi {
    /// Validates the base URL once; it cannot change afterwards.
    #[builder]
    pub fn new(
        #[builder(into)] base_url: String,
        #[builder(default)] endpoints: Endpoints,
        #[builder(default)] strict_status: bool,
        client: Option<Client>,
    ) -> Result<Self, ApiError> {
        let parsed = Url::parse(&base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url,
                reason: "not a hierarchical URL".to_string(),
            });
        }
        Ok(Self {
            client: client.unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoints,
            strict_status,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn call(&self, op: Operation, body: Option<Value>) -> Result<Value, ApiError> {
        let (verb, path) = self.endpoints.route(op);
        let url = format!("{}{}", self.base_url, path);
        let method: Method = verb.into();
        debug!(operation = %op, method = %method, url = %url, "api: request");

        let started = Instant::now();
        let mut request = self.client.request(method, &url);
        if let Some(b) = body.as_ref() {
            request = request.json(b);
        }
        let response = request.send().await.map_err(|source| {
            error!(operation = %op, url = %url, error = %source, "api: request failed");
            ApiError::Network { operation: op, source }
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|source| {
            error!(operation = %op, url = %url, error = %source, "api: body read failed");
            ApiError::Network { operation: op, source }
        })?;
        info!(
            operation = %op,
            status = status.as_u16(),
            body_len = bytes.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "api: response"
        );

        if self.strict_status && !status.is_success() {
            return Err(ApiError::Status {
                operation: op,
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        serde_json::from_slice(&bytes).map_err(|source| ApiError::Parse {
            operation: op,
            status: Some(status.as_u16()),
            source,
        })
    }
}

#[async_trait]
impl FileApi for HttpFileApi {
    async fn list_files(&self) -> Result<Value, ApiError> {
        self.call(Operation::ListFiles, None).await
    }

    async fn check_files(&self) -> Result<Value, ApiError> {
        self.call(Operation::CheckFiles, None).await
    }

    async fn scan_files(&self, directory: &DirectoryPath) -> Result<Value, ApiError> {
        let body = json!({ "directory": directory.as_str() });
        self.call(Operation::ScanFiles, Some(body)).await
    }

    async fn process_unconverted(&self) -> Result<Value, ApiError> {
        self.call(Operation::ProcessUnconverted, None).await
    }

    async fn process_single(&self, file_path: &FilePath) -> Result<Value, ApiError> {
        // key casing differs between deployments
        let mut body = Map::new();
        body.insert(self.endpoints.file_path_key.clone(), Value::from(file_path.as_str()));
        self.call(Operation::ProcessSingle, Some(Value::Object(body))).await
    }

    async fn list_settings(&self) -> Result<Value, ApiError> {
        self.call(Operation::ListSettings, None).await
    }

    async fn update_setting(&self, name: &str, value: &str) -> Result<Value, ApiError> {
        let body = json!({ "name": name, "value": value });
        self.call(Operation::UpdateSetting, Some(body)).await
    }
}
