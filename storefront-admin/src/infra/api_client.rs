use anyhow::{Context, Result};
use log::{debug, info, warn};
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use std::time::Duration;
use storefront_contracts::ApiResponse;
use storefront_contracts::routes::v1;
use tokio::sync::RwLock;

/// HTTP client for the storefront backend
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    api_version: String,
    token_store: Arc<RwLock<Option<String>>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field(
                "has_token",
                &self
                    .token_store
                    .try_read()
                    .map(|t| t.is_some())
                    .unwrap_or(false),
            )
            .finish()
    }
}

/// Add `http://` when the scheme is missing and drop trailing slashes so
/// joined paths never contain `//`.
fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    let with_scheme =
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("http://{}", trimmed)
        };
    if with_scheme != raw {
        warn!(
            "[ApiClient] Normalized base URL from '{}' to '{}'",
            raw, with_scheme
        );
    }
    with_scheme
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self> {
        let base_url = normalize_base_url(base_url.as_ref());
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to create HTTP client")?;

        info!(
            "[ApiClient] Creating new API client with base URL: {}",
            base_url
        );

        Ok(Self {
            client,
            base_url,
            api_version: v1::VERSION.to_string(),
            token_store: Arc::new(RwLock::new(None)),
        })
    }

    /// Build a versioned API URL
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let p = path.as_ref();
        if p.starts_with("http://") || p.starts_with("https://") {
            return p.to_string();
        }
        let path = p.trim_start_matches('/');
        if path.starts_with("api/") {
            format!("{}/{}", self.base_url, path)
        } else {
            format!("{}/api/{}/{}", self.base_url, self.api_version, path)
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the bearer token issued upstream
    pub async fn set_token(&self, token: Option<String>) {
        *self.token_store.write().await = token;
    }

    /// Build a request with authentication headers
    pub async fn build_request(
        &self,
        builder: RequestBuilder,
    ) -> RequestBuilder {
        if let Some(token) = self.token_store.read().await.as_ref() {
            builder.header("Authorization", format!("Bearer {}", token))
        } else {
            builder
        }
    }

    /// Turn a non-success response into an error, preferring the message
    /// carried in the response envelope.
    async fn error_from_response(response: Response) -> anyhow::Error {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let detail = serde_json::from_str::<ApiResponse<serde_json::Value>>(
            &body,
        )
        .ok()
        .and_then(|envelope| envelope.error.or(envelope.message))
        .unwrap_or(body);
        anyhow::anyhow!("Request failed with status {}: {}", status, detail)
    }

    /// Execute a request and unwrap the response envelope
    async fn execute_request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = request.send().await?;

        match response.status() {
            StatusCode::NO_CONTENT => Err(anyhow::anyhow!(
                "Empty response from server (204 No Content)"
            )),
            status if status.is_success() => {
                let api_response: ApiResponse<T> = response.json().await?;
                api_response
                    .data
                    .ok_or_else(|| anyhow::anyhow!("Empty response from server"))
            }
            _ => Err(Self::error_from_response(response).await),
        }
    }

    /// Execute a request whose resource may legitimately be absent
    async fn execute_optional<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Option<T>> {
        let response = request.send().await?;

        match response.status() {
            StatusCode::NOT_FOUND | StatusCode::NO_CONTENT => Ok(None),
            status if status.is_success() => {
                let api_response: ApiResponse<T> = response.json().await?;
                Ok(api_response.data)
            }
            _ => Err(Self::error_from_response(response).await),
        }
    }

    /// Execute a request where only the status matters
    async fn execute_no_content(&self, request: RequestBuilder) -> Result<()> {
        let response = request.send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// GET request with authentication
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path);
        debug!("GET request to: {}", url);

        let request = self.client.get(&url);
        let request = self.build_request(request).await;
        self.execute_request(request).await
    }

    /// GET request mapping 404 and empty envelopes to `None`
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>> {
        let url = self.build_url(path);
        debug!("GET (optional) request to: {}", url);

        let request = self.client.get(&url);
        let request = self.build_request(request).await;
        self.execute_optional(request).await
    }

    /// POST request with authentication
    pub async fn post<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R> {
        let url = self.build_url(path);
        debug!("POST request to: {}", url);

        let request = self.client.post(&url).json(body);
        let request = self.build_request(request).await;
        self.execute_request(request).await
    }

    /// PUT request for endpoints that answer with a bare status
    pub async fn put_no_content<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<()> {
        let url = self.build_url(path);
        debug!("PUT request to: {}", url);

        let request = self.client.put(&url).json(body);
        let request = self.build_request(request).await;
        self.execute_no_content(request).await
    }

    /// PUT a multipart form
    pub async fn put_multipart(&self, path: &str, form: Form) -> Result<()> {
        let url = self.build_url(path);
        debug!("PUT (multipart) request to: {}", url);

        let request = self.client.put(&url).multipart(form);
        let request = self.build_request(request).await;
        self.execute_no_content(request).await
    }

    /// DELETE request
    pub async fn delete_no_content(&self, path: &str) -> Result<()> {
        let url = self.build_url(path);
        debug!("DELETE request to: {}", url);

        let request = self.client.delete(&url);
        let request = self.build_request(request).await;
        self.execute_no_content(request).await
    }
}
