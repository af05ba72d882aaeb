// Shared HTTP transport. One reqwest client for the whole app, with bearer
// token injection from the session and uniform envelope/error handling.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::config::ApiConfig;
use super::error::ApiError;

/// Source of the current bearer token. The session store implements this so
/// the transport never needs to know about session persistence.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Anonymous token source for clients constructed without a session.
pub struct NoToken;

impl TokenSource for NoToken {
    fn token(&self) -> Option<String> {
        None
    }
}

/// Every backend response is wrapped in this envelope.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Extracts the payload, treating a missing `data` field as a malformed
    /// response.
    pub fn into_data(self) -> Result<T, ApiError> {
        self.data
            .ok_or_else(|| ApiError::Unexpected("Invalid response format".to_string()))
    }

    pub fn into_message(self) -> String {
        self.message
            .unwrap_or_else(|| "Request processed".to_string())
    }
}

pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    tokens: Arc<dyn TokenSource>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, tokens: Arc<dyn TokenSource>) -> Self {
        // AI generation can take a while; the shared client carries a
        // generous timeout rather than a per-call one.
        let http = Client::builder()
            .timeout(Duration::from_secs(180))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            config,
            tokens,
        }
    }

    pub fn endpoints(&self) -> &ApiConfig {
        &self.config
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let request = self.authorize(self.http.get(url).query(query));
        Self::handle(request.send().await?).await
    }

    pub async fn post<B, T>(&self, url: &str, body: &B) -> Result<ApiEnvelope<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.authorize(self.http.post(url).json(body));
        Self::handle(request.send().await?).await
    }

    pub async fn put<B, T>(&self, url: &str, body: &B) -> Result<ApiEnvelope<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.authorize(self.http.put(url).json(body));
        Self::handle(request.send().await?).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, url: &str) -> Result<ApiEnvelope<T>, ApiError> {
        let request = self.authorize(self.http.delete(url));
        Self::handle(request.send().await?).await
    }

    /// Uploads a single file as multipart form data under `field`.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        url: &str,
        field: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let mime = infer::Infer::new()
            .get(&bytes)
            .map(|info| info.mime_type().to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(&mime)
            .map_err(|_| ApiError::Validation("Invalid image type".to_string()))?;
        let form = reqwest::multipart::Form::new().part(field.to_string(), part);

        let request = self.authorize(self.http.post(url).multipart(form));
        Self::handle(request.send().await?).await
    }

    async fn handle<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let status = response.status();
        debug!(http_status = %status, "received API response");

        if status.is_success() {
            response.json::<ApiEnvelope<T>>().await.map_err(|e| {
                warn!(error = %e, "failed to parse response envelope");
                ApiError::Unexpected("Invalid response format".to_string())
            })
        } else {
            // Pull the server's message out of the error body when there is one.
            let server_message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                });
            Err(ApiError::from_status(status, server_message))
        }
    }
}
