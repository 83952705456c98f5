//! HTTP client for network-based API calls

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Wire envelope used by the reservation API.
///
/// Requests wrap their payload as `{ "data": ... }`; responses carry
/// either `data` or a human-readable `error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Wrap a request payload
    pub fn wrap(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }
}

/// HTTP client for making network requests to the reservation API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        cancel: &CancellationToken,
    ) -> ClientResult<T> {
        self.send(self.client.get(self.url(path)), cancel).await
    }

    /// Make a POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> ClientResult<T> {
        self.send(self.client.post(self.url(path)).json(body), cancel)
            .await
    }

    /// Make a PUT request with a JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> ClientResult<T> {
        self.send(self.client.put(self.url(path)).json(body), cancel)
            .await
    }

    /// 发送请求，与取消令牌竞速；取消返回 [`ClientError::Cancelled`]
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        cancel: &CancellationToken,
    ) -> ClientResult<T> {
        tokio::select! {
            _ = cancel.cancelled() => Err(ClientError::Cancelled),
            response = request.send() => Self::handle_response(response?).await,
        }
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ApiEnvelope<serde_json::Value>>()
                .await
                .ok()
                .and_then(|envelope| envelope.error)
                .unwrap_or_else(|| status.to_string());
            return match status {
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                _ => Err(ClientError::Internal(message)),
            };
        }

        let envelope: ApiEnvelope<T> = response.json().await?;
        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse("missing data payload".to_string()))
    }
}
