//! Shared request helper.
//!
//! [`ApiClient`] owns the HTTP connection pool, the base URL and the bearer
//! token. Resource modules only build [`ApiRequest`]s; this module is the
//! single place where they turn into HTTP calls.

use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::request::{ApiRequest, RequestBody, CONTENT_TYPE_JSON};

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP client for the admin backend.
///
/// Cheap to clone; clones share the connection pool and the token, so a
/// token set after login is seen by every clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

/// Raw body of a non-JSON response (logos, history images).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryResponse {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;
        Ok(Self::with_client(http, config.base_url, config.token))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(http: reqwest::Client, base_url: String, token: Option<String>) -> Self {
        Self {
            http,
            base_url,
            token: Arc::new(RwLock::new(token)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the bearer token for all subsequent requests.
    pub async fn set_token(&self, token: impl Into<String>) {
        *self.token.write().await = Some(token.into());
    }

    /// Stop sending an `Authorization` header.
    pub async fn clear_token(&self) {
        *self.token.write().await = None;
    }

    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Send a request and decode its JSON body.
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ClientError> {
        let response = self.execute(request).await?;
        Ok(response.json::<T>().await?)
    }

    /// Send a request, discarding the body.
    pub async fn send_empty(&self, request: ApiRequest) -> Result<(), ClientError> {
        self.execute(request).await?;
        Ok(())
    }

    /// Send a request and return the raw body with its content type.
    pub async fn send_bytes(&self, request: ApiRequest) -> Result<BinaryResponse, ClientError> {
        let response = self.execute(request).await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?.to_vec();
        Ok(BinaryResponse {
            content_type,
            bytes,
        })
    }

    // ---- private helpers ----

    /// Issue one HTTP call. No retries; the first failure is returned.
    async fn execute(&self, request: ApiRequest) -> Result<reqwest::Response, ClientError> {
        let request_id = Uuid::new_v4().to_string();
        let url = request.url(&self.base_url);
        let ApiRequest {
            method,
            path,
            query,
            headers,
            body,
        } = request;

        tracing::debug!(
            request_id = %request_id,
            method = %method,
            path = %path,
            content_type = body.content_type().unwrap_or("-"),
            "Sending API request"
        );

        let mut builder = self
            .http
            .request(method, url)
            .header(REQUEST_ID_HEADER, request_id.as_str());

        if !headers.iter().any(|(name, _)| name.eq_ignore_ascii_case(ACCEPT.as_str())) {
            builder = builder.header(ACCEPT, CONTENT_TYPE_JSON);
        }
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(token) = self.token().await {
            builder = builder.bearer_auth(token);
        }

        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            // The transport sets the boundary-bearing multipart content type.
            RequestBody::Multipart(form) => builder.multipart(form.into_transport()?),
        };

        let response = builder.send().await?;
        Self::ensure_success(response, &request_id, &path).await
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`ClientError::Api`] containing the status
    /// and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
        request_id: &str,
        path: &str,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(
                request_id,
                path,
                status = status.as_u16(),
                "API request returned an error status"
            );
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
