//! HTTP transport seam.
//!
//! [`Transport`] sends one fully-built request and hands back the raw status
//! and body. It knows nothing about retries or error bodies; that policy lives
//! in [`CookMasterClient`](crate::client::CookMasterClient). Any error returned
//! from [`Transport::send`] is treated as a transport failure and may be retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};

use crate::client::auth::ApiKeyAuth;
use crate::client::error::{CookMasterError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL, query string included.
    pub url: String,
    pub body: Option<serde_json::Value>,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// A network-level failure: connection refused, timeout, DNS, or a body that
/// could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError(err.to_string())
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> std::result::Result<HttpResponse, TransportError>;
}

/// Default transport backed by a pooled [`reqwest::Client`].
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates the underlying client with the API key headers preinstalled.
    /// No connection is opened until the first request.
    pub fn new(auth: &ApiKeyAuth) -> Result<Self> {
        let client = Client::builder()
            .default_headers(auth.default_headers()?)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                CookMasterError::api(format!("failed to build HTTP client: {}", e), None)
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> std::result::Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .timeout(request.timeout);

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
