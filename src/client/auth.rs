//! API key authentication for CookMaster.
//!
//! CookMaster authenticates every request with a static key sent in the
//! `X-API-Key` header. There is no token exchange; the key is supplied by the
//! caller and attached once to the underlying HTTP client as a default header.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};

use crate::client::error::{CookMasterError, Result};

pub const API_KEY_HEADER: &str = "x-api-key";
pub const SDK_USER_AGENT: &str = "CookMaster-Rust-SDK/1.0";

/// # CookMaster API Key Handler
///
/// Holds the caller's API key and produces the fixed header set every request
/// carries: the key itself, a JSON content type and the SDK identifier.
#[derive(Clone)]
pub struct ApiKeyAuth {
    api_key: String,
}

impl ApiKeyAuth {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Builds the default headers for the HTTP client.
    ///
    /// Fails with an argument error if the key contains characters that are
    /// not allowed in an HTTP header value.
    pub fn default_headers(&self) -> Result<HeaderMap> {
        let mut key = HeaderValue::from_str(&self.api_key).map_err(|_| {
            tracing::error!("API key contains characters not allowed in an HTTP header");
            CookMasterError::invalid("API key is not a valid header value")
        })?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(SDK_USER_AGENT));
        Ok(headers)
    }

    /// First characters of the key, for log lines.
    pub fn key_preview(&self) -> String {
        let end = self
            .api_key
            .char_indices()
            .nth(4)
            .map(|(i, _)| i)
            .unwrap_or(self.api_key.len());
        format!("{}...", &self.api_key[..end])
    }
}

impl std::fmt::Debug for ApiKeyAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyAuth")
            .field("api_key", &self.key_preview())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers() {
        let headers = ApiKeyAuth::new("secret-key").default_headers().unwrap();
        assert_eq!(headers.get(API_KEY_HEADER).unwrap(), "secret-key");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get(USER_AGENT).unwrap(), SDK_USER_AGENT);
    }

    #[test]
    fn test_invalid_header_value_rejected() {
        let err = ApiKeyAuth::new("bad\nkey").default_headers().unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let auth = ApiKeyAuth::new("abcdefghijkl");
        let debug = format!("{:?}", auth);
        assert!(debug.contains("abcd..."));
        assert!(!debug.contains("abcdefghijkl"));
    }
}
