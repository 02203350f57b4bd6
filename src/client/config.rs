//! Client settings.
//!
//! All settings are fixed once a [`CookMasterClient`](crate::client::CookMasterClient)
//! is built from them. They can be assembled in code with the builder-style
//! setters, or read from `COOKMASTER_*` environment variables.

use std::env;
use std::time::Duration;

use crate::client::error::{CookMasterError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.cookmaster.com/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_RETRIES: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    base_url: String,
    timeout: Duration,
    max_retries: u32,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Reads the configuration from the environment.
    ///
    /// `COOKMASTER_API_KEY` is required. `COOKMASTER_BASE_URL`,
    /// `COOKMASTER_TIMEOUT_SECS` and `COOKMASTER_MAX_RETRIES` fall back to the
    /// defaults when unset.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("COOKMASTER_API_KEY")
            .map_err(|_| CookMasterError::invalid("COOKMASTER_API_KEY is not set"))?;

        let base_url =
            env::var("COOKMASTER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = match env::var("COOKMASTER_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(raw.trim().parse().map_err(|_| {
                CookMasterError::invalid(format!("COOKMASTER_TIMEOUT_SECS is not a number: {}", raw))
            })?),
            Err(_) => DEFAULT_TIMEOUT,
        };

        let max_retries = match env::var("COOKMASTER_MAX_RETRIES") {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                CookMasterError::invalid(format!("COOKMASTER_MAX_RETRIES is not a number: {}", raw))
            })?,
            Err(_) => DEFAULT_MAX_RETRIES,
        };

        let config = Self::new(api_key)
            .base_url(base_url)
            .timeout(timeout)
            .max_retries(max_retries);
        config.validate()?;
        Ok(config)
    }

    /// Sets the API root. Trailing slashes are dropped.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Total number of attempts per request, including the first one.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn get_api_key(&self) -> &str {
        &self.api_key
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get_timeout(&self) -> Duration {
        self.timeout
    }

    pub fn get_max_retries(&self) -> u32 {
        self.max_retries
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(CookMasterError::invalid("API key must not be empty"));
        }
        if self.timeout.is_zero() {
            return Err(CookMasterError::invalid("timeout must be positive"));
        }
        if self.max_retries == 0 {
            return Err(CookMasterError::invalid("max_retries must be at least 1"));
        }
        Ok(())
    }

    /// Joins the base URL and an endpoint path with exactly one slash.
    pub(crate) fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}
