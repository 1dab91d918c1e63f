//! # Commerce Configuration
//!
//! Loaded from environment variables with fallback to defaults.
//!
//! ## Environment Variables
//! ```text
//! ┌───────────────────────────────────┬──────────────────────────────────────┐
//! │ Variable                          │ Meaning                              │
//! ├───────────────────────────────────┼──────────────────────────────────────┤
//! │ FONTSTORE_COMMERCE_URL            │ Shop base URL (trailing / stripped)  │
//! │ FONTSTORE_CONSUMER_KEY            │ REST API consumer key                │
//! │ FONTSTORE_CONSUMER_SECRET         │ REST API consumer secret             │
//! │ FONTSTORE_USE_MOCK_DATA           │ "true" → fixture catalog, no network │
//! │ FONTSTORE_REQUEST_TIMEOUT_SECS    │ Per-request timeout (default 30)     │
//! └───────────────────────────────────┴──────────────────────────────────────┘
//! ```
//!
//! Credentials are only required when the live backend is used. Nothing
//! secret has a default.

use std::env;
use std::time::Duration;
use tracing::debug;

/// Base URL used when none is configured.
pub const DEFAULT_COMMERCE_URL: &str = "http://localhost:8080";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Path prefix of the WooCommerce v3 REST API.
pub const API_PREFIX: &str = "wp-json/wc/v3";

/// Commerce backend configuration.
#[derive(Clone)]
pub struct CommerceConfig {
    /// Shop base URL without trailing slash.
    pub base_url: String,

    /// REST API consumer key.
    pub consumer_key: Option<String>,

    /// REST API consumer secret.
    pub consumer_secret: Option<String>,

    /// Serve the fixture catalog instead of calling the shop.
    pub use_mock_data: bool,

    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl std::fmt::Debug for CommerceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommerceConfig")
            .field("base_url", &self.base_url)
            .field("consumer_key", &self.consumer_key.as_deref().map(redact))
            .field("consumer_secret", &self.consumer_secret.as_ref().map(|_| "***"))
            .field("use_mock_data", &self.use_mock_data)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// First few characters of a key, enough to tell keys apart in logs.
fn redact(key: &str) -> String {
    let prefix: String = key.chars().take(6).collect();
    format!("{}...", prefix)
}

impl CommerceConfig {
    /// Configuration for the fixture backend.
    pub fn mock() -> Self {
        CommerceConfig {
            base_url: DEFAULT_COMMERCE_URL.to_string(),
            consumer_key: None,
            consumer_secret: None,
            use_mock_data: true,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Configuration for a live shop.
    pub fn live(
        base_url: impl Into<String>,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Self {
        CommerceConfig {
            base_url: normalize_base_url(&base_url.into()),
            consumer_key: Some(consumer_key.into()),
            consumer_secret: Some(consumer_secret.into()),
            use_mock_data: false,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Sets the request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let use_mock_data = match lookup("FONTSTORE_USE_MOCK_DATA") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| ConfigError::InvalidValue("FONTSTORE_USE_MOCK_DATA".to_string()))?,
            None => false,
        };

        let request_timeout_secs = match lookup("FONTSTORE_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::InvalidValue("FONTSTORE_REQUEST_TIMEOUT_SECS".to_string())
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let config = CommerceConfig {
            base_url: normalize_base_url(
                &lookup("FONTSTORE_COMMERCE_URL").unwrap_or_else(|| DEFAULT_COMMERCE_URL.to_string()),
            ),
            consumer_key: lookup("FONTSTORE_CONSUMER_KEY").filter(|v| !v.trim().is_empty()),
            consumer_secret: lookup("FONTSTORE_CONSUMER_SECRET").filter(|v| !v.trim().is_empty()),
            use_mock_data,
            request_timeout: Duration::from_secs(request_timeout_secs),
        };

        config.validate()?;

        debug!(config = ?config, "Commerce configuration loaded");
        Ok(config)
    }

    /// Checks the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue(
                "FONTSTORE_REQUEST_TIMEOUT_SECS".to_string(),
            ));
        }

        if self.use_mock_data {
            return Ok(());
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue("FONTSTORE_COMMERCE_URL".to_string()));
        }
        if self.consumer_key.is_none() {
            return Err(ConfigError::MissingRequired("FONTSTORE_CONSUMER_KEY".to_string()));
        }
        if self.consumer_secret.is_none() {
            return Err(ConfigError::MissingRequired(
                "FONTSTORE_CONSUMER_SECRET".to_string(),
            ));
        }

        Ok(())
    }

    /// Full URL of a REST endpoint, e.g. `products/62`.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            API_PREFIX,
            endpoint.trim_start_matches('/')
        )
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" | "" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
