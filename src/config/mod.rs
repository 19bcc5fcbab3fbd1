//! Configuration types for the Instagram API client.
//!
//! This module provides the transport configuration used when the client
//! talks to the API, plus the validated newtypes it is built from.
//!
//! # Overview
//!
//! - [`TransportConfig`]: Timeouts, API base URL and User-Agent prefix
//! - [`TransportConfigBuilder`]: A builder for constructing [`TransportConfig`]
//! - [`AccessToken`]: A trimmed access token with masked debug output
//! - [`ApiBaseUrl`]: A validated absolute API base URL
//!
//! # Fixed Transport Behavior
//!
//! Response bodies are always returned to the caller and response headers
//! are never mixed into the body. These are not options: the builder offers
//! no way to change them and [`TransportConfig`] only reports them.
//!
//! # Example
//!
//! ```rust
//! use instagram_api::TransportConfig;
//! use std::time::Duration;
//!
//! let config = TransportConfig::builder()
//!     .timeout(Duration::from_secs(10))
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert!(config.returns_body());
//! assert!(!config.includes_headers_in_body());
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ApiBaseUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Transport configuration for the Instagram API client.
///
/// # Thread Safety
///
/// `TransportConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use instagram_api::TransportConfig;
/// use std::time::Duration;
///
/// let config = TransportConfig::default();
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// assert_eq!(config.api_base_url().as_ref(), "https://api.instagram.com/v1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportConfig {
    timeout: Duration,
    connect_timeout: Option<Duration>,
    api_base_url: ApiBaseUrl,
    user_agent_prefix: Option<String>,
}

impl TransportConfig {
    /// Creates a new builder for constructing a `TransportConfig`.
    #[must_use]
    pub fn builder() -> TransportConfigBuilder {
        TransportConfigBuilder::new()
    }

    /// Returns the total request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the connection timeout, if configured.
    #[must_use]
    pub const fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_base_url(&self) -> &ApiBaseUrl {
        &self.api_base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Response bodies are always handed back to the caller.
    #[must_use]
    pub const fn returns_body(&self) -> bool {
        true
    }

    /// Response headers are never included in the returned body.
    #[must_use]
    pub const fn includes_headers_in_body(&self) -> bool {
        false
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: None,
            api_base_url: ApiBaseUrl::default(),
            user_agent_prefix: None,
        }
    }
}

// Verify TransportConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TransportConfig>();
};

/// Builder for constructing [`TransportConfig`] instances.
///
/// # Defaults
///
/// - `timeout`: 5 seconds
/// - `connect_timeout`: `None` (bounded by `timeout`)
/// - `api_base_url`: `https://api.instagram.com/v1`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct TransportConfigBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    api_base_url: Option<String>,
    user_agent_prefix: Option<String>,
}

impl TransportConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the API base URL (useful for proxies and test servers).
    #[must_use]
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`TransportConfig`], validating the supplied values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] if a timeout of zero was set,
    /// or [`ConfigError::InvalidBaseUrl`] if the base URL is not usable.
    pub fn build(self) -> Result<TransportConfig, ConfigError> {
        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        if timeout.is_zero() || self.connect_timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::InvalidTimeout);
        }

        let api_base_url = self
            .api_base_url
            .map(ApiBaseUrl::new)
            .transpose()?
            .unwrap_or_default();

        Ok(TransportConfig {
            timeout,
            connect_timeout: self.connect_timeout,
            api_base_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = TransportConfig::builder().build().unwrap();

        assert_eq!(config, TransportConfig::default());
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(config.connect_timeout().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = TransportConfig::builder()
            .timeout(Duration::from_secs(2))
            .connect_timeout(Duration::from_millis(500))
            .api_base_url("http://localhost:9000/v1/")
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.timeout(), Duration::from_secs(2));
        assert_eq!(config.connect_timeout(), Some(Duration::from_millis(500)));
        assert_eq!(config.api_base_url().as_ref(), "http://localhost:9000/v1");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = TransportConfig::builder().timeout(Duration::ZERO).build();
        assert!(matches!(result, Err(ConfigError::InvalidTimeout)));

        let result = TransportConfig::builder()
            .connect_timeout(Duration::ZERO)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidTimeout)));
    }

    #[test]
    fn test_builder_rejects_invalid_base_url() {
        let result = TransportConfig::builder().api_base_url("nope").build();
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_body_and_header_behavior_is_fixed() {
        let config = TransportConfig::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();

        assert!(config.returns_body());
        assert!(!config.includes_headers_in_body());
    }
}
