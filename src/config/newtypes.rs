//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that
//! normalize or validate their contents on construction.

use crate::error::ConfigError;
use std::fmt;

/// An Instagram API access token.
///
/// The token is trimmed of surrounding whitespace on construction. An empty
/// token is allowed and means "not set"; requests still carry an empty
/// `access_token` parameter in that case and the API rejects them.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AccessToken(*****)` for a set token and `AccessToken("")` for an empty one.
///
/// # Example
///
/// ```rust
/// use instagram_api::AccessToken;
///
/// let token = AccessToken::new("  abc.123  ");
/// assert_eq!(token.as_ref(), "abc.123");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new access token, trimming surrounding whitespace.
    #[must_use]
    pub fn new(token: impl AsRef<str>) -> Self {
        Self(token.as_ref().trim().to_string())
    }

    /// Returns `true` if no token has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("AccessToken(\"\")")
        } else {
            f.write_str("AccessToken(*****)")
        }
    }
}

/// A validated API base URL such as `https://api.instagram.com/v1`.
///
/// The URL must be absolute, use the `http` or `https` scheme and carry a
/// host but no query or fragment. Trailing slashes are removed so endpoint paths can be joined
/// without producing `//`.
///
/// # Example
///
/// ```rust
/// use instagram_api::ApiBaseUrl;
///
/// let base = ApiBaseUrl::new("https://api.instagram.com/v1/").unwrap();
/// assert_eq!(base.as_ref(), "https://api.instagram.com/v1");
/// assert_eq!(base.join("users/search"), "https://api.instagram.com/v1/users/search");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBaseUrl(String);

impl ApiBaseUrl {
    /// The production Instagram API endpoint.
    pub const DEFAULT: &'static str = "https://api.instagram.com/v1";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL cannot be parsed,
    /// is not http(s), has no host, or carries a query or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let parsed = url::Url::parse(trimmed)
            .map_err(|_| ConfigError::InvalidBaseUrl { url: url.clone() })?;
        if !matches!(parsed.scheme(), "http" | "https")
            || !parsed.has_host()
            || parsed.query().is_some()
            || parsed.fragment().is_some()
        {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Joins an endpoint path onto the base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl Default for ApiBaseUrl {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
