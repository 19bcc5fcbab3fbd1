//! HTTP-specific error types for the Instagram API client.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`DecodeError`]: A response body that is not valid JSON
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! Network failures and non-2xx responses together form the transport error
//! family; a body that cannot be decoded is reported separately so callers can
//! tell a broken connection from a broken payload.
//!
//! # Example
//!
//! ```rust,ignore
//! use instagram_api::clients::HttpError;
//!
//! match client.get(url).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Decode(e)) => println!("Bad body: {}", e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message is a JSON serialization of the `meta` block Instagram sends
/// with errors (`error_type`, `error_message`, `code`), or of the top-level
/// `error_type`/`error_message` fields used by the OAuth endpoints.
///
/// # Example
///
/// ```rust
/// use instagram_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 400,
///     message: r#"{"error_type":"OAuthAccessTokenException"}"#.to_string(),
///     error_type: Some("OAuthAccessTokenException".to_string()),
/// };
///
/// println!("Status {}: {}", error.code, error.message);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// The Instagram error type (e.g., `OAuthAccessTokenException`), if reported.
    pub error_type: Option<String>,
}

/// Error returned when a response body cannot be decoded as JSON.
#[derive(Debug, Error)]
#[error("Failed to decode response body from {url}: {source}")]
pub struct DecodeError {
    /// The request URL, with the access token redacted.
    pub url: String,
    /// The underlying JSON error.
    #[source]
    pub source: serde_json::Error,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The response body was not valid JSON.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Network or connection error, including timeouts.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns `true` for failures of the transport itself (network errors
    /// and non-2xx responses), as opposed to undecodable bodies.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Response(_) | Self::Network(_))
    }
}
