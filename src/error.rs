//! Configuration error types for the Instagram API client.
//!
//! This module contains the error raised when the client is asked for
//! something it was not configured to provide: an unknown resource name, an
//! unusable API base URL or an invalid transport timeout.
//!
//! # Example
//!
//! ```rust
//! use instagram_api::{ConfigError, ResourceKind};
//!
//! let result: Result<ResourceKind, ConfigError> = "Comment".parse();
//! assert!(matches!(result, Err(ConfigError::UnknownResource { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client or resolving resources.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The requested resource name does not map to any known resource.
    #[error("Unknown resource '{name}'. Known resources are: {known}.")]
    UnknownResource {
        /// The resource name that was requested.
        name: String,
        /// Comma-separated list of the names that are accepted.
        known: String,
    },

    /// The API base URL is not an absolute http(s) URL.
    #[error("Invalid API base URL '{url}'. Please provide an absolute URL with scheme (e.g., 'https://api.instagram.com/v1').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The transport timeout must be greater than zero.
    #[error("Invalid transport timeout: the request timeout must be greater than zero.")]
    InvalidTimeout,
}
